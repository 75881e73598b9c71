use std::{fmt, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::Language;

/// Manifest errors are boxed: the source snippet makes them large.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Manifest text and the name it is reported under.
#[derive(Debug, Clone)]
pub struct SourceContext {
    text: String,
    name: String,
}

impl SourceContext {
    pub fn new(text: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            name: name.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.text.clone())
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            span: source.span().map(SourceSpan::from),
            src: self.named_source(),
            source,
        })
    }

    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// `context` describes where the name appears, e.g. "property in 'main.server'".
    pub fn name_error(
        &self,
        name: &str,
        context: impl Into<String>,
        problem: NameProblem,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidName {
            src: self.named_source(),
            span,
            name: name.to_string(),
            context: context.into(),
            problem,
        })
    }

    pub fn invalid_type_error(
        &self,
        property: &str,
        ty: &str,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidType {
            src: self.named_source(),
            span,
            property: property.to_string(),
            ty: ty.to_string(),
        })
    }
}

/// Why a declared name cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameProblem {
    /// Not an identifier; carries the reason.
    Shape(&'static str),
    /// Reserved word of the config's target language.
    Keyword(Language),
}

impl fmt::Display for NameProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(reason) => f.write_str(reason),
            Self::Keyword(language) => {
                write!(f, "it is a reserved {} keyword", language.display_name())
            }
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot read manifest '{path}'")]
    #[diagnostic(
        code(konfig::io_error),
        help("point --config at an existing konfig.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest is not valid TOML")]
    #[diagnostic(code(konfig::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(konfig::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("{context} name '{name}' is unusable: {problem}")]
    #[diagnostic(
        code(konfig::invalid_name),
        help("names are letters, digits and '_', do not start with a digit, and are not keywords of the target language")
    )]
    InvalidName {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        problem: NameProblem,
    },

    #[error("property '{property}' has unsupported type '{ty}'")]
    #[diagnostic(
        code(konfig::invalid_type),
        help("use one of: string, bool, int, long, float, double")
    )]
    InvalidType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: Option<SourceSpan>,
        property: String,
        ty: String,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] konfig_core::Error),
}

impl From<konfig_core::Error> for Box<Error> {
    fn from(error: konfig_core::Error) -> Self {
        Box::new(Error::Config(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(error: &Error) -> Option<String> {
        error.code().map(|code| code.to_string())
    }

    #[test]
    fn test_validation_error_carries_source() {
        let ctx = SourceContext::new("[[config]]\n", "konfig.toml");
        let error = ctx.validation_error("something is off", Some(SourceSpan::from((2, 6))));

        assert_eq!(error.to_string(), "something is off");
        assert!(error.source_code().is_some());
        assert_eq!(code(&error).as_deref(), Some("konfig::validation_error"));
    }

    #[test]
    fn test_name_error_messages() {
        let ctx = SourceContext::new("", "konfig.toml");

        let keyword = ctx.name_error(
            "object",
            "property",
            NameProblem::Keyword(Language::Kotlin),
            None,
        );
        assert_eq!(
            keyword.to_string(),
            "property name 'object' is unusable: it is a reserved Kotlin keyword"
        );

        let shape = ctx.name_error("1st", "object", NameProblem::Shape("starts with a digit"), None);
        assert_eq!(shape.to_string(), "object name '1st' is unusable: starts with a digit");
        assert_eq!(code(&shape).as_deref(), Some("konfig::invalid_name"));
    }

    #[test]
    fn test_config_errors_stay_transparent() {
        let error: Box<Error> = konfig_core::Error::MissingField {
            field: "destination",
        }
        .into();

        assert_eq!(error.to_string(), "required field 'destination' is not set");
        assert_eq!(code(&error).as_deref(), Some("konfig::missing_field"));
    }
}
