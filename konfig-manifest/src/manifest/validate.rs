//! Validation of names and types against the manifest source.

use miette::SourceSpan;

use super::Language;
use crate::{Error, NameProblem, Result, SourceContext};

/// Locates names in the manifest source while walking nested property tables.
///
/// ```ignore
/// let root = ParseContext::new(&source);
/// root.validate_name("AppConfig", "object", Language::Kotlin)?;
/// root.nested("main").nested("server").validate_name("port", "property", Language::Kotlin)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
    /// Dotted location, e.g. `main.server`; empty at the top level.
    scope: String,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            scope: String::new(),
        }
    }

    pub fn source(&self) -> &'a SourceContext {
        self.source
    }

    /// Context one table deeper.
    pub fn nested(&self, table: &str) -> Self {
        let scope = if self.scope.is_empty() {
            table.to_string()
        } else {
            format!("{}.{table}", self.scope)
        };
        Self {
            source: self.source,
            scope,
        }
    }

    /// `kind`, qualified by the current scope: "property in 'main.server'".
    pub fn describe(&self, kind: &str) -> String {
        match self.scope.as_str() {
            "" => kind.to_string(),
            scope => format!("{kind} in '{scope}'"),
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.text(), name)
    }

    /// Reject names that are not identifiers or are keywords of `language`.
    pub fn validate_name(&self, name: &str, kind: &str, language: Language) -> Result<()> {
        let problem = match validate_identifier(name) {
            Some(reason) => NameProblem::Shape(reason),
            None if language.is_keyword(name) => NameProblem::Keyword(language),
            None => return Ok(()),
        };
        Err(self
            .source
            .name_error(name, self.describe(kind), problem, self.find_span(name)))
    }

    pub fn error_at(&self, name: &str, message: impl Into<String>) -> Box<Error> {
        self.source.validation_error(message, self.find_span(name))
    }

    /// Points at the quoted type string when it can be found, else at the property.
    pub fn invalid_type_error(&self, property: &str, ty: &str) -> Box<Error> {
        let span = find_quoted_span(self.source.text(), ty).or_else(|| self.find_span(property));
        self.source.invalid_type_error(property, ty, span)
    }
}

/// Span of `name` as a key: a dotted table header segment first, then a key at the
/// start of a line, then any occurrence at all.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let span = |start: usize| SourceSpan::from((start, name.len()));

    // Each candidate begins with one marker character before the name.
    let keyed = [
        format!(".{name}]"),
        format!(".{name}."),
        format!("\n{name} ="),
        format!("\n{name}="),
    ]
    .iter()
    .find_map(|candidate| src.find(candidate.as_str()))
    .map(|at| span(at + 1));

    keyed.or_else(|| src.find(name).map(span))
}

/// Span of `"value"`, quotes excluded.
fn find_quoted_span(src: &str, value: &str) -> Option<SourceSpan> {
    src.find(&format!("\"{value}\""))
        .map(|at| SourceSpan::from((at + 1, value.len())))
}

/// Why `name` is not an identifier, or `None` when it is one.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let Some(first) = name.chars().next() else {
        return Some("it is empty");
    };
    if !(first == '_' || first.is_ascii_alphabetic()) {
        return Some("it must begin with a letter or '_'");
    }
    if !name.chars().all(|c| c == '_' || c.is_ascii_alphanumeric()) {
        return Some("it may only contain letters, digits and '_'");
    }
    None
}
