use miette::Diagnostic;
use thiserror::Error;

/// Result type for config building operations
pub type Result<T> = std::result::Result<T, Error>;

/// Diagnostic code attached to unsupported types rejected by the legacy definition API.
pub const LEGACY_UNSUPPORTED_TYPE_CODE: &str = "4ac3a89c";

/// Errors raised while declaring properties or assembling a config.
///
/// All of them are authoring mistakes in the build description, so they abort the
/// configuration pass at the offending call.
#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum Error {
    #[error("{}unsupported property type '{ty}'", code_prefix(.code))]
    #[diagnostic(
        code(konfig::unsupported_type),
        help("supported types are: string, bool, int, long, float, double")
    )]
    UnsupportedType {
        ty: String,
        code: Option<&'static str>,
    },

    #[error("required field '{field}' is not set")]
    #[diagnostic(code(konfig::missing_field))]
    MissingField { field: &'static str },

    #[error("property '{name}' is already defined in this scope")]
    #[diagnostic(
        code(konfig::duplicate_property),
        help("each property name must be unique within its object")
    )]
    DuplicateName { name: String },

    #[error("property name must not be empty")]
    #[diagnostic(code(konfig::empty_name))]
    EmptyName,

    #[error("property '{name}' is declared as {expected} but its value is {found}")]
    #[diagnostic(code(konfig::value_mismatch))]
    ValueMismatch {
        name: String,
        expected: String,
        found: String,
    },

    #[error("config has already been built")]
    #[diagnostic(code(konfig::already_built))]
    AlreadyBuilt,
}

fn code_prefix(code: &Option<&'static str>) -> String {
    match code {
        Some(code) => format!("<{}> ", code),
        None => String::new(),
    }
}

impl Error {
    /// Create an unsupported type error for the new-style API.
    pub fn unsupported_type(ty: impl Into<String>) -> Self {
        Error::UnsupportedType {
            ty: ty.into(),
            code: None,
        }
    }

    /// Create an unsupported type error carrying the legacy diagnostic code.
    pub fn legacy_unsupported_type(ty: impl Into<String>) -> Self {
        Error::UnsupportedType {
            ty: ty.into(),
            code: Some(LEGACY_UNSUPPORTED_TYPE_CODE),
        }
    }
}
