//! Target languages a config can be emitted in.

use std::{fmt, str::FromStr};

use konfig_core::{to_screaming_snake_case, to_snake_case};
use serde::{Deserialize, Serialize};

/// Supported target languages for code generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Kotlin `object` with `const val` members
    #[default]
    Kotlin,
    /// Rust module with `pub const` items
    Rust,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Kotlin => "kotlin",
            Language::Rust => "rust",
        }
    }

    /// Display name used in diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Kotlin => "Kotlin",
            Language::Rust => "Rust",
        }
    }

    /// Reserved words that cannot be used as names in this language.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Language::Kotlin => KOTLIN_KEYWORDS,
            Language::Rust => RUST_KEYWORDS,
        }
    }

    pub fn is_keyword(&self, name: &str) -> bool {
        self.keywords().contains(&name)
    }

    /// Identifier the emitter writes for a declared property or object name.
    ///
    /// Kotlin keeps names as declared. Rust renames objects to snake_case modules and
    /// literals to SCREAMING_SNAKE_CASE constants, so distinct names can meet.
    pub fn emitted_name(&self, name: &str, is_object: bool) -> String {
        match self {
            Language::Kotlin => name.to_string(),
            Language::Rust if is_object => to_snake_case(name),
            Language::Rust => to_screaming_snake_case(name),
        }
    }
}

/// Kotlin hard keywords
const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Rust strict and reserved keywords
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "gen",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kotlin" | "kt" => Ok(Language::Kotlin),
            "rust" | "rs" => Ok(Language::Rust),
            _ => Err(format!(
                "unknown language '{}', expected 'kotlin' or 'rust'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Language::from_str("kotlin").unwrap(), Language::Kotlin);
        assert_eq!(Language::from_str("kt").unwrap(), Language::Kotlin);
        assert_eq!(Language::from_str("Rust").unwrap(), Language::Rust);
        assert_eq!(Language::from_str("rs").unwrap(), Language::Rust);
        assert!(Language::from_str("java").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::Kotlin.to_string(), "kotlin");
        assert_eq!(Language::Rust.to_string(), "rust");
    }

    #[test]
    fn test_default_is_kotlin() {
        assert_eq!(Language::default(), Language::Kotlin);
    }

    #[test]
    fn test_deserialize() {
        let kotlin: Language = serde_json::from_str(r#""kotlin""#).unwrap();
        assert_eq!(kotlin, Language::Kotlin);

        let rust: Language = serde_json::from_str(r#""rust""#).unwrap();
        assert_eq!(rust, Language::Rust);

        assert!(serde_json::from_str::<Language>(r#""java""#).is_err());
    }

    #[test]
    fn test_emitted_name() {
        assert_eq!(Language::Kotlin.emitted_name("apiUrl", false), "apiUrl");
        assert_eq!(Language::Rust.emitted_name("apiUrl", false), "API_URL");
        assert_eq!(Language::Rust.emitted_name("api_url", false), "API_URL");
        assert_eq!(Language::Rust.emitted_name("Server", true), "server");
    }

    #[test]
    fn test_keywords() {
        assert!(Language::Kotlin.is_keyword("object"));
        assert!(!Language::Kotlin.is_keyword("type"));
        assert!(Language::Rust.is_keyword("type"));
        assert!(!Language::Rust.is_keyword("object"));
    }
}
