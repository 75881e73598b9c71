//! Rust-specific naming conventions.

use konfig_codegen::NamingConvention;
use konfig_core::{to_screaming_snake_case, to_snake_case};

/// Path keywords cannot be raw identifiers, so they get a trailing underscore instead.
fn escape_rust_reserved(name: &str) -> String {
    match name {
        "crate" | "self" | "Self" | "super" => format!("{}_", name),
        _ => format!("r#{}", name),
    }
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    object_to_type: to_snake_case,
    object_to_file: to_snake_case,
    property_to_const: to_screaming_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "gen", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield",
    ],
    escape_reserved: escape_rust_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_naming_module() {
        assert_eq!(RUST_NAMING.type_name("server"), "server");
        assert_eq!(RUST_NAMING.type_name("connectionPool"), "connection_pool");
    }

    #[test]
    fn test_rust_naming_file() {
        assert_eq!(RUST_NAMING.file_name("AppConfig"), "app_config");
    }

    #[test]
    fn test_rust_naming_const() {
        assert_eq!(RUST_NAMING.const_name("apiUrl"), "API_URL");
        assert_eq!(RUST_NAMING.const_name("max_retries"), "MAX_RETRIES");
        assert_eq!(RUST_NAMING.const_name("type"), "TYPE");
    }

    #[test]
    fn test_rust_escape_reserved() {
        assert_eq!(RUST_NAMING.type_name("type"), "r#type");
        assert_eq!(RUST_NAMING.type_name("match"), "r#match");
        assert_eq!(RUST_NAMING.type_name("super"), "super_");
        assert_eq!(RUST_NAMING.type_name("self"), "self_");
        assert!(!RUST_NAMING.is_reserved("database"));
    }
}
