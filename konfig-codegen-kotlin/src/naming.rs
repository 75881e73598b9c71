//! Kotlin-specific naming conventions.

use konfig_codegen::NamingConvention;

fn keep(name: &str) -> String {
    name.to_string()
}

fn escape_kotlin_reserved(name: &str) -> String {
    format!("`{}`", name)
}

/// Kotlin naming conventions.
///
/// Names are kept as declared; hard keywords are escaped with backticks.
pub const KOTLIN_NAMING: NamingConvention = NamingConvention {
    object_to_type: keep,
    object_to_file: keep,
    property_to_const: keep,
    reserved_words: &[
        "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
        "interface", "is", "null", "object", "package", "return", "super", "this", "throw",
        "true", "try", "typealias", "typeof", "val", "var", "when", "while",
    ],
    escape_reserved: escape_kotlin_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kotlin_naming_keeps_names() {
        assert_eq!(KOTLIN_NAMING.const_name("apiUrl"), "apiUrl");
        assert_eq!(KOTLIN_NAMING.type_name("server"), "server");
        assert_eq!(KOTLIN_NAMING.file_name("AppConfig"), "AppConfig");
    }

    #[test]
    fn test_kotlin_reserved_words() {
        assert_eq!(KOTLIN_NAMING.const_name("object"), "`object`");
        assert_eq!(KOTLIN_NAMING.type_name("package"), "`package`");
        assert!(!KOTLIN_NAMING.is_reserved("value"));
    }
}
