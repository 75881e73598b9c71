//! Identifier spelling per target language.

/// How declared names become identifiers in one target language.
///
/// Transforms run first; a transformed name that is a keyword is then escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Nested object name to type or module name.
    pub object_to_type: fn(&str) -> String,
    /// Top-level object name to file stem.
    pub object_to_file: fn(&str) -> String,
    pub property_to_const: fn(&str) -> String,
    pub reserved_words: &'static [&'static str],
    /// e.g. `object` to `` `object` `` in Kotlin
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// `name`, escaped when it is a keyword.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            return (self.escape_reserved)(name);
        }
        name.to_string()
    }

    pub fn type_name(&self, name: &str) -> String {
        self.safe_name(&(self.object_to_type)(name))
    }

    /// Never escaped.
    pub fn file_name(&self, name: &str) -> String {
        (self.object_to_file)(name)
    }

    pub fn const_name(&self, name: &str) -> String {
        self.safe_name(&(self.property_to_const)(name))
    }
}
