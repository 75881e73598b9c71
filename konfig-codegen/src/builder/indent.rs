/// Indentation unit for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
    Tab,
}

impl Indent {
    /// rustfmt default
    pub const RUST: Self = Self::Spaces(4);

    /// Kotlin coding conventions
    pub const KOTLIN: Self = Self::Spaces(4);

    /// Append `level` indentation units to `buffer`.
    pub fn write(&self, buffer: &mut String, level: usize) {
        match self {
            Self::Spaces(width) => buffer.extend(std::iter::repeat_n(' ', width * level)),
            Self::Tab => buffer.extend(std::iter::repeat_n('\t', level)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_levels() {
        let mut buffer = String::new();
        Indent::Spaces(2).write(&mut buffer, 3);
        assert_eq!(buffer, "      ");

        let mut buffer = String::new();
        Indent::Tab.write(&mut buffer, 2);
        assert_eq!(buffer, "\t\t");

        let mut buffer = String::new();
        Indent::KOTLIN.write(&mut buffer, 0);
        assert!(buffer.is_empty());
    }
}
