//! Rust literal and type spelling.

use konfig_codegen::{LiteralSyntax, language::raw_text};
use konfig_core::{NumberKind, Value, ValueType};

/// Rust literal syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustSyntax;

impl LiteralSyntax for RustSyntax {
    fn string(&self, value: &str) -> String {
        format!("{:?}", value)
    }

    fn number(&self, value: &Value, _kind: NumberKind) -> String {
        match value {
            Value::Long(l) => format!("{}i64", l),
            Value::Float(_) => float_literal(&raw_text(value), "f32", "f32"),
            Value::Double(_) => float_literal(&raw_text(value), "f64", ""),
            _ => raw_text(value),
        }
    }

    fn raw(&self, value: &Value) -> String {
        match value {
            Value::Float(f) if !f.is_finite() => self.number(value, NumberKind::Float),
            Value::Double(d) if !d.is_finite() => self.number(value, NumberKind::Double),
            _ => raw_text(value),
        }
    }

    fn null(&self) -> &'static str {
        "None"
    }

    fn type_name(&self, ty: ValueType) -> &'static str {
        match ty {
            ValueType::String => "&str",
            ValueType::Boolean => "bool",
            ValueType::Number(NumberKind::Int) => "i32",
            ValueType::Number(NumberKind::Long) => "i64",
            ValueType::Number(NumberKind::Float) => "f32",
            ValueType::Number(NumberKind::Double) => "f64",
        }
    }

    fn nullable_type_name(&self, ty: ValueType) -> String {
        format!("Option<{}>", self.type_name(ty))
    }
}

/// Spell a float from its raw text; non-finite values use the primitive's constants.
fn float_literal(text: &str, primitive: &str, suffix: &str) -> String {
    match text {
        "NaN" => format!("{}::NAN", primitive),
        "inf" => format!("{}::INFINITY", primitive),
        "-inf" => format!("{}::NEG_INFINITY", primitive),
        _ => format!("{}{}", text, suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_escaping() {
        let syntax = RustSyntax;
        assert_eq!(syntax.string("https://example.com"), "\"https://example.com\"");
        assert_eq!(syntax.string("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(syntax.string("cost: $5"), "\"cost: $5\"");
        assert_eq!(syntax.string("it's"), "\"it's\"");
        assert_eq!(syntax.string("a\\b\n"), "\"a\\\\b\\n\"");
        assert_eq!(syntax.string("\u{1}"), "\"\\u{1}\"");
    }

    #[test]
    fn test_integer_literals() {
        let syntax = RustSyntax;
        assert_eq!(syntax.number(&Value::Int(30), NumberKind::Int), "30");
        assert_eq!(syntax.number(&Value::Int(i32::MIN), NumberKind::Int), "-2147483648");
        assert_eq!(syntax.number(&Value::Long(30), NumberKind::Long), "30i64");
    }

    #[test]
    fn test_float_literals() {
        let syntax = RustSyntax;
        assert_eq!(syntax.number(&Value::Float(1.5), NumberKind::Float), "1.5f32");
        assert_eq!(syntax.number(&Value::Float(2.0), NumberKind::Float), "2.0f32");
        assert_eq!(syntax.number(&Value::Double(1.5), NumberKind::Double), "1.5");
        assert_eq!(syntax.number(&Value::Double(30.0), NumberKind::Double), "30.0");
        assert_eq!(
            syntax.number(&Value::Float(f32::NAN), NumberKind::Float),
            "f32::NAN"
        );
        assert_eq!(
            syntax.number(&Value::Double(f64::NEG_INFINITY), NumberKind::Double),
            "f64::NEG_INFINITY"
        );
    }

    #[test]
    fn test_raw_literals() {
        let syntax = RustSyntax;
        assert_eq!(syntax.raw(&Value::Long(30)), "30");
        assert_eq!(syntax.raw(&Value::Float(0.5)), "0.5");
        assert_eq!(syntax.raw(&Value::Double(f64::INFINITY)), "f64::INFINITY");
    }

    #[test]
    fn test_type_names() {
        let syntax = RustSyntax;
        assert_eq!(syntax.type_name(ValueType::String), "&str");
        assert_eq!(
            syntax.nullable_type_name(ValueType::Number(NumberKind::Int)),
            "Option<i32>"
        );
    }
}
