//! Kotlin literal and type spelling.

use konfig_codegen::{LiteralSyntax, language::raw_text};
use konfig_core::{NumberKind, Value, ValueType};

/// Kotlin literal syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinSyntax;

impl LiteralSyntax for KotlinSyntax {
    fn string(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        out.push('"');
        for c in value.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '$' => out.push_str("\\$"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\u{8}' => out.push_str("\\b"),
                c if c.is_control() => {
                    let mut units = [0u16; 2];
                    for unit in c.encode_utf16(&mut units) {
                        out.push_str(&format!("\\u{:04x}", unit));
                    }
                }
                c => out.push(c),
            }
        }
        out.push('"');
        out
    }

    fn number(&self, value: &Value, kind: NumberKind) -> String {
        match (value, kind) {
            (Value::Int(i32::MIN), _) => "Int.MIN_VALUE".to_string(),
            (Value::Long(i64::MIN), _) => "Long.MIN_VALUE".to_string(),
            (Value::Long(l), _) => format!("{}L", l),
            (Value::Float(_), _) => float_literal(&raw_text(value), "Float", "f"),
            (Value::Double(_), _) => float_literal(&raw_text(value), "Double", ""),
            _ => raw_text(value),
        }
    }

    fn raw(&self, value: &Value) -> String {
        match value {
            // Kotlin has no unsuffixed spelling for a Float constant
            Value::Float(_) => self.number(value, NumberKind::Float),
            Value::Int(i32::MIN) | Value::Long(i64::MIN) => self.number(value, NumberKind::Long),
            _ => raw_text(value),
        }
    }

    fn null(&self) -> &'static str {
        "null"
    }

    fn type_name(&self, ty: ValueType) -> &'static str {
        match ty {
            ValueType::String => "String",
            ValueType::Boolean => "Boolean",
            ValueType::Number(NumberKind::Int) => "Int",
            ValueType::Number(NumberKind::Long) => "Long",
            ValueType::Number(NumberKind::Float) => "Float",
            ValueType::Number(NumberKind::Double) => "Double",
        }
    }

    fn nullable_type_name(&self, ty: ValueType) -> String {
        format!("{}?", self.type_name(ty))
    }
}

/// Spell a float from its raw text; non-finite values use the class constants.
fn float_literal(text: &str, class: &str, suffix: &str) -> String {
    match text {
        "NaN" => format!("{}.NaN", class),
        "inf" => format!("{}.POSITIVE_INFINITY", class),
        "-inf" => format!("{}.NEGATIVE_INFINITY", class),
        _ => format!("{}{}", text, suffix),
    }
}
