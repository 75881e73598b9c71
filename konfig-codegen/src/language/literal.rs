//! Literal spelling per target language.

use konfig_core::{LiteralProperty, LiteralTemplate, NumberKind, Value, ValueType};

/// Spells property values and types in a target language.
///
/// Emitters implement the primitive spellings; [`LiteralSyntax::literal`] combines them
/// with the template chosen at registration time.
pub trait LiteralSyntax {
    /// Quoted, escaped string literal.
    fn string(&self, value: &str) -> String;

    /// Subtype-aware numeric literal.
    fn number(&self, value: &Value, kind: NumberKind) -> String;

    /// Literal for an absent value.
    fn null(&self) -> &'static str;

    /// Type name for a non-nullable value.
    fn type_name(&self, ty: ValueType) -> &'static str;

    /// Type name for a nullable value.
    fn nullable_type_name(&self, ty: ValueType) -> String;

    /// Value written verbatim.
    fn raw(&self, value: &Value) -> String {
        raw_text(value)
    }

    /// Declared type of a property.
    fn property_type(&self, property: &LiteralProperty) -> String {
        if property.is_nullable() {
            self.nullable_type_name(property.ty())
        } else {
            self.type_name(property.ty()).to_string()
        }
    }

    /// Render the literal for a property.
    fn literal(&self, property: &LiteralProperty) -> String {
        let Some(value) = property.value() else {
            return self.null().to_string();
        };
        match property.template() {
            LiteralTemplate::Quoted => match value {
                Value::String(s) => self.string(s),
                other => self.string(&raw_text(other)),
            },
            LiteralTemplate::Raw => self.raw(value),
            LiteralTemplate::Number(kind) => self.number(value, kind),
        }
    }
}

/// Plain textual form of a value, with floating point values always carrying a
/// decimal point.
pub fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Boolean(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Long(l) => l.to_string(),
        Value::Float(f) => with_decimal_point(f.to_string()),
        Value::Double(d) => with_decimal_point(d.to_string()),
    }
}

/// Append `.0` to finite integral float text (`30` -> `30.0`).
pub fn with_decimal_point(text: String) -> String {
    let is_finite = text.chars().all(|c| c.is_ascii_digit() || c == '-' || c == '.');
    if is_finite && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}
