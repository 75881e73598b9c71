//! Property model: the immutable tree produced by a configuration pass.

use std::fmt;

use crate::LiteralTemplate;

/// Numeric representation of a number property.
///
/// The runtime value is the same kind of number either way; the subtype only decides
/// which literal syntax the emitted constant needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// Single precision float
    Float,
    /// Double precision float
    Double,
}

impl NumberKind {
    /// Get the schema type name (used in konfig.toml)
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberKind::Int => "int",
            NumberKind::Long => "long",
            NumberKind::Float => "float",
            NumberKind::Double => "double",
        }
    }
}

/// Declared type of a literal property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Boolean,
    Number(NumberKind),
}

impl ValueType {
    /// Get the schema type name (used in konfig.toml)
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Boolean => "bool",
            ValueType::Number(kind) => kind.as_str(),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An explicitly supplied type tag.
///
/// Unlike [`ValueType`] this is open: build descriptions can name any type, and the
/// literal template resolution rejects the ones it cannot emit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    String,
    Boolean,
    Number(NumberKind),
    Other(String),
}

impl TypeTag {
    /// Parse a type name as written in a build description.
    ///
    /// Unknown names are kept as [`TypeTag::Other`] so the error can be reported where
    /// the tag is used.
    pub fn parse(name: &str) -> Self {
        match name {
            "string" | "String" => TypeTag::String,
            "bool" | "boolean" | "Boolean" => TypeTag::Boolean,
            "int" | "Int" => TypeTag::Number(NumberKind::Int),
            "long" | "Long" => TypeTag::Number(NumberKind::Long),
            "float" | "Float" => TypeTag::Number(NumberKind::Float),
            "double" | "Double" => TypeTag::Number(NumberKind::Double),
            other => TypeTag::Other(other.to_string()),
        }
    }

    /// The closed value type this tag names, if any.
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            TypeTag::String => Some(ValueType::String),
            TypeTag::Boolean => Some(ValueType::Boolean),
            TypeTag::Number(kind) => Some(ValueType::Number(*kind)),
            TypeTag::Other(_) => None,
        }
    }
}

impl From<ValueType> for TypeTag {
    fn from(ty: ValueType) -> Self {
        match ty {
            ValueType::String => TypeTag::String,
            ValueType::Boolean => TypeTag::Boolean,
            ValueType::Number(kind) => TypeTag::Number(kind),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::String => f.write_str("string"),
            TypeTag::Boolean => f.write_str("bool"),
            TypeTag::Number(kind) => f.write_str(kind.as_str()),
            TypeTag::Other(name) => f.write_str(name),
        }
    }
}

/// A literal value embedded in generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Boolean(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl Value {
    /// The declared type matching this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::String(_) => ValueType::String,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Int(_) => ValueType::Number(NumberKind::Int),
            Value::Long(_) => ValueType::Number(NumberKind::Long),
            Value::Float(_) => ValueType::Number(NumberKind::Float),
            Value::Double(_) => ValueType::Number(NumberKind::Double),
        }
    }

    /// Convert an integer value to `kind` when `kind` holds it exactly.
    ///
    /// Anything else comes back unchanged, so a later type check reports the mismatch
    /// instead of a silently rounded or truncated constant.
    pub fn coerce_integer(self, kind: NumberKind) -> Self {
        let integer = match &self {
            Value::Int(i) => i64::from(*i),
            Value::Long(l) => *l,
            _ => return self,
        };
        let coerced = match kind {
            NumberKind::Int => i32::try_from(integer).ok().map(Value::Int),
            NumberKind::Long => Some(Value::Long(integer)),
            // i128 keeps the comparison exact at the saturating edges of i64
            NumberKind::Float => Some(integer as f32)
                .filter(|f| *f as i128 == i128::from(integer))
                .map(Value::Float),
            NumberKind::Double => Some(integer as f64)
                .filter(|d| *d as i128 == i128::from(integer))
                .map(Value::Double),
        };
        coerced.unwrap_or(self)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

/// A leaf property holding a single literal.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralProperty {
    name: String,
    ty: ValueType,
    value: Option<Value>,
    template: LiteralTemplate,
    nullable: bool,
}

impl LiteralProperty {
    pub(crate) fn new(
        name: String,
        ty: ValueType,
        value: Option<Value>,
        template: LiteralTemplate,
        nullable: bool,
    ) -> Self {
        debug_assert!(value.as_ref().is_none_or(|v| v.value_type() == ty));
        Self {
            name,
            ty,
            value,
            template,
            nullable,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type of the property.
    pub fn ty(&self) -> ValueType {
        self.ty
    }

    /// The numeric subtype, present only for number properties.
    pub fn number_kind(&self) -> Option<NumberKind> {
        match self.ty {
            ValueType::Number(kind) => Some(kind),
            _ => None,
        }
    }

    /// The literal value, `None` when the property was registered without one.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Template used to render the literal.
    pub fn template(&self) -> LiteralTemplate {
        self.template
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

/// A named group of child properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperty {
    name: String,
    children: Vec<Property>,
}

impl ObjectProperty {
    pub(crate) fn new(name: String, children: Vec<Property>) -> Self {
        Self { name, children }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Child properties in declaration order.
    pub fn children(&self) -> &[Property] {
        &self.children
    }
}

/// One configuration entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    Literal(LiteralProperty),
    Object(ObjectProperty),
}

impl Property {
    pub fn name(&self) -> &str {
        match self {
            Property::Literal(literal) => literal.name(),
            Property::Object(object) => object.name(),
        }
    }

    pub fn as_literal(&self) -> Option<&LiteralProperty> {
        match self {
            Property::Literal(literal) => Some(literal),
            Property::Object(_) => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectProperty> {
        match self {
            Property::Object(object) => Some(object),
            Property::Literal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_integer() {
        assert_eq!(Value::Int(30).coerce_integer(NumberKind::Long), Value::Long(30));
        assert_eq!(Value::Long(7).coerce_integer(NumberKind::Int), Value::Int(7));
        assert_eq!(Value::Int(2).coerce_integer(NumberKind::Double), Value::Double(2.0));
        assert_eq!(
            Value::Long(16_777_216).coerce_integer(NumberKind::Float),
            Value::Float(16_777_216.0)
        );
        assert_eq!(
            Value::Long(16_777_217).coerce_integer(NumberKind::Float),
            Value::Long(16_777_217)
        );
        assert_eq!(
            Value::Long(i64::MAX).coerce_integer(NumberKind::Double),
            Value::Long(i64::MAX)
        );
        assert_eq!(
            Value::Long(3_000_000_000).coerce_integer(NumberKind::Int),
            Value::Long(3_000_000_000)
        );
        assert_eq!(
            Value::Int(16_777_217).coerce_integer(NumberKind::Float),
            Value::Int(16_777_217)
        );
        assert_eq!(
            Value::Boolean(true).coerce_integer(NumberKind::Int),
            Value::Boolean(true)
        );
    }

    #[test]
    fn test_type_tag_parse() {
        assert_eq!(TypeTag::parse("string"), TypeTag::String);
        assert_eq!(TypeTag::parse("Boolean"), TypeTag::Boolean);
        assert_eq!(TypeTag::parse("bool"), TypeTag::Boolean);
        assert_eq!(TypeTag::parse("long"), TypeTag::Number(NumberKind::Long));
        assert_eq!(
            TypeTag::parse("List"),
            TypeTag::Other("List".to_string())
        );
    }

    #[test]
    fn test_type_tag_display() {
        assert_eq!(TypeTag::Number(NumberKind::Float).to_string(), "float");
        assert_eq!(TypeTag::Other("Map".to_string()).to_string(), "Map");
    }

    #[test]
    fn test_value_type() {
        assert_eq!(Value::from("x").value_type(), ValueType::String);
        assert_eq!(Value::from(true).value_type(), ValueType::Boolean);
        assert_eq!(
            Value::from(1_i64).value_type(),
            ValueType::Number(NumberKind::Long)
        );
        assert_eq!(
            Value::from(1.5_f32).value_type(),
            ValueType::Number(NumberKind::Float)
        );
    }
}
