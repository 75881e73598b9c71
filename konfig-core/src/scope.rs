//! Property accumulation for one configuration level.

use crate::{
    Error, LiteralProperty, LiteralTemplate, NumberKind, ObjectProperty, Property, RenderMode,
    Result, TypeTag, Value, ValueType,
};

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Number types accepted by [`Properties::number`].
///
/// Each implementation fixes the numeric subtype of the registered property.
pub trait Numeric: sealed::Sealed + Copy {
    const KIND: NumberKind;

    fn into_value(self) -> Value;
}

impl Numeric for i32 {
    const KIND: NumberKind = NumberKind::Int;

    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl Numeric for i64 {
    const KIND: NumberKind = NumberKind::Long;

    fn into_value(self) -> Value {
        Value::Long(self)
    }
}

impl Numeric for f32 {
    const KIND: NumberKind = NumberKind::Float;

    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl Numeric for f64 {
    const KIND: NumberKind = NumberKind::Double;

    fn into_value(self) -> Value {
        Value::Double(self)
    }
}

/// Accumulates the properties declared in one scope.
///
/// A scope is either the top level of a config or the body of an object property.
/// Every registration appends exactly one property, so the resulting sequence follows
/// call order.
///
/// # Example
///
/// ```
/// use konfig_core::Properties;
///
/// let mut scope = Properties::new();
/// scope
///     .string("api_url", "https://example.com")?
///     .bool("enabled", true)?
///     .object("server", |server| {
///         server.string("host", "localhost")?.int("port", 8080)?;
///         Ok(())
///     })?;
///
/// let names: Vec<_> = scope.iter().map(|p| p.name()).collect();
/// assert_eq!(names, ["api_url", "enabled", "server"]);
/// # Ok::<(), konfig_core::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Properties {
    entries: Vec<Property>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(&mut self, name: &str, value: impl Into<String>) -> Result<&mut Self> {
        self.literal(name, ValueType::String, Some(Value::String(value.into())))
    }

    pub fn nullable_string(&mut self, name: &str, value: Option<String>) -> Result<&mut Self> {
        self.literal(name, ValueType::String, value.map(Value::String))
    }

    pub fn bool(&mut self, name: &str, value: bool) -> Result<&mut Self> {
        self.literal(name, ValueType::Boolean, Some(Value::Boolean(value)))
    }

    pub fn nullable_bool(&mut self, name: &str, value: Option<bool>) -> Result<&mut Self> {
        self.literal(name, ValueType::Boolean, value.map(Value::Boolean))
    }

    /// Alias of [`Properties::bool`].
    pub fn boolean(&mut self, name: &str, value: bool) -> Result<&mut Self> {
        self.bool(name, value)
    }

    /// Alias of [`Properties::nullable_bool`].
    pub fn nullable_boolean(&mut self, name: &str, value: Option<bool>) -> Result<&mut Self> {
        self.nullable_bool(name, value)
    }

    /// Register a number whose subtype is fixed by `N`.
    pub fn number<N: Numeric>(&mut self, name: &str, value: N) -> Result<&mut Self> {
        self.nullable_number(name, Some(value))
    }

    pub fn nullable_number<N: Numeric>(
        &mut self,
        name: &str,
        value: Option<N>,
    ) -> Result<&mut Self> {
        self.literal(
            name,
            ValueType::Number(N::KIND),
            value.map(Numeric::into_value),
        )
    }

    pub fn int(&mut self, name: &str, value: i32) -> Result<&mut Self> {
        self.number(name, value)
    }

    pub fn nullable_int(&mut self, name: &str, value: Option<i32>) -> Result<&mut Self> {
        self.nullable_number(name, value)
    }

    pub fn long(&mut self, name: &str, value: i64) -> Result<&mut Self> {
        self.number(name, value)
    }

    pub fn nullable_long(&mut self, name: &str, value: Option<i64>) -> Result<&mut Self> {
        self.nullable_number(name, value)
    }

    pub fn float(&mut self, name: &str, value: f32) -> Result<&mut Self> {
        self.number(name, value)
    }

    pub fn nullable_float(&mut self, name: &str, value: Option<f32>) -> Result<&mut Self> {
        self.nullable_number(name, value)
    }

    pub fn double(&mut self, name: &str, value: f64) -> Result<&mut Self> {
        self.number(name, value)
    }

    pub fn nullable_double(&mut self, name: &str, value: Option<f64>) -> Result<&mut Self> {
        self.nullable_number(name, value)
    }

    /// Register a literal whose type comes from an explicit tag.
    ///
    /// Fails with [`Error::UnsupportedType`] for tags outside the supported set and with
    /// [`Error::ValueMismatch`] when `value` does not match the tag.
    pub fn tagged(&mut self, name: &str, tag: &TypeTag, value: Option<Value>) -> Result<&mut Self> {
        let template = LiteralTemplate::resolve(tag, RenderMode::Standard)?;
        let ty = checked_type(name, tag, value.as_ref())?;
        let nullable = value.is_none();
        self.append(Property::Literal(LiteralProperty::new(
            name.to_string(),
            ty,
            value,
            template,
            nullable,
        )))
    }

    /// Register a nested object.
    ///
    /// `build` runs against a fresh child scope; the object is appended only once it
    /// returns successfully.
    pub fn object<F>(&mut self, name: &str, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Properties) -> Result<()>,
    {
        let children = Properties::collect(build)?;
        self.append(Property::Object(ObjectProperty::new(
            name.to_string(),
            children,
        )))
    }

    /// Run `build` against a new scope and return its finished sequence.
    pub fn collect<F>(build: F) -> Result<Vec<Property>>
    where
        F: FnOnce(&mut Properties) -> Result<()>,
    {
        let mut scope = Properties::new();
        build(&mut scope)?;
        Ok(scope.into_inner())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.iter()
    }

    /// Whether a property with this name is already declared in this scope.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|p| p.name() == name)
    }

    /// Consume the scope and return its properties in declaration order.
    pub fn into_inner(self) -> Vec<Property> {
        self.entries
    }

    fn literal(
        &mut self,
        name: &str,
        ty: ValueType,
        value: Option<Value>,
    ) -> Result<&mut Self> {
        let nullable = value.is_none();
        self.append(Property::Literal(LiteralProperty::new(
            name.to_string(),
            ty,
            value,
            LiteralTemplate::for_type(ty),
            nullable,
        )))
    }

    /// Single entry point for both registration APIs.
    pub(crate) fn append(&mut self, property: Property) -> Result<&mut Self> {
        let name = property.name();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.contains(name) {
            return Err(Error::DuplicateName {
                name: name.to_string(),
            });
        }
        tracing::debug!(name, index = self.entries.len(), "registered property");
        self.entries.push(property);
        Ok(self)
    }
}

/// Check an optional value against an explicit tag and return the declared type.
pub(crate) fn checked_type(name: &str, tag: &TypeTag, value: Option<&Value>) -> Result<ValueType> {
    let Some(ty) = tag.value_type() else {
        return Err(Error::unsupported_type(tag.to_string()));
    };
    match value {
        Some(value) if value.value_type() != ty => Err(Error::ValueMismatch {
            name: name.to_string(),
            expected: ty.to_string(),
            found: value.value_type().to_string(),
        }),
        _ => Ok(ty),
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
