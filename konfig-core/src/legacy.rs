//! Deprecated two-step definition API.
//!
//! Older build descriptions first create a definition (`property("name", tag)`) and then
//! assign a value to it. Definitions lower into the same append operation as the
//! new-style calls, so both styles can be mixed in one scope.

#![allow(deprecated)]

use crate::{
    LiteralProperty, LiteralTemplate, ObjectProperty, Properties, Property, RenderMode, Result,
    TypeTag, Value, scope::checked_type,
};

/// A named, typed property awaiting its value.
#[deprecated(note = "use the typed registration methods on `Properties` instead")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    name: String,
    tag: TypeTag,
}

impl PropertyDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A named object awaiting its children.
#[deprecated(note = "use `Properties::object` instead")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDefinition {
    name: String,
}

impl ObjectDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Properties {
    /// Define a property with an explicit type tag.
    #[deprecated(note = "use the typed registration methods on `Properties` instead")]
    pub fn property(&self, name: &str, tag: TypeTag) -> PropertyDefinition {
        PropertyDefinition {
            name: name.to_string(),
            tag,
        }
    }

    /// Assign a value to a definition, appending a non-nullable literal.
    ///
    /// Only string, boolean and number tags are accepted; numbers keep their raw spelling.
    /// Integers are converted to the tagged number kind when it holds them exactly, so
    /// `set(property("t", Long), 30)` needs no suffix.
    #[deprecated(note = "use the typed registration methods on `Properties` instead")]
    pub fn set(
        &mut self,
        definition: PropertyDefinition,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        let template = LiteralTemplate::resolve(&definition.tag, RenderMode::Legacy)?;
        let value = match definition.tag {
            TypeTag::Number(kind) => value.into().coerce_integer(kind),
            _ => value.into(),
        };
        let ty = checked_type(&definition.name, &definition.tag, Some(&value))?;
        self.append(Property::Literal(LiteralProperty::new(
            definition.name,
            ty,
            Some(value),
            template,
            false,
        )))
    }

    #[deprecated(note = "use `Properties::object` instead")]
    pub fn obj(&self, name: &str) -> ObjectDefinition {
        ObjectDefinition {
            name: name.to_string(),
        }
    }

    /// Fill an object definition from a fresh child scope.
    #[deprecated(note = "use `Properties::object` instead")]
    pub fn set_object<F>(&mut self, definition: ObjectDefinition, build: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Properties) -> Result<()>,
    {
        let children = Properties::collect(build)?;
        self.append(Property::Object(ObjectProperty::new(
            definition.name,
            children,
        )))
    }
}
