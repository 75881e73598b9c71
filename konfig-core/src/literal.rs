//! Literal template selection.
//!
//! A [`LiteralTemplate`] records how a property's value must be spelled in generated
//! source. It is chosen once, when the property is registered, so emitters only ever
//! see supported shapes.

use crate::{Error, NumberKind, Result, TypeTag, ValueType};

/// Literal syntax pattern for a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralTemplate {
    /// Quoted and escaped string literal.
    Quoted,
    /// Value written verbatim (`true`, `42`).
    Raw,
    /// Numeric literal whose shape depends on the subtype (`42L`, `1.5f`).
    Number(NumberKind),
}

/// Rule set used to resolve templates from explicit type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Full rule set with subtype-aware numbers.
    #[default]
    Standard,
    /// Reduced rule set of the deprecated definition API: every number is raw and
    /// rejected types carry [`crate::LEGACY_UNSUPPORTED_TYPE_CODE`].
    Legacy,
}

impl LiteralTemplate {
    /// Template for a declared value type.
    pub fn for_type(ty: ValueType) -> Self {
        match ty {
            ValueType::String => LiteralTemplate::Quoted,
            ValueType::Boolean => LiteralTemplate::Raw,
            ValueType::Number(kind) => LiteralTemplate::Number(kind),
        }
    }

    /// Resolve the template for an explicit type tag.
    pub fn resolve(tag: &TypeTag, mode: RenderMode) -> Result<Self> {
        let template = match (tag, mode) {
            (TypeTag::String, _) => LiteralTemplate::Quoted,
            (TypeTag::Boolean, _) => LiteralTemplate::Raw,
            (TypeTag::Number(_), RenderMode::Legacy) => LiteralTemplate::Raw,
            (TypeTag::Number(kind), RenderMode::Standard) => LiteralTemplate::Number(*kind),
            (TypeTag::Other(name), RenderMode::Standard) => {
                return Err(Error::unsupported_type(name.as_str()));
            }
            (TypeTag::Other(name), RenderMode::Legacy) => {
                return Err(Error::legacy_unsupported_type(name.as_str()));
            }
        };
        tracing::trace!(%tag, ?mode, ?template, "resolved literal template");
        Ok(template)
    }
}
