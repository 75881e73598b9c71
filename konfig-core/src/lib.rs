//! Core types for Konfig.
//!
//! A build description declares typed configuration values through a [`ConfigBuilder`].
//! Each properties block runs a [`Properties`] scope; nested objects run child scopes.
//! Building yields an immutable [`Config`] whose [`Property`] tree is handed to a
//! language emitter.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod legacy;
mod literal;
mod property;
mod scope;
mod utils;

pub use config::{BuilderState, Config, ConfigBuilder, DEFAULT_CONFIG_NAME};
pub use error::{Error, LEGACY_UNSUPPORTED_TYPE_CODE, Result};
// File operations
pub use file::{FileRules, GeneratedFile};
#[allow(deprecated)]
pub use legacy::{ObjectDefinition, PropertyDefinition};
pub use literal::{LiteralTemplate, RenderMode};
pub use property::{
    LiteralProperty, NumberKind, ObjectProperty, Property, TypeTag, Value, ValueType,
};
pub use scope::{Numeric, Properties};
// String utilities
pub use utils::{to_screaming_snake_case, to_snake_case};
