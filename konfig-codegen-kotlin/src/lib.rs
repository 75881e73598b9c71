//! Kotlin emitter for Konfig.
//!
//! Renders a [`Config`](konfig_core::Config) as a Kotlin `object` whose members are
//! `const val` declarations, with nested objects for object properties.

mod generator;
mod naming;
mod syntax;

pub mod ast;
pub mod files;

pub use generator::Generator;
pub use konfig_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use naming::KOTLIN_NAMING;
pub use syntax::KotlinSyntax;
