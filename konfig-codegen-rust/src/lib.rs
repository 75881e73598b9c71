//! Rust emitter for Konfig.
//!
//! Renders a [`Config`](konfig_core::Config) as a Rust source file of `pub const` items,
//! with a nested `pub mod` for every object property.

mod generator;
mod naming;
mod syntax;

pub mod ast;
pub mod files;

pub use generator::Generator;
pub use konfig_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use naming::RUST_NAMING;
pub use syntax::RustSyntax;
