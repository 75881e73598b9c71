//! Shared code generation utilities for Konfig.
//!
//! This crate provides language-agnostic abstractions used by the language emitters
//! (e.g., `konfig-codegen-kotlin`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, LiteralSyntax, etc.)

pub mod builder;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::{
    GenerateResult, LanguageCodegen, LiteralSyntax, NamingConvention, PreviewFile, preview_file,
    write_files,
};
