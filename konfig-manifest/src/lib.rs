//! `konfig.toml` parsing, validation and lowering for Konfig.
//!
//! A manifest declares one or more configs. Each is validated against its source text,
//! so errors point at the offending key, and then lowered into the
//! [`ConfigBuilder`](konfig_core::ConfigBuilder) calls that produce a
//! [`Config`](konfig_core::Config).

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, NameProblem, Result, SourceContext};
pub use manifest::{ConfigEntry, ConfigTarget, Language, Manifest, ParseContext, parse_manifest};
