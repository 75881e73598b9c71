//! File generators for Rust output.

mod config_rs;

pub use config_rs::ConfigRs;

/// Header prepended to every generated Rust file.
pub const GENERATED_HEADER: &str = "// Generated by konfig. Do not edit.";
