//! File generators for Kotlin output.

mod config_kt;

pub use config_kt::ConfigKt;

/// Header prepended to every generated Kotlin file.
pub const GENERATED_HEADER: &str = "// Generated by konfig. Do not edit.";
