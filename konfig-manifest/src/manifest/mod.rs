//! Manifest types and parsing for konfig.toml files.

mod language;
mod lower;
mod parse;
mod validate;

use std::path::PathBuf;

use indexmap::IndexMap;
use konfig_core::{Config, DEFAULT_CONFIG_NAME};
pub use language::Language;
pub use parse::parse_manifest;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for konfig.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Declared configs, in document order
    #[serde(default)]
    pub config: Vec<ConfigEntry>,
}

/// One `[[config]]` entry.
///
/// Required fields are optional here so that a missing one is reported by the config
/// builder like any other incomplete config.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigEntry {
    pub name: Option<String>,
    pub package: Option<String>,
    pub object: Option<String>,
    /// Output directory, relative to the manifest
    pub destination: Option<PathBuf>,
    #[serde(default)]
    pub language: Language,
    /// Property declarations, in document order
    #[serde(default)]
    pub properties: IndexMap<String, toml::Value>,
}

impl ConfigEntry {
    /// Name of the config, falling back to the default name when unset.
    pub fn effective_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_CONFIG_NAME)
    }
}

/// A built config together with the language it should be emitted in.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigTarget {
    pub language: Language,
    pub config: Config,
}

impl Manifest {
    /// Find a config entry by name.
    pub fn get(&self, name: &str) -> Option<&ConfigEntry> {
        self.config.iter().find(|entry| entry.effective_name() == name)
    }

    /// Names of all declared configs, in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.config.iter().map(ConfigEntry::effective_name)
    }
}
