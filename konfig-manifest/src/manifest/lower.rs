//! Lowering of manifest entries into config builder calls.

use std::path::Path;

use konfig_core::{Config, ConfigBuilder, NumberKind, Properties, TypeTag, Value, ValueType};

use super::{ConfigEntry, ConfigTarget, Manifest};
use crate::Result;

impl Manifest {
    /// Build every declared config. Destinations are resolved against `root`, the
    /// directory holding the manifest.
    pub fn configs(&self, root: &Path) -> Result<Vec<ConfigTarget>> {
        self.config
            .iter()
            .map(|entry| {
                Ok(ConfigTarget {
                    language: entry.language,
                    config: entry.build(root)?,
                })
            })
            .collect()
    }
}

impl ConfigEntry {
    /// Replay this entry against a fresh [`ConfigBuilder`] and build it.
    pub fn build(&self, root: &Path) -> Result<Config> {
        let mut builder = ConfigBuilder::new(self.name.clone());
        if let Some(package) = &self.package {
            builder.package(package);
        }
        if let Some(object) = &self.object {
            builder.object_name(object);
        }
        if let Some(destination) = &self.destination {
            builder.destination(root.join(destination));
        }
        builder.properties(|scope| declare(scope, &self.properties))?;

        let config = builder.build()?;
        tracing::debug!(
            config = config.name(),
            language = %self.language,
            "lowered config"
        );
        Ok(config)
    }
}

/// Declare a table of manifest properties in `scope`, in document order.
fn declare<'a>(
    scope: &mut Properties,
    properties: impl IntoIterator<Item = (&'a String, &'a toml::Value)>,
) -> konfig_core::Result<()> {
    for (name, value) in properties {
        match value {
            toml::Value::String(s) => scope.string(name, s.as_str())?,
            toml::Value::Boolean(b) => scope.bool(name, *b)?,
            toml::Value::Integer(i) => match i32::try_from(*i) {
                Ok(int) => scope.int(name, int)?,
                Err(_) => scope.long(name, *i)?,
            },
            toml::Value::Float(f) => scope.double(name, *f)?,
            toml::Value::Table(table) => match table.get("type") {
                Some(toml::Value::String(ty)) => {
                    let tag = TypeTag::parse(ty);
                    let value = table
                        .get("value")
                        .map(|value| tagged_value(value, &tag))
                        .transpose()?;
                    scope.tagged(name, &tag, value)?
                }
                _ => scope.object(name, |child| declare(child, table))?,
            },
            other => return Err(konfig_core::Error::unsupported_type(other.type_str())),
        };
    }
    Ok(())
}

/// Convert a TOML value to a property value, coercing numbers to the tagged kind.
///
/// Values that cannot be coerced keep their natural kind so the mismatch is reported
/// against the tag.
fn tagged_value(value: &toml::Value, tag: &TypeTag) -> konfig_core::Result<Value> {
    let kind = match tag.value_type() {
        Some(ValueType::Number(kind)) => Some(kind),
        _ => None,
    };
    let value = match value {
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Boolean(b) => Value::Boolean(*b),
        toml::Value::Integer(i) => match kind {
            Some(kind) => Value::Long(*i).coerce_integer(kind),
            None => Value::Long(*i),
        },
        toml::Value::Float(f) => match kind {
            Some(NumberKind::Float) => Value::Float(*f as f32),
            _ => Value::Double(*f),
        },
        other => return Err(konfig_core::Error::unsupported_type(other.type_str())),
    };
    Ok(value)
}
