use clap::Args;
use eyre::Result;
use konfig_core::Property;

use super::{ManifestArgs, qualified_name};
use crate::reports::{CheckReport, ConfigSummary, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,
}

impl CheckCommand {
    /// Parse, lower and build every config without writing anything.
    pub fn run(&self) -> Result<()> {
        let targets = self.manifest.targets(None)?;

        let configs = targets
            .iter()
            .map(|target| {
                let (literals, objects) = count(target.config.properties());
                ConfigSummary {
                    name: target.config.name().to_string(),
                    language: target.language.to_string(),
                    object: qualified_name(&target.config),
                    destination: target.config.destination().to_path_buf(),
                    literals,
                    objects,
                }
            })
            .collect();

        CheckReport {
            config_path: self.manifest.config.clone(),
            configs,
        }
        .render(&mut TerminalOutput);
        Ok(())
    }
}

/// Count literal and object properties across all nesting levels.
fn count(properties: &[Property]) -> (usize, usize) {
    properties
        .iter()
        .fold((0, 0), |(literals, objects), property| match property {
            Property::Literal(_) => (literals + 1, objects),
            Property::Object(object) => {
                let (nested_literals, nested_objects) = count(object.children());
                (literals + nested_literals, objects + 1 + nested_objects)
            }
        })
}

#[cfg(test)]
mod tests {
    use konfig_core::Properties;

    use super::*;

    #[test]
    fn test_count_nested() {
        let properties = Properties::collect(|scope| {
            scope.string("a", "x")?.object("server", |server| {
                server.int("port", 80)?.object("tls", |tls| {
                    tls.bool("enabled", true)?;
                    Ok(())
                })?;
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();

        assert_eq!(count(&properties), (3, 2));
    }
}
