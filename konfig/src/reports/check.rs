//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Summary of one built config.
#[derive(Debug)]
pub struct ConfigSummary {
    pub name: String,
    pub language: String,
    /// Fully qualified object name, e.g. `com.example.AppConfig`
    pub object: String,
    pub destination: PathBuf,
    pub literals: usize,
    pub objects: usize,
}

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the manifest.
    pub config_path: PathBuf,
    pub configs: Vec<ConfigSummary>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));

        for config in &self.configs {
            out.newline();
            out.section(&format!("{} ({})", config.name, config.language));
            out.key_value_indented("object", &config.object);
            out.key_value_indented("destination", &config.destination.display().to_string());
            out.key_value_indented(
                "properties",
                &format!(
                    "{} literal{}, {} object{}",
                    config.literals,
                    plural(config.literals),
                    config.objects,
                    plural(config.objects)
                ),
            );
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
