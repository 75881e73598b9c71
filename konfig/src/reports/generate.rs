//! Generate command report data structures.

use std::path::PathBuf;

use konfig_codegen::PreviewFile;

use super::output::{Output, Report};

/// Files written for one config.
#[derive(Debug)]
pub struct WrittenConfig {
    pub name: String,
    pub language: String,
    pub written: Vec<PathBuf>,
}

/// Report for a generation run that wrote files.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub configs: Vec<WrittenConfig>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, config) in self.configs.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!("{} ({})", config.name, config.language));
            for path in &config.written {
                out.added_item(&path.display().to_string());
            }
        }
    }
}

/// Report for a dry run.
#[derive(Debug, Default)]
pub struct PreviewReport {
    /// Previewed files, with paths already resolved against each config's destination
    pub files: Vec<PreviewFile>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        let count = self.files.len();
        out.preformatted(&format!(
            "{} file{} would be generated",
            count,
            if count == 1 { "" } else { "s" }
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_generate_report() {
        let report = GenerateReport {
            configs: vec![WrittenConfig {
                name: "main".to_string(),
                language: "kotlin".to_string(),
                written: vec![PathBuf::from("out/main/AppConfig.kt")],
            }],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines, ["main (kotlin):", "  + out/main/AppConfig.kt"]);
    }

    #[test]
    fn test_preview_report_summary() {
        let report = PreviewReport {
            files: vec![PreviewFile {
                path: "out/app_config.rs".to_string(),
                content: "pub const A: i32 = 1;\n".to_string(),
            }],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "── out/app_config.rs ──");
        assert_eq!(out.lines.last().unwrap(), "1 file would be generated");
    }
}
