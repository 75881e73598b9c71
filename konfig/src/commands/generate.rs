use clap::Args;
use eyre::{Context, Result};
use konfig_codegen::PreviewFile;

use super::ManifestArgs;
use crate::{
    language,
    reports::{GenerateReport, PreviewReport, Report, TerminalOutput, WrittenConfig},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Only generate the config with this name
    #[arg(long)]
    pub config_name: Option<String>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let targets = self.manifest.targets(self.config_name.as_deref())?;

        if self.dry_run {
            let mut report = PreviewReport::default();
            for target in &targets {
                let destination = target.config.destination();
                let generator = language::generator(target.language, &target.config);
                report
                    .files
                    .extend(generator.preview().into_iter().map(|file| PreviewFile {
                        path: destination.join(&file.path).display().to_string(),
                        content: file.content,
                    }));
            }
            report.render(&mut TerminalOutput);
            return Ok(());
        }

        let mut report = GenerateReport::default();
        for target in &targets {
            let config = &target.config;
            let result = language::generator(target.language, config)
                .generate(config.destination())
                .wrap_err_with(|| format!("Failed to generate config '{}'", config.name()))?;
            report.configs.push(WrittenConfig {
                name: config.name().to_string(),
                language: target.language.to_string(),
                written: result.written,
            });
        }
        report.render(&mut TerminalOutput);
        Ok(())
    }
}
