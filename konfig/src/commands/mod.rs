mod check;
mod completions;
mod generate;
mod tree;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Result, bail};
use generate::GenerateCommand;
use konfig_core::Config;
use konfig_manifest::{ConfigTarget, Manifest};
use tree::TreeCommand;

/// Print manifest errors as miette reports and exit with status 1.
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for konfig_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "konfig")]
#[command(version)]
#[command(about = "Generate typed configuration constants from konfig.toml")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Tree(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate source files for every config in konfig.toml
    Generate(GenerateCommand),

    /// Validate konfig.toml and build its configs without writing files
    Check(CheckCommand),

    /// Print the property tree of each config
    Tree(TreeCommand),

    /// Print a shell completion script
    Completions(CompletionsCommand),
}

/// Manifest location shared by commands that read konfig.toml.
#[derive(Args)]
pub struct ManifestArgs {
    /// Path to konfig.toml (defaults to ./konfig.toml)
    #[arg(short, long, default_value = "konfig.toml")]
    pub config: PathBuf,
}

impl ManifestArgs {
    /// Parse the manifest, exiting with a diagnostic on failure.
    pub fn manifest(&self) -> Manifest {
        Manifest::from_file(&self.config).unwrap_or_exit()
    }

    /// Directory that destinations are resolved against.
    pub fn root(&self) -> &Path {
        match self.config.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Parse the manifest and build its configs, optionally only the one named `only`.
    pub fn targets(&self, only: Option<&str>) -> Result<Vec<ConfigTarget>> {
        let mut manifest = self.manifest();

        if let Some(name) = only {
            if manifest.get(name).is_none() {
                let available: Vec<&str> = manifest.names().collect();
                bail!(
                    "no config named '{}' in {} (available: {})",
                    name,
                    self.config.display(),
                    available.join(", ")
                );
            }
            manifest.config.retain(|entry| entry.effective_name() == name);
        }

        Ok(manifest.configs(self.root()).unwrap_or_exit())
    }
}

/// Fully qualified object name, e.g. `com.example.AppConfig`.
pub(crate) fn qualified_name(config: &Config) -> String {
    if config.package().is_empty() {
        config.object_name().to_string()
    } else {
        format!("{}.{}", config.package(), config.object_name())
    }
}
