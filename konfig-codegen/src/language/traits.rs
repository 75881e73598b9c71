//! The emitter interface shared by every target language.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use konfig_core::GeneratedFile;

/// Emits one config as source files of a single target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "kotlin", "rust")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "kt", "rs")
    fn file_extension(&self) -> &'static str;

    /// Render every file in memory.
    ///
    /// Paths are relative to the output directory and files are returned in the order
    /// they would be written.
    fn preview(&self) -> Vec<PreviewFile>;

    /// Write every file below `output_dir`.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Paths touched by [`LanguageCodegen::generate`].
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub written: Vec<PathBuf>,
}

/// An in-memory rendering of one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative to the output directory, `/`-separated.
    pub path: String,
    /// Header included.
    pub content: String,
}

/// Write generated files below `output_dir`, collecting what happened to each.
pub fn write_files(files: &[&dyn GeneratedFile], output_dir: &Path) -> Result<GenerateResult> {
    let mut result = GenerateResult::default();

    for file in files {
        let path = file
            .write(output_dir)
            .wrap_err_with(|| format!("failed to write {}", file.path(output_dir).display()))?;
        result.written.push(path);
    }

    tracing::debug!(
        written = result.written.len(),
        output = %output_dir.display(),
        "generation finished"
    );
    Ok(result)
}

/// Preview a generated file with its path relative to the output directory.
pub fn preview_file(file: &dyn GeneratedFile) -> PreviewFile {
    PreviewFile {
        path: file.path(Path::new("")).to_string_lossy().replace('\\', "/"),
        content: file.content(),
    }
}
