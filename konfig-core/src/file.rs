//! Generated source files and how they land on disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::Result;

/// A source file produced by an emitter.
pub trait GeneratedFile {
    /// Location of the file below `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules;

    /// File body, without the header.
    fn render(&self) -> String;

    /// Header (if any), a blank line, then the body.
    fn content(&self) -> String {
        let body = self.render();
        match self.rules().header {
            Some(header) => format!("{header}\n\n{body}"),
            None => body,
        }
    }

    /// Write the file below `base`, replacing any previous version. Returns the path written.
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        let content = self.content();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &content)?;
        tracing::info!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(path)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Prefixed with `header`.
    pub fn generated(header: &'static str) -> Self {
        Self {
            header: Some(header),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    struct Greeting(FileRules);

    impl GeneratedFile for Greeting {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("nested").join("greeting.txt")
        }

        fn rules(&self) -> FileRules {
            self.0.clone()
        }

        fn render(&self) -> String {
            "hello\n".to_string()
        }
    }

    #[test]
    fn test_write_creates_parents_and_header() {
        let temp = TempDir::new().unwrap();

        let path = Greeting(FileRules::generated("// generated"))
            .write(temp.path())
            .unwrap();

        assert_eq!(path, temp.path().join("nested/greeting.txt"));
        let written = fs::read_to_string(path).unwrap();
        assert_eq!(written, "// generated\n\nhello\n");
    }

    #[test]
    fn test_write_replaces_previous_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/greeting.txt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale").unwrap();

        let written = Greeting(FileRules::default()).write(temp.path()).unwrap();

        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }
}
