//! Kotlin source file holding one config object.

use std::path::{Path, PathBuf};

use konfig_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;
use crate::ast::Object;

/// The `<package>/<Object>.kt` file for a config.
pub struct ConfigKt {
    package: String,
    file_stem: String,
    object: Object,
}

impl ConfigKt {
    pub fn new(package: impl Into<String>, file_stem: impl Into<String>, object: Object) -> Self {
        Self {
            package: package.into(),
            file_stem: file_stem.into(),
            object,
        }
    }
}

impl GeneratedFile for ConfigKt {
    fn path(&self, base: &Path) -> PathBuf {
        let dir = self
            .package
            .split('.')
            .filter(|segment| !segment.is_empty())
            .fold(base.to_path_buf(), |dir, segment| dir.join(segment));
        dir.join(format!("{}.kt", self.file_stem))
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        let object = self.object.build();
        if self.package.is_empty() {
            object
        } else {
            format!("package {}\n\n{}", self.package, object)
        }
    }
}
