//! Rust source file holding one config.

use std::path::{Path, PathBuf};

use konfig_codegen::CodeBuilder;
use konfig_core::{FileRules, GeneratedFile};

use super::GENERATED_HEADER;
use crate::ast::Module;

/// The `<object>.rs` file for a config.
///
/// The top-level module is the file itself, so its items are rendered without a
/// surrounding `pub mod` block.
pub struct ConfigRs {
    package: String,
    object_name: String,
    module: Module,
}

impl ConfigRs {
    pub fn new(package: impl Into<String>, object_name: impl Into<String>, module: Module) -> Self {
        Self {
            package: package.into(),
            object_name: object_name.into(),
            module,
        }
    }
}

impl GeneratedFile for ConfigRs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.rs", self.module.name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        let qualified = if self.package.is_empty() {
            self.object_name.clone()
        } else {
            format!("{}.{}", self.package, self.object_name)
        };

        let mut builder = CodeBuilder::rust();
        builder.push_line(&format!("//! Constants of `{}`.", qualified));
        if !self.module.items().is_empty() {
            builder.push_blank();
        }
        for fragment in self.module.body_fragments() {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Const;

    #[test]
    fn test_path_uses_module_name() {
        let file = ConfigRs::new("com.example", "AppConfig", Module::new("app_config"));
        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out/app_config.rs")
        );
    }

    #[test]
    fn test_render_with_header() {
        let module = Module::new("app_config").constant(Const::new("A", "i32", "1"));
        let file = ConfigRs::new("com.example", "AppConfig", module);

        assert_eq!(
            file.content(),
            "// Generated by konfig. Do not edit.\n\n//! Constants of `com.example.AppConfig`.\n\npub const A: i32 = 1;\n"
        );
    }

    #[test]
    fn test_render_empty_without_package() {
        let file = ConfigRs::new("", "AppConfig", Module::new("app_config"));
        assert_eq!(file.render(), "//! Constants of `AppConfig`.\n");
    }
}
