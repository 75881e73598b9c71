use std::path::Path;

use eyre::Result;
use konfig_codegen::{
    GenerateResult, LanguageCodegen, LiteralSyntax, PreviewFile, preview_file, write_files,
};
use konfig_core::{Config, Property};

use crate::{
    RUST_NAMING, RustSyntax,
    ast::{Const, Module},
    files::ConfigRs,
};

/// Rust emitter producing one source file of constants per config.
pub struct Generator<'a> {
    config: &'a Config,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        vec![preview_file(&self.config_file())]
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        write_files(&[&self.config_file()], output_dir)
    }
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    fn config_file(&self) -> ConfigRs {
        let module = build_module(
            &RUST_NAMING.file_name(self.config.object_name()),
            self.config.properties(),
        );
        ConfigRs::new(self.config.package(), self.config.object_name(), module)
    }
}

fn build_module(name: &str, properties: &[Property]) -> Module {
    let syntax = RustSyntax;
    properties
        .iter()
        .fold(Module::new(name), |module, property| match property {
            Property::Literal(literal) => module.constant(Const::new(
                RUST_NAMING.const_name(literal.name()),
                syntax.property_type(literal),
                syntax.literal(literal),
            )),
            Property::Object(nested) => module.module(build_module(
                &RUST_NAMING.type_name(nested.name()),
                nested.children(),
            )),
        })
}
