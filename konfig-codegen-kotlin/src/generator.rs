use std::path::Path;

use eyre::Result;
use konfig_codegen::{
    GenerateResult, LanguageCodegen, LiteralSyntax, PreviewFile, preview_file, write_files,
};
use konfig_core::{Config, Property};

use crate::{
    KOTLIN_NAMING, KotlinSyntax,
    ast::{Constant, Object},
    files::ConfigKt,
};

/// Kotlin emitter producing one `object` per config.
pub struct Generator<'a> {
    config: &'a Config,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn file_extension(&self) -> &'static str {
        "kt"
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

    fn config_file(&self) -> ConfigKt {
        let object = build_object(
            &KOTLIN_NAMING.type_name(self.config.object_name()),
            self.config.properties(),
        );
        ConfigKt::new(
            self.config.package(),
            KOTLIN_NAMING.file_name(self.config.object_name()),
            object,
        )
    }
}

/// Build an object declaration from a property sequence, recursing into nested objects.
fn build_object(name: &str, properties: &[Property]) -> Object {
    let syntax = KotlinSyntax;
    properties
        .iter()
        .fold(Object::new(name), |object, property| match property {
            Property::Literal(literal) => {
                let constant = Constant::new(
                    KOTLIN_NAMING.const_name(literal.name()),
                    syntax.property_type(literal),
                    syntax.literal(literal),
                );
                // `const val` only accepts non-null primitives and strings
                if literal.is_nullable() {
                    object.constant(constant.non_const())
                } else {
                    object.constant(constant)
                }
            }
            Property::Object(nested) => object.object(build_object(
                &KOTLIN_NAMING.type_name(nested.name()),
                nested.children(),
            )),
        })
}
