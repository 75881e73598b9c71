//! Unified language dispatch.
//!
//! Maps a manifest [`Language`] to its emitter and literal syntax.

use konfig_codegen::{LanguageCodegen, LiteralSyntax};
use konfig_codegen_kotlin::{Generator as KotlinGenerator, KotlinSyntax};
use konfig_codegen_rust::{Generator as RustGenerator, RustSyntax};
use konfig_core::Config;
use konfig_manifest::Language;

/// Create the emitter for a config in the given language.
pub fn generator(language: Language, config: &Config) -> Box<dyn LanguageCodegen + '_> {
    match language {
        Language::Kotlin => Box::new(KotlinGenerator::new(config)),
        Language::Rust => Box::new(RustGenerator::new(config)),
    }
}

/// Literal spelling for the given language.
pub fn syntax(language: Language) -> &'static dyn LiteralSyntax {
    match language {
        Language::Kotlin => &KotlinSyntax,
        Language::Rust => &RustSyntax,
    }
}
