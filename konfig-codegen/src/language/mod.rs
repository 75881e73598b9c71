//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for config emitters
//! - [`LiteralSyntax`] - Literal and type spelling per language
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod literal;
mod naming;
mod traits;

pub use literal::{LiteralSyntax, raw_text, with_decimal_point};
pub use naming::NamingConvention;
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, preview_file, write_files};
