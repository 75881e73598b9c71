//! Rust AST builders for config modules.

mod consts;
mod module;

pub use consts::Const;
pub use module::{Item, Module};
