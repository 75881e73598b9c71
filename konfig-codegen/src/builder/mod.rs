//! Building blocks for indented, brace-delimited source text.
//!
//! Emitter AST nodes implement [`Renderable`] and describe themselves as
//! [`CodeFragment`]s; [`CodeBuilder`] lays the fragments out with an [`Indent`].

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
