//! Kotlin AST builders for config objects.
//!
//! These provide a small API for constructing Kotlin declarations,
//! which can then be rendered via CodeBuilder.

mod constant;
mod object;

pub use constant::Constant;
pub use object::{Member, Object};
