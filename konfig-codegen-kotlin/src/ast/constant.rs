//! Kotlin property declaration builder.

use konfig_codegen::{CodeFragment, Renderable};

/// A `val` declaration inside an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    name: String,
    ty: String,
    value: String,
    is_const: bool,
}

impl Constant {
    /// Create a compile-time constant (`const val`).
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
            is_const: true,
        }
    }

    /// Declare as a plain `val` (required for nullable types).
    pub fn non_const(mut self) -> Self {
        self.is_const = false;
        self
    }

    /// Format the declaration as a single line.
    pub fn format(&self) -> String {
        let modifier = if self.is_const { "const val" } else { "val" };
        format!("{} {}: {} = {}", modifier, self.name, self.ty, self.value)
    }
}

impl Renderable for Constant {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.format())]
    }
}
