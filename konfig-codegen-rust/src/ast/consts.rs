//! Rust const item builder.

use konfig_codegen::{CodeFragment, Renderable};

/// A `pub const` item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Const {
    name: String,
    ty: String,
    value: String,
}

impl Const {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
        }
    }

    /// Format the item as a single line.
    pub fn format(&self) -> String {
        format!("pub const {}: {} = {};", self.name, self.ty, self.value)
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.format())]
    }
}
