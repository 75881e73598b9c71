//! Rust module builder.

use konfig_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::Const;

/// An item inside a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Const(Const),
    Module(Module),
}

/// Builder for `pub mod` blocks.
///
/// Nested modules are separated from neighbouring items by a blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    name: String,
    items: Vec<Item>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn constant(mut self, constant: Const) -> Self {
        self.items.push(Item::Const(constant));
        self
    }

    pub fn module(mut self, module: Module) -> Self {
        self.items.push(Item::Module(module));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Fragments for the module body, without the surrounding `pub mod` block.
    pub fn body_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            let is_module = matches!(item, Item::Module(_));
            let follows_module = i > 0 && matches!(self.items[i - 1], Item::Module(_));
            if i > 0 && (is_module || follows_module) {
                body.push(CodeFragment::Blank);
            }
            match item {
                Item::Const(constant) => body.extend(constant.to_fragments()),
                Item::Module(module) => body.extend(module.to_fragments()),
            }
        }
        body
    }

    /// Build the module block as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Module {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.items.is_empty() {
            return vec![CodeFragment::line(format!("pub mod {} {{}}", self.name))];
        }
        vec![CodeFragment::block(format!("pub mod {} {{", self.name), self.body_fragments())]
    }
}
