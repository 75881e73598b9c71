//! Tree command report data structures.

use super::output::{Output, Report};

/// One line of a property tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub depth: usize,
    pub label: String,
}

/// Property tree of one config.
#[derive(Debug)]
pub struct ConfigTree {
    pub name: String,
    pub language: String,
    pub object: String,
    pub nodes: Vec<TreeNode>,
}

/// Report listing the property tree of each config.
#[derive(Debug, Default)]
pub struct TreeReport {
    pub configs: Vec<ConfigTree>,
}

impl Report for TreeReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, config) in self.configs.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!(
                "{} ({}) {}",
                config.name, config.language, config.object
            ));
            for node in &config.nodes {
                out.preformatted(&format!("{}{}", "  ".repeat(node.depth + 1), node.label));
            }
        }
    }
}
