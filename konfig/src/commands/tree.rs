use clap::Args;
use eyre::Result;
use konfig_codegen::LiteralSyntax;
use konfig_core::Property;

use super::{ManifestArgs, qualified_name};
use crate::{
    language,
    reports::{ConfigTree, Report, TerminalOutput, TreeNode, TreeReport},
};

#[derive(Args)]
pub struct TreeCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Only show the config with this name
    #[arg(long)]
    pub config_name: Option<String>,
}

impl TreeCommand {
    pub fn run(&self) -> Result<()> {
        let targets = self.manifest.targets(self.config_name.as_deref())?;

        let configs = targets
            .iter()
            .map(|target| {
                let mut nodes = Vec::new();
                collect_nodes(
                    target.config.properties(),
                    language::syntax(target.language),
                    0,
                    &mut nodes,
                );
                ConfigTree {
                    name: target.config.name().to_string(),
                    language: target.language.to_string(),
                    object: qualified_name(&target.config),
                    nodes,
                }
            })
            .collect();

        TreeReport { configs }.render(&mut TerminalOutput);
        Ok(())
    }
}

/// Flatten a property tree into labelled lines, depth first.
fn collect_nodes(
    properties: &[Property],
    syntax: &dyn LiteralSyntax,
    depth: usize,
    nodes: &mut Vec<TreeNode>,
) {
    for property in properties {
        match property {
            Property::Literal(literal) => nodes.push(TreeNode {
                depth,
                label: format!(
                    "{}: {} = {}",
                    literal.name(),
                    syntax.property_type(literal),
                    syntax.literal(literal)
                ),
            }),
            Property::Object(object) => {
                nodes.push(TreeNode {
                    depth,
                    label: object.name().to_string(),
                });
                collect_nodes(object.children(), syntax, depth + 1, nodes);
            }
        }
    }
}
