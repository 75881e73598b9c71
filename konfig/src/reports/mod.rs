//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;
mod tree;

pub use check::{CheckReport, ConfigSummary};
pub use generate::{GenerateReport, PreviewReport, WrittenConfig};
pub use output::{Report, TerminalOutput};
pub use tree::{ConfigTree, TreeNode, TreeReport};
