//! Output formats for directory trees
//!
//! Two renderings of the same `DirTree`:
//! - `tree` - indented text for the console
//! - `yaml` - block-style YAML for the export file

mod tree;
mod yaml;

pub use tree::TreeFormatter;
pub use yaml::{export_yaml, to_yaml};
