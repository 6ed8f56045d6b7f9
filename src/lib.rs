//! Canopy - print a directory tree's structure and export it as YAML

pub mod error;
pub mod output;
pub mod tree;
pub mod walker;

pub use error::Error;
pub use output::{TreeFormatter, export_yaml, to_yaml};
pub use tree::DirTree;
pub use walker::walk;
