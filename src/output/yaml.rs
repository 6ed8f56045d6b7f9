//! YAML export for directory trees

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::tree::DirTree;

/// Serializes the tree as block-style YAML.
///
/// Every directory becomes a mapping keyed by the names of its
/// subdirectories; empty directories appear as explicit `{}` mappings
/// rather than nulls, so the output parses back into the same tree.
pub fn to_yaml(tree: &DirTree) -> Result<String, Error> {
    serde_yaml::to_string(tree).map_err(|source| Error::Serialize { source })
}

/// Serializes the tree and writes it to `path`, replacing any existing file.
pub fn export_yaml(tree: &DirTree, path: &Path) -> Result<(), Error> {
    let yaml = to_yaml(tree)?;
    fs::write(path, yaml).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
