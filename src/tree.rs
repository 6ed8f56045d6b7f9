//! In-memory directory tree model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One directory and every subdirectory beneath it, keyed by name.
///
/// Files are never represented; an empty `DirTree` is a directory with no
/// subdirectories. A whole scan result is itself a `DirTree` holding exactly
/// one top-level entry, named after the scan root. Serializing the tree
/// yields nested YAML mappings directly, with `{}` for empty directories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirTree {
    children: BTreeMap<String, DirTree>,
}

impl DirTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child with the given name, creating an empty node if
    /// absent. Only the walker calls this; display and export never mutate.
    pub fn child_mut(&mut self, name: &str) -> &mut DirTree {
        self.children.entry(name.to_string()).or_default()
    }

    pub fn get(&self, name: &str) -> Option<&DirTree> {
        self.children.get(name)
    }

    /// Iterates children in name order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &DirTree)> + '_ {
        self.children.iter().map(|(name, child)| (name.as_str(), child))
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }
}
