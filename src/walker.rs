//! Filesystem traversal that builds a `DirTree`

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::tree::DirTree;

/// Scans `root` and returns a tree with a single top-level entry named
/// after the resolved root directory.
///
/// Subdirectories are recorded recursively; files are skipped. A symlink
/// that points at a directory appears as an empty leaf but is never
/// entered. Any directory that cannot be listed aborts the whole scan.
pub fn walk(root: &Path) -> Result<DirTree, Error> {
    let canonical = fs::canonicalize(root).map_err(|source| Error::Root {
        path: root.to_path_buf(),
        source,
    })?;
    if !canonical.is_dir() {
        return Err(Error::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut tree = DirTree::new();
    walk_into(&canonical, tree.child_mut(&root_label(&canonical)))?;
    Ok(tree)
}

/// Name for the top-level entry. Canonical paths carry no trailing
/// separator, so `file_name` is only absent for the filesystem root;
/// fall back to the full path in that case.
fn root_label(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

fn walk_into(path: &Path, node: &mut DirTree) -> Result<(), Error> {
    let entries = fs::read_dir(path).map_err(|source| Error::ReadDir {
        path: path.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| Error::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;
        let entry_path = entry.path();
        if !entry_path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let child = node.child_mut(&name);
        // A symlinked directory stays a leaf, so descent cannot loop back
        // through an ancestor.
        if !entry_path.is_symlink() {
            walk_into(&entry_path, child)?;
        }
    }

    Ok(())
}
