//! Derived tree view of the folder collection
//!
//! [`build_tree`] turns the flat folder list into an owned forest of
//! [`FolderTreeNode`]s. The view is ephemeral: it is rebuilt from scratch
//! whenever the cache is invalidated and never patched in place.

use promptstash_common::{Folder, FolderId};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One node of the derived folder tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderTreeNode {
    pub id: FolderId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<FolderId>,
    /// Child folders in input insertion order
    pub children: Vec<FolderTreeNode>,
}

impl FolderTreeNode {
    fn from_folder(folder: &Folder) -> Self {
        Self {
            id: folder.id.clone(),
            name: folder.name.clone(),
            parent_id: folder.parent_id.clone(),
            children: Vec::new(),
        }
    }

    /// Count this node plus all descendants
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(FolderTreeNode::node_count)
            .sum::<usize>()
    }

    /// Whether this node has children
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Build the folder forest from a flat folder list.
///
/// Every folder is attached under its `parent_id` when that parent exists in
/// the input set; a dangling parent reference promotes the folder to a root
/// rather than raising an error. Sibling order is the insertion order of the
/// input list: stable, no sorting.
///
/// Folders caught in a parent cycle are reachable from no root; they are
/// omitted from the returned forest. The assembly itself is guarded by a
/// visited set, so it terminates over arbitrary corrupt input.
pub fn build_tree(folders: &[Folder]) -> Vec<FolderTreeNode> {
    let index: HashMap<&FolderId, usize> = folders
        .iter()
        .enumerate()
        .map(|(i, folder)| (&folder.id, i))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); folders.len()];
    let mut roots: Vec<usize> = Vec::new();
    for (i, folder) in folders.iter().enumerate() {
        match folder.parent_id.as_ref().and_then(|p| index.get(p).copied()) {
            // self-reference is a one-folder cycle, not a parent link
            Some(parent) if parent != i => children[parent].push(i),
            Some(_) => {}
            None => roots.push(i),
        }
    }

    let mut visited: HashSet<usize> = HashSet::with_capacity(folders.len());
    roots
        .into_iter()
        .map(|root| assemble(root, folders, &children, &mut visited))
        .collect()
}

fn assemble(
    at: usize,
    folders: &[Folder],
    children: &[Vec<usize>],
    visited: &mut HashSet<usize>,
) -> FolderTreeNode {
    visited.insert(at);
    let mut node = FolderTreeNode::from_folder(&folders[at]);
    for &child in &children[at] {
        if !visited.contains(&child) {
            node.children.push(assemble(child, folders, children, visited));
        }
    }
    node
}
