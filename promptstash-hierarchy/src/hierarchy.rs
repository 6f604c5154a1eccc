//! The folder hierarchy cache and descendant queries
//!
//! [`FolderHierarchy`] is an explicit cache object with a two-phase
//! lifecycle: build-or-return-cached, then invalidate. It is owned by
//! whichever component holds the folder collection and passed around
//! explicitly, never as ambient or static state. The cache is not thread-safe by
//! contract: a single logical actor reads and invalidates it. Snapshots are
//! immutable `Arc`s swapped wholesale on rebuild, so clones handed out
//! earlier stay valid after invalidation.

use crate::tree::{build_tree, FolderTreeNode};
use promptstash_common::{Folder, FolderId};
use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

/// One entry of the indented folder select view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub id: FolderId,
    /// Folder name prefixed with two spaces per depth level
    pub label: String,
}

/// Owns the derived tree view of the folder collection
#[derive(Debug, Default)]
pub struct FolderHierarchy {
    cached: Option<Arc<[FolderTreeNode]>>,
}

impl FolderHierarchy {
    /// Create an empty hierarchy with a cold cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the folder forest, or return the cached snapshot.
    ///
    /// The cache is keyed on nothing but the invalidation state: callers
    /// MUST call [`invalidate`](Self::invalidate) after every folder
    /// mutation (create, rename, reparent, delete, import, cleanup) or the
    /// returned view goes stale. There is no automatic change detection.
    pub fn tree(&mut self, folders: &[Folder]) -> Arc<[FolderTreeNode]> {
        if let Some(tree) = &self.cached {
            return Arc::clone(tree);
        }
        tracing::debug!(folders = folders.len(), "rebuilding folder tree");
        let tree: Arc<[FolderTreeNode]> = build_tree(folders).into();
        self.cached = Some(Arc::clone(&tree));
        tree
    }

    /// Drop the cached tree so the next read rebuilds it
    pub fn invalidate(&mut self) {
        if self.cached.take().is_some() {
            tracing::debug!("folder tree cache invalidated");
        }
    }

    /// Whether a snapshot is currently cached
    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Descendant query over the raw folder records; see [`descendant_ids`]
    pub fn descendant_ids(&self, folders: &[Folder], start: &FolderId) -> Vec<FolderId> {
        descendant_ids(folders, start)
    }

    /// Flatten the (cached) tree into the indented select list view.
    ///
    /// Labels are indented two spaces per depth level, in depth-first
    /// order, for populating folder pickers.
    pub fn indented_options(&mut self, folders: &[Folder]) -> Vec<SelectOption> {
        fn walk(nodes: &[FolderTreeNode], depth: usize, out: &mut Vec<SelectOption>) {
            for node in nodes {
                out.push(SelectOption {
                    id: node.id.clone(),
                    label: format!("{}{}", "  ".repeat(depth), node.name),
                });
                walk(&node.children, depth + 1, out);
            }
        }

        let tree = self.tree(folders);
        let mut options = Vec::new();
        walk(&tree, 0, &mut options);
        options
    }
}

/// Collect a folder id plus every transitive child id.
///
/// Walks the raw parent/child adjacency of the flat records, not the cached
/// tree, with a visited-set guard: an id already seen during this call is
/// not re-expanded, so the walk always terminates, even over corrupt,
/// cyclic input, where the cyclic branch is silently truncated. That
/// truncation is a policy, not a detected error; callers that need to know
/// about corruption must check independently.
///
/// The starting id is always included, whether or not it appears in the
/// folder list.
pub fn descendant_ids(folders: &[Folder], start: &FolderId) -> Vec<FolderId> {
    let mut children: HashMap<&FolderId, Vec<&FolderId>> = HashMap::new();
    for folder in folders {
        if let Some(parent) = &folder.parent_id {
            children.entry(parent).or_default().push(&folder.id);
        }
    }

    let mut out = Vec::new();
    let mut visited: HashSet<&FolderId> = HashSet::new();
    let mut work: VecDeque<&FolderId> = VecDeque::from([start]);
    while let Some(id) = work.pop_front() {
        if !visited.insert(id) {
            continue;
        }
        out.push(id.clone());
        if let Some(kids) = children.get(id) {
            work.extend(kids.iter().copied());
        }
    }
    out
}
