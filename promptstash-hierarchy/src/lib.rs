//! # Promptstash Hierarchy
//!
//! The folder hierarchy engine: builds the derived tree view from a flat
//! folder list, answers descendant queries, and owns the tree cache.
//!
//! The engine depends on nothing but the flat folder list it is handed. It
//! never mutates folders and no operation here returns an error: malformed
//! input (dangling parents, parent cycles from imported data) is absorbed.
//! Dangling parents promote to roots and cyclic branches are truncated by a
//! visited-set guard. Best-effort rendering is the contract of this layer;
//! callers that need to detect corruption must check independently.
//!
//! Reads vastly outnumber writes in the consuming UI, so the tree is cached
//! and the caller is responsible for calling [`FolderHierarchy::invalidate`]
//! after every folder mutation. The cache hands out immutable [`Arc`]
//! snapshots, swapped wholesale on rebuild, so a snapshot held by a caller
//! stays valid across invalidation.
//!
//! [`Arc`]: std::sync::Arc

mod hierarchy;
mod tree;

pub use hierarchy::{descendant_ids, FolderHierarchy, SelectOption};
pub use tree::{build_tree, FolderTreeNode};
