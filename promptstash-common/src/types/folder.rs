//! Folder records
//!
//! Folders form a forest related by `parent_id`; `None` marks a root. The
//! parent-pointer graph must be treated as possibly cyclic by any consumer
//! (imported data can be malformed), so traversals carry a visited-set guard.

use crate::ids::FolderId;
use serde::{Deserialize, Serialize};

/// A folder in the prompt collection hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<FolderId>,
}

impl Folder {
    /// Create a root folder
    pub fn new(id: impl Into<FolderId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
        }
    }

    /// Place the folder under a parent
    pub fn with_parent(mut self, parent_id: impl Into<FolderId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Whether this folder is a root (no parent reference)
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
