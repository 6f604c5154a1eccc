//! Prompt records
//!
//! Prompts are consumed read-only by the core: the hierarchy engine filters
//! them by folder descendants and the variant labels classify them. The
//! authored template body is opaque here; only the manifest engine
//! interprets template text.

use crate::ids::{FolderId, PromptId, VariantId};
use serde::{Deserialize, Serialize};

/// A reusable text template in the collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: PromptId,
    pub title: String,
    /// Containing folder; `None` places the prompt at the collection root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<FolderId>,
    /// Cross-cutting variant labels attached to this prompt
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<VariantId>,
    /// Authored template text, not interpreted by the collection layer
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
}

impl Prompt {
    /// Create a prompt at the collection root
    pub fn new(id: impl Into<PromptId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            folder_id: None,
            variants: Vec::new(),
            body: String::new(),
        }
    }

    /// Place the prompt in a folder
    pub fn in_folder(mut self, folder_id: impl Into<FolderId>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    /// Attach variant labels
    pub fn with_variants(mut self, variants: Vec<VariantId>) -> Self {
        self.variants = variants;
        self
    }

    /// Set the authored template body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Whether this prompt carries the given variant label
    pub fn has_variant(&self, id: VariantId) -> bool {
        self.variants.contains(&id)
    }
}
