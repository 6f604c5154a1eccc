//! Variant records
//!
//! A variant is a user-defined label classifying prompts by target audience
//! or tool. Ids are unique per collection and bounded to 255.

use crate::ids::VariantId;
use crate::palette::variant_color;
use serde::{Deserialize, Serialize};

/// A cross-cutting label for classifying prompts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub name: String,
    /// Optional link to the tool or audience the variant targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Variant {
    /// Create a new variant label
    pub fn new(id: VariantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url: None,
        }
    }

    /// Attach a target URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The variant's display color, derived deterministically from its id
    pub fn color(&self) -> &'static str {
        variant_color(self.id)
    }
}
