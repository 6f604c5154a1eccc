//! # Promptstash
//!
//! Engine for a personal collection of reusable text templates
//! ("prompts"), organized into a folder hierarchy and tagged with
//! cross-cutting labels ("variants").
//!
//! This facade crate composes the domain crates and adds the collection
//! store (the seam the storage collaborator loads records into) plus
//! descendant-aware prompt filtering:
//!
//! - **Hierarchy**: cycle-safe folder tree with derived views and a cached
//!   snapshot (`promptstash-hierarchy`)
//! - **Manifests**: PFM documents with typed variables and placeholder
//!   rendering (`promptstash-manifest`)
//! - **Collection**: [`Stash`] owns the flat record lists and keeps the
//!   tree cache coherent across folder mutations
//! - **Filtering**: [`PromptFilter`] answers "this folder and everything
//!   under it", variant any-match, and title search
//!
//! ## Basic Usage
//!
//! ```rust
//! use promptstash::{Folder, Manifest, Prompt, PromptFilter, Stash};
//! use serde_json::json;
//!
//! # fn example() -> promptstash::Result<()> {
//! // Load a session's records wholesale
//! let mut stash = Stash::new();
//! stash.replace_all(
//!     vec![
//!         Folder::new("art", "Art"),
//!         Folder::new("portraits", "Portraits").with_parent("art"),
//!     ],
//!     vec![Prompt::new("p-1", "Oil portrait").in_folder("portraits")],
//!     vec![],
//! );
//!
//! // "Art and everything under it"
//! let found = stash.filtered_prompts(&PromptFilter::by_folder("art"));
//! assert_eq!(found.len(), 1);
//!
//! // Load and render a template manifest
//! let manifest = Manifest::parse(&json!({
//!     "manifest_version": "1.0",
//!     "type": "image_prompt",
//!     "name": "Retrato",
//!     "language": "es",
//!     "template": "Un retrato de {{sujeto}}, HD: {{hd}}",
//!     "variables": {
//!         "sujeto": { "label": "Sujeto", "type": "string", "default": "un zorro" },
//!         "hd": { "label": "Alta definición", "type": "boolean", "default": true }
//!     }
//! }))?;
//! let rendered = manifest.render(&manifest.initial_values());
//! assert_eq!(rendered, "Un retrato de un zorro, HD: sí");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod filter;
mod stash;

pub use filter::PromptFilter;
pub use stash::Stash;

// Re-export the domain crates' public surface
pub use promptstash_common::{
    variant_color, Folder, FolderId, Prompt, PromptId, Result, StashError, ValidationIssue,
    Variant, VariantId,
};
pub use promptstash_hierarchy::{
    build_tree, descendant_ids, FolderHierarchy, FolderTreeNode, SelectOption,
};
pub use promptstash_manifest::{
    coerce_bool, placeholder_keys, validate, Manifest, ManifestKind, VarKind, VariableSpec,
    VariableValues, BOOLEAN_FALSE, BOOLEAN_TRUE, MANIFEST_KINDS, MANIFEST_VERSION,
};
