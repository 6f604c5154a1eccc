//! # Promptstash Common
//!
//! Foundational types shared across the promptstash workspace: identifier
//! newtypes for domain safety, the flat record types the engines consume
//! (Folder, Prompt, Variant), validation issue data, and the common error
//! enum.
//!
//! ## Design Principles
//!
//! - Newtypes prevent mixing different kinds of identifiers
//! - All public types implement `serde::Serialize` and `serde::Deserialize`
//! - Structural validation problems are returned as data, not thrown

mod error;
mod ids;
mod palette;
pub mod types;
mod validation;

pub use error::{Result, StashError};
pub use ids::{FolderId, PromptId, VariantId};
pub use palette::variant_color;
pub use types::{Folder, Prompt, Variant};
pub use validation::ValidationIssue;
