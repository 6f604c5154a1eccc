//! Error types for promptstash operations

use crate::validation::ValidationIssue;
use thiserror::Error;

/// Result type for promptstash operations
pub type Result<T> = std::result::Result<T, StashError>;

/// Errors that can occur across the promptstash workspace
#[derive(Debug, Error)]
pub enum StashError {
    /// Folder not found
    #[error("folder not found: {id}")]
    FolderNotFound { id: String },

    /// Prompt not found
    #[error("prompt not found: {id}")]
    PromptNotFound { id: String },

    /// Variant not found
    #[error("variant not found: {id}")]
    VariantNotFound { id: u8 },

    /// Duplicate record ID
    #[error("duplicate {kind} ID: {id}")]
    DuplicateId { kind: String, id: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// A manifest document failed schema validation
    #[error("manifest validation failed with {} issue(s)", issues.len())]
    InvalidManifest { issues: Vec<ValidationIssue> },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StashError {
    /// Create a folder-not-found error
    pub fn folder_not_found(id: impl Into<String>) -> Self {
        Self::FolderNotFound { id: id.into() }
    }

    /// Create a prompt-not-found error
    pub fn prompt_not_found(id: impl Into<String>) -> Self {
        Self::PromptNotFound { id: id.into() }
    }

    /// Create a duplicate-ID error
    pub fn duplicate_id(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}
