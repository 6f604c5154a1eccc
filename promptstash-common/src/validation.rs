//! Validation issue data
//!
//! Schema validation returns all problems at once as a list of issues so a
//! caller can display every violation together; nothing is thrown.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single schema violation found during manifest validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// The manifest field the issue concerns
    pub field: String,
    /// Human-readable description of the violation
    pub message: String,
}

impl ValidationIssue {
    /// Create a new validation issue
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
