//! Manifest schema validation
//!
//! [`validate`] checks the document envelope and returns every violation as
//! data so a caller can display all problems at once. The checks are
//! independent of each other; nothing short-circuits. This is schema
//! validation only: it does not cross-check `{{key}}` placeholders in the
//! template against entries in `variables`, in either direction.

use promptstash_common::ValidationIssue;
use serde_json::Value;

/// The only accepted manifest format version
pub const MANIFEST_VERSION: &str = "1.0";

/// The accepted `type` tags, in wire format
pub const MANIFEST_KINDS: &[&str] = &["image_prompt", "text_prompt", "video_prompt"];

/// Validate a raw manifest document. An empty result means the document is
/// valid and can be loaded with [`crate::Manifest::parse`].
pub fn validate(doc: &Value) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if doc.get("manifest_version").and_then(Value::as_str) != Some(MANIFEST_VERSION) {
        issues.push(ValidationIssue::new(
            "manifest_version",
            format!("'manifest_version' must be \"{MANIFEST_VERSION}\""),
        ));
    }

    let kind = doc.get("type").and_then(Value::as_str);
    if !kind.is_some_and(|k| MANIFEST_KINDS.contains(&k)) {
        issues.push(ValidationIssue::new(
            "type",
            format!("'type' must be one of: {}", MANIFEST_KINDS.join(", ")),
        ));
    }

    for field in ["name", "language"] {
        let present = doc
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty());
        if !present {
            issues.push(ValidationIssue::new(
                field,
                format!("'{field}' must be a non-empty string"),
            ));
        }
    }

    if !doc.get("template").is_some_and(Value::is_string) {
        issues.push(ValidationIssue::new(
            "template",
            "'template' must be a string",
        ));
    }

    if !doc.get("variables").is_some_and(Value::is_object) {
        issues.push(ValidationIssue::new(
            "variables",
            "'variables' must be an object",
        ));
    }

    issues
}
