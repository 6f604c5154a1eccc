//! # Promptstash Manifest
//!
//! Parsing, validation, and rendering of PFM template manifests: the
//! self-describing JSON documents that declare typed variables and a
//! `{{key}}` placeholder template.
//!
//! ## Lifecycle
//!
//! A manifest document has two states: unloaded (raw JSON) and loaded
//! ([`Manifest`]). [`Manifest::parse`] runs [`validate`] and only
//! constructs a `Manifest` when the issue list is empty, so rendering an
//! unvalidated document is unrepresentable. Re-parsing replaces the
//! manifest wholesale.
//!
//! ## Rendering
//!
//! [`Manifest::render`] substitutes user-supplied values into the template
//! string. Booleans render as the localized tokens `"sí"` / `"no"`; all
//! other types substitute their raw string form. Unresolved placeholders
//! are left untouched: validation never cross-checks template
//! placeholders against declared variables in either direction.

#![warn(missing_docs)]

mod render;
mod schema;
mod validation;

pub use render::{coerce_bool, placeholder_keys, BOOLEAN_FALSE, BOOLEAN_TRUE};
pub use schema::{Manifest, ManifestKind, VarKind, VariableSpec};
pub use validation::{validate, MANIFEST_KINDS, MANIFEST_VERSION};

/// The mutable current-values side-table handed to [`Manifest::render`],
/// keyed by variable key. Insertion order follows the editing surface.
pub type VariableValues = indexmap::IndexMap<String, serde_json::Value>;
