//! PFM manifest schema types
//!
//! [`VariableSpec`] is a tagged union with one variant per declared type, so
//! each variant only carries the fields meaningful to it (`options` exists
//! only on `Select`). Deserialization is deliberately lenient: an unknown
//! `type` tag degrades to `string` and a malformed variable entry degrades
//! to an empty string spec, because schema validation ([`crate::validate`])
//! checks the document envelope, not individual variable entries.

use crate::render::coerce_bool;
use crate::validation::validate;
use indexmap::IndexMap;
use promptstash_common::{Result, StashError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// The template domain a manifest targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestKind {
    /// Prompt for an image generation tool
    ImagePrompt,
    /// Prompt for a text generation tool
    TextPrompt,
    /// Prompt for a video generation tool
    VideoPrompt,
}

impl ManifestKind {
    /// The wire-format tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestKind::ImagePrompt => "image_prompt",
            ManifestKind::TextPrompt => "text_prompt",
            ManifestKind::VideoPrompt => "video_prompt",
        }
    }
}

/// Variable types supported by the manifest format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarKind {
    /// Free text input
    #[default]
    String,
    /// Numeric values
    Number,
    /// True/false values
    Boolean,
    /// Selection from declared options
    Select,
}

impl FromStr for VarKind {
    type Err = (); // unknown type tags degrade to String rather than erroring

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let kind = match s.to_lowercase().as_str() {
            "string" => VarKind::String,
            "number" | "numeric" | "int" | "integer" | "float" => VarKind::Number,
            "boolean" | "bool" => VarKind::Boolean,
            "select" | "choice" => VarKind::Select,
            _ => VarKind::String,
        };
        Ok(kind)
    }
}

/// A typed variable declaration inside a manifest
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VariableSpec {
    /// Free text variable
    String {
        /// Label shown by the editing surface
        label: String,
        /// Initial value offered before any user edit
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
    /// Numeric variable
    Number {
        /// Label shown by the editing surface
        label: String,
        /// Initial value offered before any user edit
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<f64>,
    },
    /// True/false variable
    Boolean {
        /// Label shown by the editing surface
        label: String,
        /// Initial value offered before any user edit
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<bool>,
    },
    /// Selection from a declared option list
    Select {
        /// Label shown by the editing surface
        label: String,
        /// Initial selection; must name one of `options` to take effect
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<String>,
        /// The declared options, in declaration order
        options: Vec<String>,
    },
}

impl VariableSpec {
    /// The label shown by the editing surface
    pub fn label(&self) -> &str {
        match self {
            VariableSpec::String { label, .. }
            | VariableSpec::Number { label, .. }
            | VariableSpec::Boolean { label, .. }
            | VariableSpec::Select { label, .. } => label,
        }
    }

    /// The declared type of this variable
    pub fn kind(&self) -> VarKind {
        match self {
            VariableSpec::String { .. } => VarKind::String,
            VariableSpec::Number { .. } => VarKind::Number,
            VariableSpec::Boolean { .. } => VarKind::Boolean,
            VariableSpec::Select { .. } => VarKind::Select,
        }
    }

    /// Lenient conversion from a raw JSON value.
    ///
    /// Non-object entries and unknown type tags degrade to a string spec;
    /// a `select` entry with missing `options` degrades to an empty option
    /// list. Defaults whose JSON type disagrees with the declared type are
    /// coerced where a sensible reading exists and dropped otherwise.
    pub(crate) fn from_value(value: &Value) -> Self {
        let label = value
            .get("label")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<VarKind>().ok())
            .unwrap_or_default();
        let default = value.get("default").filter(|v| !v.is_null());

        match kind {
            VarKind::String => VariableSpec::String {
                label,
                default: default.map(text_default),
            },
            VarKind::Number => VariableSpec::Number {
                label,
                default: default.and_then(number_default),
            },
            VarKind::Boolean => VariableSpec::Boolean {
                label,
                default: default.map(coerce_bool),
            },
            VarKind::Select => VariableSpec::Select {
                label,
                default: default.map(text_default),
                options: value
                    .get("options")
                    .and_then(Value::as_array)
                    .map(|options| {
                        options
                            .iter()
                            .filter_map(|o| o.as_str().map(String::from))
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        }
    }
}

impl<'de> Deserialize<'de> for VariableSpec {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(VariableSpec::from_value(&value))
    }
}

fn text_default(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

fn number_default(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

/// A loaded PFM manifest.
///
/// Instances only exist for documents that passed [`validate`] with zero
/// issues; the manifest itself is held immutably, while the current
/// variable values live in a separate [`crate::VariableValues`] side-table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Format version, always the literal `"1.0"`
    pub manifest_version: String,
    /// The template domain
    #[serde(rename = "type")]
    pub kind: ManifestKind,
    /// Display name of the template
    pub name: String,
    /// Language the template text is written in
    pub language: String,
    /// The template string bearing `{{key}}` placeholders
    pub template: String,
    /// Typed variable declarations, in declaration order
    pub variables: IndexMap<String, VariableSpec>,
    /// Optional negative prompt accompanying the template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
}

impl Manifest {
    /// Load a manifest from a parsed JSON document.
    ///
    /// Runs [`validate`] first; a document with any schema issue is
    /// rejected with [`StashError::InvalidManifest`] carrying the full
    /// issue list, so callers can surface every problem at once.
    pub fn parse(doc: &Value) -> Result<Self> {
        let issues = validate(doc);
        if !issues.is_empty() {
            return Err(StashError::InvalidManifest { issues });
        }
        Ok(serde_json::from_value(doc.clone())?)
    }

    /// Load a manifest from JSON text
    pub fn parse_str(raw: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(raw)?;
        Self::parse(&doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_doc() -> Value {
        json!({
            "manifest_version": "1.0",
            "type": "image_prompt",
            "name": "Sunset",
            "language": "es",
            "template": "A {{subject}} at dusk",
            "variables": {
                "subject": { "label": "Subject", "type": "string", "default": "lighthouse" }
            }
        })
    }

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse(&minimal_doc()).unwrap();
        assert_eq!(manifest.kind, ManifestKind::ImagePrompt);
        assert_eq!(manifest.variables.len(), 1);
        assert_eq!(manifest.variables["subject"].label(), "Subject");
        assert!(manifest.negative_prompt.is_none());
    }

    #[test]
    fn test_parse_rejects_invalid_doc() {
        let doc = json!({ "manifest_version": "2.0" });
        let err = Manifest::parse(&doc).unwrap_err();
        match err {
            StashError::InvalidManifest { issues } => assert!(issues.len() >= 5),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_variable_type_degrades_to_string() {
        let spec = VariableSpec::from_value(&json!({
            "label": "Weird",
            "type": "datetime",
            "default": "now"
        }));
        assert_eq!(spec.kind(), VarKind::String);
        assert_eq!(
            spec,
            VariableSpec::String {
                label: "Weird".into(),
                default: Some("now".into())
            }
        );
    }

    #[test]
    fn test_select_without_options_degrades_to_empty_list() {
        let spec = VariableSpec::from_value(&json!({
            "label": "Style",
            "type": "select",
            "default": "noir"
        }));
        assert_eq!(
            spec,
            VariableSpec::Select {
                label: "Style".into(),
                default: Some("noir".into()),
                options: vec![]
            }
        );
    }

    #[test]
    fn test_malformed_variable_entry_degrades() {
        let doc = json!({
            "manifest_version": "1.0",
            "type": "text_prompt",
            "name": "Odd",
            "language": "en",
            "template": "{{x}}",
            "variables": { "x": 42 }
        });
        let manifest = Manifest::parse(&doc).unwrap();
        assert_eq!(manifest.variables["x"].kind(), VarKind::String);
    }

    #[test]
    fn test_variable_defaults_coerced_per_type() {
        let number = VariableSpec::from_value(&json!({
            "label": "Steps", "type": "number", "default": "30"
        }));
        assert_eq!(
            number,
            VariableSpec::Number { label: "Steps".into(), default: Some(30.0) }
        );

        let boolean = VariableSpec::from_value(&json!({
            "label": "HD", "type": "boolean", "default": "true"
        }));
        assert_eq!(
            boolean,
            VariableSpec::Boolean { label: "HD".into(), default: Some(true) }
        );
    }

    #[test]
    fn test_var_kind_aliases() {
        assert_eq!("boolean".parse::<VarKind>().unwrap(), VarKind::Boolean);
        assert_eq!("bool".parse::<VarKind>().unwrap(), VarKind::Boolean);
        assert_eq!("int".parse::<VarKind>().unwrap(), VarKind::Number);
        assert_eq!("choice".parse::<VarKind>().unwrap(), VarKind::Select);
        assert_eq!("mystery".parse::<VarKind>().unwrap(), VarKind::String);
    }

    #[test]
    fn test_manifest_json_round_trip() {
        let doc = json!({
            "manifest_version": "1.0",
            "type": "video_prompt",
            "name": "Pan shot",
            "language": "en",
            "template": "{{scene}}, {{duration}}s",
            "variables": {
                "scene": { "label": "Scene", "type": "string" },
                "duration": { "label": "Duration", "type": "number", "default": 8.0 },
                "style": {
                    "label": "Style", "type": "select",
                    "default": "noir", "options": ["noir", "pastel"]
                }
            },
            "negative_prompt": "blurry"
        });

        let manifest = Manifest::parse(&doc).unwrap();
        let serialized = serde_json::to_value(&manifest).unwrap();
        let reparsed = Manifest::parse(&serialized).unwrap();
        assert_eq!(reparsed, manifest);
        assert_eq!(serialized["variables"]["style"]["type"], "select");
    }
}
