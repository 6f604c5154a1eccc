//! Template rendering and default materialization
//!
//! Rendering is exact-literal substitution: every occurrence of `{{key}}`
//! is replaced for each declared variable with a supplied value, and
//! anything unresolved survives verbatim. A general template engine is the
//! wrong tool here: it would reject malformed input and erase unknown
//! placeholders, both of which the manifest contract forbids.

use crate::schema::{Manifest, VariableSpec};
use crate::VariableValues;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Localized token substituted for a true boolean variable
pub const BOOLEAN_TRUE: &str = "sí";
/// Localized token substituted for a false boolean variable
pub const BOOLEAN_FALSE: &str = "no";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("placeholder pattern compiles"));

/// Coerce a supplied value to a strict boolean.
///
/// `true` and the string `"true"` are truthy; everything else is false.
/// Editing surfaces hand values through as JSON, so both forms occur.
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true",
        _ => false,
    }
}

/// List the distinct `{{key}}` placeholders in a template string, in
/// first-occurrence order.
///
/// Validation never cross-checks placeholders against declared variables;
/// this helper lets callers diff the two sides themselves.
pub fn placeholder_keys(template: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str())
        .filter(|key| seen.insert(*key))
        .map(String::from)
        .collect()
}

fn number_text(n: f64) -> String {
    // integral values render without a trailing ".0"
    if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) => number_text(f),
            None => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl VariableSpec {
    /// The textual form a supplied value takes in rendered output.
    ///
    /// Boolean variables render as the localized [`BOOLEAN_TRUE`] /
    /// [`BOOLEAN_FALSE`] tokens; every other type substitutes the raw
    /// string form of the value verbatim.
    pub fn value_text(&self, value: &Value) -> String {
        match self {
            VariableSpec::Boolean { .. } => if coerce_bool(value) {
                BOOLEAN_TRUE
            } else {
                BOOLEAN_FALSE
            }
            .to_string(),
            _ => raw_text(value),
        }
    }

    /// The value offered to an input surface before any user edit.
    ///
    /// `select` resolves its default against the declared options, falling
    /// back to the first option when the default names none of them;
    /// `boolean` defaults to strict `false`, `number` to `0`, `string` to
    /// the empty string. `render` trusts whatever value it is later given,
    /// so this logic must be used by any surface that edits values.
    pub fn initial_value(&self) -> Value {
        match self {
            VariableSpec::String { default, .. } => {
                Value::String(default.clone().unwrap_or_default())
            }
            VariableSpec::Number { default, .. } => json_number(default.unwrap_or(0.0)),
            VariableSpec::Boolean { default, .. } => Value::Bool(default.unwrap_or(false)),
            VariableSpec::Select { default, options, .. } => {
                let chosen = default
                    .as_ref()
                    .and_then(|d| options.iter().find(|o| *o == d))
                    .or_else(|| options.first());
                Value::String(chosen.cloned().unwrap_or_default())
            }
        }
    }
}

fn json_number(n: f64) -> Value {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

impl Manifest {
    /// Render the manifest's own template with the supplied values
    pub fn render(&self, values: &VariableValues) -> String {
        self.render_template(&self.template, values)
    }

    /// Render an explicit template string with the supplied values.
    ///
    /// The editing surface lets the user tweak the template text before
    /// generating, so the text to render may differ from the stored one.
    /// For each declared variable with a supplied value, every literal
    /// occurrence of `{{key}}` is replaced (global, not first-match-only).
    /// Keys without a supplied value, and placeholders without a declared
    /// variable, are left untouched: no error, no default substitution.
    /// Substitution order across keys cannot affect the result because
    /// placeholders are delimited by the fixed `{{`/`}}` markers.
    pub fn render_template(&self, template: &str, values: &VariableValues) -> String {
        let mut output = template.to_string();
        for (key, spec) in &self.variables {
            let Some(value) = values.get(key) else {
                continue;
            };
            let token = format!("{{{{{key}}}}}");
            if output.contains(&token) {
                output = output.replace(&token, &spec.value_text(value));
            }
        }
        output
    }

    /// Materialize the initial values side-table for this manifest's
    /// variables, in declaration order
    pub fn initial_values(&self) -> VariableValues {
        tracing::debug!(
            variables = self.variables.len(),
            manifest = %self.name,
            "materializing initial variable values"
        );
        self.variables
            .iter()
            .map(|(key, spec)| (key.clone(), spec.initial_value()))
            .collect()
    }

    /// List the distinct placeholders in the stored template
    pub fn placeholder_keys(&self) -> Vec<String> {
        placeholder_keys(&self.template)
    }
}
