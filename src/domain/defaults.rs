//! Prompt field defaults loaded from an optional `.promptgen.toml`.

use serde::Deserialize;

use super::{AppError, FieldSet};

/// Defaults applied to fields an invocation leaves blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsConfig {
    /// Default field values.
    #[serde(default)]
    pub fields: DefaultFields,
}

/// Default values mirroring the field set keys.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultFields {
    #[serde(default)]
    pub language_stack: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub tech_stack: String,
    #[serde(default)]
    pub architecture: String,
    #[serde(default)]
    pub design_patterns: String,
    #[serde(default)]
    pub non_functional: String,
    #[serde(default)]
    pub error_handling: String,
    #[serde(default)]
    pub configuration: String,
    #[serde(default)]
    pub unit_test_framework: String,
    #[serde(default)]
    pub style_quality: String,
}

impl DefaultsConfig {
    /// Parse a defaults document.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    /// Fill blank fields of `target` from these defaults.
    ///
    /// A default never overrides a provided value, and applied defaults are
    /// trimmed so the field set invariant holds.
    pub fn apply(&self, target: &mut FieldSet) {
        fill(&mut target.language_stack, &self.fields.language_stack);
        fill(&mut target.goal, &self.fields.goal);
        fill(&mut target.tech_stack, &self.fields.tech_stack);
        fill(&mut target.architecture, &self.fields.architecture);
        fill(&mut target.design_patterns, &self.fields.design_patterns);
        fill(&mut target.non_functional, &self.fields.non_functional);
        fill(&mut target.error_handling, &self.fields.error_handling);
        fill(&mut target.configuration, &self.fields.configuration);
        fill(&mut target.unit_test_framework, &self.fields.unit_test_framework);
        fill(&mut target.style_quality, &self.fields.style_quality);
    }
}

fn fill(slot: &mut String, default: &str) {
    let default = default.trim();
    if slot.is_empty() && !default.is_empty() {
        *slot = default.to_string();
    }
}
