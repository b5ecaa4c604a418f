//! The field set collected from one invocation of the prompt form.

/// Raw, unvalidated values as collected from the CLI surface.
///
/// `None` and blank strings are equivalent; both normalize to an empty field.
#[derive(Debug, Clone, Default)]
pub struct RawFields {
    pub language_stack: Option<String>,
    pub goal: Option<String>,
    pub tech_stack: Option<String>,
    pub architecture: Option<String>,
    pub design_patterns: Option<String>,
    pub non_functional: Option<String>,
    pub error_handling: Option<String>,
    pub configuration: Option<String>,
    pub unit_test_framework: Option<String>,
    pub style_quality: Option<String>,
}

/// The collected, trimmed values describing one requested feature.
///
/// Invariant: every value is trimmed; an empty string means the field was
/// left blank. A set is rebuilt for each invocation and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    pub language_stack: String,
    pub goal: String,
    pub tech_stack: String,
    pub architecture: String,
    pub design_patterns: String,
    pub non_functional: String,
    pub error_handling: String,
    pub configuration: String,
    pub unit_test_framework: String,
    pub style_quality: String,
}

impl FieldSet {
    /// Normalize raw values into a field set, trimming each one.
    pub fn from_raw(raw: RawFields) -> Self {
        Self {
            language_stack: sanitize(raw.language_stack),
            goal: sanitize(raw.goal),
            tech_stack: sanitize(raw.tech_stack),
            architecture: sanitize(raw.architecture),
            design_patterns: sanitize(raw.design_patterns),
            non_functional: sanitize(raw.non_functional),
            error_handling: sanitize(raw.error_handling),
            configuration: sanitize(raw.configuration),
            unit_test_framework: sanitize(raw.unit_test_framework),
            style_quality: sanitize(raw.style_quality),
        }
    }
}

fn sanitize(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}
