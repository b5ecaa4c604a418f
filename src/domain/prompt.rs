//! Prompt assembly: a deterministic template over a [`FieldSet`].

use super::FieldSet;

/// Bracketed example hints substituted for blank optional fields.
///
/// These are part of the output contract: a blank field produces its hint
/// verbatim in the assembled prompt.
pub mod hints {
    pub const LANGUAGE_STACK: &str =
        "[language/stack, e.g. TypeScript + Node.js, Python + FastAPI, etc.]";
    pub const TECH_STACK: &str = "[e.g. Node.js 22, TypeScript 5, PostgreSQL 16, Docker]";
    pub const ARCHITECTURE: &str =
        "[e.g. hexagonal / clean architecture / layered service + repository / event-driven]";
    pub const DESIGN_PATTERNS: &str = "[e.g. Strategy, Command, Factory, Observer, CQRS, etc.]";
    pub const NON_FUNCTIONAL: &str =
        "[performance, security, observability, scalability, latency targets, etc.]";
    pub const ERROR_HANDLING: &str =
        "[how errors should be propagated/logged, retry behavior, circuit breakers, etc.]";
    pub const CONFIGURATION: &str = "[env vars, config files, secrets management]";
    pub const UNIT_TEST_FRAMEWORK: &str = "[testing framework, e.g. Jest, Pytest, xUnit]";
}

/// Assemble the assistant-facing prompt for a field set.
///
/// Pure and deterministic: identical field sets yield byte-identical output.
/// Values are inserted verbatim (embedded newlines included); blank optional
/// fields fall back to their [`hints`] literal. The two required fields are
/// validated by the caller, but a blank language/stack still renders its hint
/// rather than failing.
pub fn build_prompt(fields: &FieldSet) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        "You are a senior software engineer specializing in {}.\n",
        or_hint(&fields.language_stack, hints::LANGUAGE_STACK)
    ));

    parts.push("I need production-ready code for the following feature:".to_string());
    parts.push(format!("Goal: {}", fields.goal));
    parts.push(String::new());

    parts.push("Context & constraints".to_string());
    parts.push(String::new());

    parts.push(format!("Tech stack: {}", or_hint(&fields.tech_stack, hints::TECH_STACK)));
    parts.push(format!("Architecture: {}", or_hint(&fields.architecture, hints::ARCHITECTURE)));
    parts.push(format!(
        "Design patterns you should apply: {}",
        or_hint(&fields.design_patterns, hints::DESIGN_PATTERNS)
    ));
    parts.push(format!(
        "Non-functional requirements: {}",
        or_hint(&fields.non_functional, hints::NON_FUNCTIONAL)
    ));
    parts.push(format!(
        "Error handling: {}",
        or_hint(&fields.error_handling, hints::ERROR_HANDLING)
    ));
    parts.push(format!(
        "Configuration: {}",
        or_hint(&fields.configuration, hints::CONFIGURATION)
    ));

    parts.push(String::new());
    parts.push("Deliverables".to_string());
    parts.push(String::new());

    parts.push(
        "Full, compilable code in [language] organized into realistic modules/files, not pseudocode."
            .to_string(),
    );
    parts.push(
        "Clear separation of concerns (domain logic, infrastructure, transport/API).".to_string(),
    );
    parts.push("Interfaces/abstractions where we might swap implementations later.".to_string());
    parts.push("Robust error handling and logging suitable for production.".to_string());
    parts.push(
        "Input validation and basic security best practices for [HTTP APIs / message handlers / CLIs, etc.]."
            .to_string(),
    );
    parts.push(format!(
        "Unit tests using {} for the key public surfaces.",
        or_hint(&fields.unit_test_framework, hints::UNIT_TEST_FRAMEWORK)
    ));
    parts.push(
        "Brief explanation (max 10–15 lines) of the architecture and why the main design patterns were chosen."
            .to_string(),
    );

    parts.push(String::new());
    parts.push("Style and quality expectations".to_string());
    parts.push(String::new());

    parts.push("Idiomatic, modern [language] using current best practices.".to_string());
    parts.push(
        "No unnecessary comments; only where something non-obvious needs explanation.".to_string(),
    );
    parts.push("Use meaningful names and avoid over-engineering.".to_string());
    parts.push("Prefer dependency injection and testability over tight coupling.".to_string());
    parts.push(
        "Make sure the code would pass a code review at a FAANG-level company.".to_string(),
    );

    if !fields.style_quality.is_empty() {
        parts.push(String::new());
        parts.push(fields.style_quality.clone());
    }

    parts.join("\n")
}

fn or_hint<'a>(value: &'a str, hint: &'a str) -> &'a str {
    if value.is_empty() { hint } else { value }
}
