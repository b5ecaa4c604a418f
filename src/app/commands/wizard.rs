use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input};

use super::{copy, generate};
use crate::app::AppContext;
use crate::domain::{AppError, DefaultsConfig, FieldSet};
use crate::ports::{ClipboardWriter, StatusSink};

/// Execute the wizard command: collect fields interactively, assemble the
/// prompt, print it, and offer to copy it.
///
/// Every field accepts an empty answer; validation runs after collection, so
/// the wizard rejects a blank goal the same way the flag surface does.
/// Interrupting any prompt cancels the run (`Ok(None)`, nothing printed).
pub fn execute<P, F, S>(
    ctx: &mut AppContext<P, F, S>,
    defaults: &DefaultsConfig,
) -> Result<Option<String>, AppError>
where
    P: ClipboardWriter,
    F: ClipboardWriter,
    S: StatusSink,
{
    let Some(mut fields) = collect_fields()? else {
        return Ok(None);
    };
    defaults.apply(&mut fields);

    let prompt = generate::execute(ctx, &fields)?;
    println!("{prompt}");

    match Confirm::new().with_prompt("Copy to clipboard?").default(true).interact() {
        Ok(true) => {
            copy::execute(ctx, &prompt)?;
        }
        Ok(false) => {}
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => return Ok(None),
        Err(err) => {
            return Err(AppError::config_error(format!("Copy confirmation failed: {err}")));
        }
    }

    Ok(Some(prompt))
}

fn collect_fields() -> Result<Option<FieldSet>, AppError> {
    let mut fields = FieldSet::default();

    let Some(value) = ask("Language / stack")? else { return Ok(None) };
    fields.language_stack = value;
    let Some(value) = ask("Goal")? else { return Ok(None) };
    fields.goal = value;
    let Some(value) = ask("Tech stack")? else { return Ok(None) };
    fields.tech_stack = value;
    let Some(value) = ask("Architecture")? else { return Ok(None) };
    fields.architecture = value;
    let Some(value) = ask("Design patterns")? else { return Ok(None) };
    fields.design_patterns = value;
    let Some(value) = ask("Non-functional requirements")? else { return Ok(None) };
    fields.non_functional = value;
    let Some(value) = ask("Error handling")? else { return Ok(None) };
    fields.error_handling = value;
    let Some(value) = ask("Configuration")? else { return Ok(None) };
    fields.configuration = value;
    let Some(value) = ask("Unit test framework")? else { return Ok(None) };
    fields.unit_test_framework = value;
    let Some(value) = ask("Style / quality notes")? else { return Ok(None) };
    fields.style_quality = value;

    Ok(Some(fields))
}

fn ask(label: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt(label).allow_empty(true).interact_text() {
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read {label}: {err}"))),
    }
}
