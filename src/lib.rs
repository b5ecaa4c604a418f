//! promptgen: assemble structured code-generation prompts and place them on
//! the clipboard.
//!
//! The crate is organized hexagonally: `domain` holds the field set, the
//! prompt template, and the error type; `ports` declares the clipboard and
//! status surfaces; `services` provides the real adapters (arboard, external
//! copy utilities, stderr status lines); `app` carries the command logic over
//! a generic [`AppContext`]. The binary in `src/main.rs` parses arguments and
//! dispatches into the facade functions below.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::io::Read;
use std::path::Path;

use app::AppContext;
use app::commands::{copy, generate, wizard};
use ports::{ClipboardWriter, StatusSink};
use services::{ArboardClipboard, CommandClipboard, ConsoleStatusSink};

pub use app::commands::copy::CopyOutcome;
pub use app::config::DEFAULT_CONFIG_PATH;
pub use domain::{AppError, DefaultsConfig, FieldSet, RawFields, build_prompt};

fn context() -> AppContext<ArboardClipboard, CommandClipboard, ConsoleStatusSink> {
    // A clipboard service that cannot initialize is an absent capability,
    // not an error; writes route to the fallback utility.
    AppContext::new(ArboardClipboard::new().ok(), CommandClipboard::new(), ConsoleStatusSink)
}

fn load_defaults_reported<P, F, S>(
    ctx: &mut AppContext<P, F, S>,
    config_path: &Path,
) -> Result<DefaultsConfig, AppError>
where
    P: ClipboardWriter,
    F: ClipboardWriter,
    S: StatusSink,
{
    match app::config::load_defaults(config_path) {
        Ok(defaults) => Ok(defaults),
        Err(err) => {
            ctx.status_mut().error(&err.to_string());
            Err(err)
        }
    }
}

/// Build a prompt from raw field values and print it to stdout.
///
/// Blank fields are filled from the defaults file at `config_path` before
/// validation. With `copy_to_clipboard` set, the prompt is also placed on the
/// clipboard. Returns the generated prompt.
pub fn generate(
    raw: RawFields,
    config_path: &Path,
    copy_to_clipboard: bool,
) -> Result<String, AppError> {
    let mut ctx = context();
    let defaults = load_defaults_reported(&mut ctx, config_path)?;

    let mut fields = FieldSet::from_raw(raw);
    defaults.apply(&mut fields);

    let prompt = generate::execute(&mut ctx, &fields)?;
    println!("{prompt}");

    if copy_to_clipboard {
        copy::execute(&mut ctx, &prompt)?;
    }

    Ok(prompt)
}

/// Collect fields interactively, then build, print, and optionally copy the
/// prompt.
///
/// Returns `None` when the wizard is cancelled.
pub fn wizard(config_path: &Path) -> Result<Option<String>, AppError> {
    let mut ctx = context();
    let defaults = load_defaults_reported(&mut ctx, config_path)?;

    wizard::execute(&mut ctx, &defaults)
}

/// Copy text read from stdin to the clipboard.
pub fn copy_stdin() -> Result<CopyOutcome, AppError> {
    let mut ctx = context();

    let mut text = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut text) {
        let err = AppError::Io(err);
        ctx.status_mut().error(&err.to_string());
        return Err(err);
    }

    copy::execute(&mut ctx, &text)
}
