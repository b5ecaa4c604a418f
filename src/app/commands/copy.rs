use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ClipboardWriter, StatusSink};

/// Status line reported when any copy path succeeds.
pub const COPIED_STATUS: &str = "Prompt copied to clipboard.";

/// Which copy path placed the text on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The system clipboard accepted the text directly.
    Copied,
    /// The primary path was unavailable or rejected the write; the fallback
    /// utility succeeded.
    CopiedViaFallback,
}

/// Execute the copy command: place `text` on the clipboard, best effort.
///
/// Ordered chain: the primary clipboard first, then the fallback utility. A
/// primary rejection routes to the fallback without its own status line, and
/// both success paths report the same status. Blank text is rejected before
/// any attempt.
pub fn execute<P, F, S>(ctx: &mut AppContext<P, F, S>, text: &str) -> Result<CopyOutcome, AppError>
where
    P: ClipboardWriter,
    F: ClipboardWriter,
    S: StatusSink,
{
    if text.trim().is_empty() {
        let err = AppError::NothingToCopy;
        ctx.status_mut().error(&err.to_string());
        return Err(err);
    }

    if let Some(primary) = ctx.primary_mut() {
        if primary.write_text(text).is_ok() {
            ctx.status_mut().success(COPIED_STATUS);
            return Ok(CopyOutcome::Copied);
        }
    }

    match ctx.fallback_mut().write_text(text) {
        Ok(()) => {
            ctx.status_mut().success(COPIED_STATUS);
            Ok(CopyOutcome::CopiedViaFallback)
        }
        Err(err) => {
            ctx.status_mut().error(&err.to_string());
            Err(err)
        }
    }
}
