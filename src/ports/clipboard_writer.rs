use crate::domain::AppError;

/// Port for placing text on the system clipboard.
///
/// Two adapters exist: the direct system clipboard and the external-utility
/// fallback. The copy chain tries them in that order; a rejection from the
/// first routes to the second without surfacing its own status.
pub trait ClipboardWriter {
    /// Place `text` on the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}
