use crate::ports::StatusSink;

/// Status sink writing human-readable lines to stderr.
///
/// Stderr keeps status separate from the generated prompt on stdout, so the
/// prompt stays pipeable.
#[derive(Debug, Default)]
pub struct ConsoleStatusSink;

impl StatusSink for ConsoleStatusSink {
    fn success(&mut self, message: &str) {
        eprintln!("✅ {message}");
    }

    fn error(&mut self, message: &str) {
        eprintln!("Error: {message}");
    }
}
