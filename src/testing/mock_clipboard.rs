use std::cell::{Cell, RefCell};
use std::io;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Mock clipboard for testing the copy chain.
///
/// Records every attempt; failure modes mirror the two real adapter outcomes
/// (a refusing utility vs. one that breaks mid-operation).
#[derive(Default)]
pub struct MockClipboard {
    written_text: RefCell<Option<String>>,
    attempts: Cell<usize>,
    should_fail: Cell<bool>,
    fail_hard: Cell<bool>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes the way a refusing copy utility does.
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.set(fail);
    }

    /// Reject writes with an I/O-class failure.
    pub fn set_fail_hard(&self, fail: bool) {
        self.fail_hard.set(fail);
    }

    /// Text accepted by the last successful write, if any.
    pub fn written(&self) -> Option<String> {
        self.written_text.borrow().clone()
    }

    /// Number of write attempts made against this clipboard.
    pub fn attempts(&self) -> usize {
        self.attempts.get()
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.attempts.set(self.attempts.get() + 1);

        if self.fail_hard.get() {
            return Err(AppError::CopyFailed(io::Error::other("mock clipboard failure")));
        }
        if self.should_fail.get() {
            return Err(AppError::CopyUnavailable);
        }

        *self.written_text.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
