use crate::ports::{ClipboardWriter, StatusSink};

/// Application context holding dependencies for command execution.
///
/// The primary clipboard is `None` when the capability could not be
/// initialized (headless session, missing display server); the copy chain
/// then goes straight to the fallback writer.
pub struct AppContext<P: ClipboardWriter, F: ClipboardWriter, S: StatusSink> {
    primary: Option<P>,
    fallback: F,
    status: S,
}

impl<P: ClipboardWriter, F: ClipboardWriter, S: StatusSink> AppContext<P, F, S> {
    /// Create a new application context.
    pub fn new(primary: Option<P>, fallback: F, status: S) -> Self {
        Self { primary, fallback, status }
    }

    /// Mutable access to the primary clipboard, when available.
    pub fn primary_mut(&mut self) -> Option<&mut P> {
        self.primary.as_mut()
    }

    /// Mutable access to the fallback clipboard writer.
    pub fn fallback_mut(&mut self) -> &mut F {
        &mut self.fallback
    }

    /// Mutable access to the status sink.
    pub fn status_mut(&mut self) -> &mut S {
        &mut self.status
    }

    /// Shared access to the primary clipboard, when available.
    pub fn primary(&self) -> Option<&P> {
        self.primary.as_ref()
    }

    /// Shared access to the fallback clipboard writer.
    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    /// Shared access to the status sink.
    pub fn status(&self) -> &S {
        &self.status
    }
}
