use std::io::{self, Write};
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Copy utilities probed in order on Unix-like systems.
const UNIX_UTILITIES: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

#[derive(Debug)]
enum UtilityStatus {
    Copied,
    Refused,
}

/// Clipboard fallback that pipes text into a platform copy utility.
///
/// Used where the direct clipboard service is absent or rejected the write.
/// The spawned child is always reaped, including when feeding its stdin
/// fails.
pub struct CommandClipboard;

impl CommandClipboard {
    pub fn new() -> Self {
        Self
    }

    fn candidates() -> &'static [&'static [&'static str]] {
        if cfg!(target_os = "macos") {
            &[&["pbcopy"]]
        } else if cfg!(target_os = "windows") {
            &[&["clip"]]
        } else {
            UNIX_UTILITIES
        }
    }

    fn run_utility(argv: &[&str], text: &str) -> Result<UtilityStatus, io::Error> {
        let mut child = Command::new(argv[0])
            .args(&argv[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // A utility that exits without draining stdin closes the pipe; its
        // exit status decides the outcome, not the broken pipe.
        let write_result = match child.stdin.take() {
            Some(mut stdin) => match stdin.write_all(text.as_bytes()) {
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
                other => other,
            },
            None => Ok(()),
        };

        // Reap the child before propagating any stdin failure.
        let status = child.wait();
        write_result?;

        Ok(if status?.success() { UtilityStatus::Copied } else { UtilityStatus::Refused })
    }
}

impl ClipboardWriter for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        for argv in Self::candidates() {
            match Self::run_utility(argv, text) {
                Ok(UtilityStatus::Copied) => return Ok(()),
                Ok(UtilityStatus::Refused) => return Err(AppError::CopyUnavailable),
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => return Err(AppError::CopyFailed(err)),
            }
        }

        // No utility on PATH.
        Err(AppError::CopyUnavailable)
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    #[test]
    fn accepting_utility_reports_copied() {
        let status = CommandClipboard::run_utility(&["cat"], "prompt text").unwrap();

        assert!(matches!(status, UtilityStatus::Copied));
    }

    #[test]
    fn refusing_utility_reports_refused() {
        let status = CommandClipboard::run_utility(&["false"], "prompt text").unwrap();

        assert!(matches!(status, UtilityStatus::Refused));
    }

    #[test]
    fn missing_utility_surfaces_not_found() {
        let err =
            CommandClipboard::run_utility(&["promptgen-no-such-utility"], "prompt text")
                .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
