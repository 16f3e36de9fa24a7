//! Fire-and-forget clipboard writes.
//!
//! [`copy`] is the only entry point the application uses. It never returns an
//! error: a failed write becomes [`CopyOutcome::Failed`], which the handler
//! turns into a transient notice. Query, selection, and results are untouched
//! either way.
//!
//! # Implementations
//!
//! - [`Osc52Clipboard`]: queues an OSC 52 escape sequence for the next render
//! - [`DisabledClipboard`]: always fails, for `clipboard "off"`

mod notice;
mod osc52;
mod snippets;

pub use notice::{Notice, NoticeKind, Notices};
pub use osc52::{Osc52Clipboard, MAX_ENCODED_LEN};
pub use snippets::SnippetKind;

use crate::domain::{Result, ZiconsError};

/// External clipboard collaborator.
pub trait Clipboard {
    /// Writes `payload` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`ZiconsError::ClipboardWriteFailed`] if the write is rejected
    /// or unsupported.
    fn write(&mut self, payload: &str) -> Result<()>;

    /// Escape sequences to print before the next frame, emptied on read.
    fn take_output(&mut self) -> Vec<String> {
        Vec::new()
    }
}

/// Which clipboard the plugin writes to, from the `clipboard` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardMode {
    #[default]
    Osc52,
    Off,
}

impl ClipboardMode {
    /// Parses `osc52` or `off`, ignoring case.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "osc52" => Some(Self::Osc52),
            "off" => Some(Self::Off),
            _ => None,
        }
    }

    #[must_use]
    pub fn build(self) -> Box<dyn Clipboard> {
        match self {
            Self::Osc52 => Box::new(Osc52Clipboard::new()),
            Self::Off => Box::new(DisabledClipboard),
        }
    }
}

/// Clipboard that rejects every write.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledClipboard;

impl Clipboard for DisabledClipboard {
    fn write(&mut self, _payload: &str) -> Result<()> {
        Err(ZiconsError::ClipboardWriteFailed(
            "clipboard disabled in configuration".to_string(),
        ))
    }
}

/// Result of a [`copy`] call, reported back to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { payload: String },
    Failed { payload: String, reason: String },
}

/// Writes `payload` through `clipboard`, containing any failure.
///
/// ```rust
/// use zicons::clipboard::{copy, CopyOutcome, DisabledClipboard};
///
/// let outcome = copy(&mut DisabledClipboard, "Home");
/// assert!(matches!(outcome, CopyOutcome::Failed { .. }));
/// ```
pub fn copy(clipboard: &mut dyn Clipboard, payload: &str) -> CopyOutcome {
    match clipboard.write(payload) {
        Ok(()) => {
            tracing::debug!(bytes = payload.len(), "clipboard write queued");
            CopyOutcome::Copied {
                payload: payload.to_string(),
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "clipboard write failed");
            CopyOutcome::Failed {
                payload: payload.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recording(Vec<String>);

    impl Clipboard for Recording {
        fn write(&mut self, payload: &str) -> Result<()> {
            self.0.push(payload.to_string());
            Ok(())
        }
    }

    #[test]
    fn successful_write_reports_copied() {
        let mut clipboard = Recording::default();
        let outcome = copy(&mut clipboard, "Home");
        assert_eq!(
            outcome,
            CopyOutcome::Copied {
                payload: "Home".to_string()
            }
        );
        assert_eq!(clipboard.0, vec!["Home"]);
    }

    #[test]
    fn disabled_clipboard_failure_is_contained() {
        let outcome = copy(&mut DisabledClipboard, "Home");
        match outcome {
            CopyOutcome::Failed { payload, reason } => {
                assert_eq!(payload, "Home");
                assert!(reason.contains("disabled"));
            }
            CopyOutcome::Copied { .. } => panic!("disabled clipboard must not copy"),
        }
    }

    #[test]
    fn mode_parsing_and_output() {
        assert_eq!(ClipboardMode::parse(" OSC52 "), Some(ClipboardMode::Osc52));
        assert_eq!(ClipboardMode::parse("off"), Some(ClipboardMode::Off));
        assert_eq!(ClipboardMode::parse("pbcopy"), None);

        let mut osc = ClipboardMode::Osc52.build();
        assert!(matches!(copy(osc.as_mut(), "Home"), CopyOutcome::Copied { .. }));
        assert_eq!(osc.take_output().len(), 1);
        assert!(osc.take_output().is_empty());

        let mut off = ClipboardMode::Off.build();
        assert!(matches!(copy(off.as_mut(), "Home"), CopyOutcome::Failed { .. }));
        assert!(off.take_output().is_empty());
    }
}
