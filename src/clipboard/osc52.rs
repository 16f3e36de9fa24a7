//! OSC 52 clipboard.
//!
//! Zellij plugins have no direct clipboard handle, but text printed during
//! render reaches the terminal. Writes are encoded into an OSC 52 sequence and
//! held until the shim drains them in `render`.

use super::Clipboard;
use crate::domain::{Result, ZiconsError};
use base64::Engine;

/// Largest base64 body most terminals accept in a single OSC 52 sequence.
pub const MAX_ENCODED_LEN: usize = 100_000;

#[derive(Debug, Clone, Default)]
pub struct Osc52Clipboard {
    pending: Vec<String>,
}

impl Osc52Clipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the escape sequence for `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`ZiconsError::ClipboardWriteFailed`] for empty payloads or
    /// payloads whose encoding exceeds [`MAX_ENCODED_LEN`].
    pub fn sequence(payload: &str) -> Result<String> {
        if payload.is_empty() {
            return Err(ZiconsError::ClipboardWriteFailed(
                "nothing to copy".to_string(),
            ));
        }

        let encoded = base64::engine::general_purpose::STANDARD.encode(payload);
        if encoded.len() > MAX_ENCODED_LEN {
            return Err(ZiconsError::ClipboardWriteFailed(format!(
                "payload too large for OSC 52 ({} encoded bytes)",
                encoded.len()
            )));
        }

        Ok(format!("\x1b]52;c;{encoded}\x07"))
    }

    /// Removes and returns every queued sequence, oldest first.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl Clipboard for Osc52Clipboard {
    fn write(&mut self, payload: &str) -> Result<()> {
        let sequence = Self::sequence(payload)?;
        self.pending.push(sequence);
        Ok(())
    }

    fn take_output(&mut self) -> Vec<String> {
        self.drain()
    }
}
