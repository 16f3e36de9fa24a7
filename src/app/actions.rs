//! Side effects requested by the event handler.
//!
//! The handler never touches the host directly. It returns a `Vec<Action>`
//! and the plugin shim executes them in order:
//!
//! ```rust
//! use zicons::app::Action;
//!
//! let actions = vec![
//!     Action::CopyToClipboard { payload: "Home".to_string() },
//!     Action::ScheduleTick { seconds: 3.0 },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Writes `payload` to the clipboard.
    ///
    /// The outcome comes back as [`Event::ClipboardWritten`] or
    /// [`Event::ClipboardFailed`](crate::app::Event::ClipboardFailed).
    ///
    /// [`Event::ClipboardWritten`]: crate::app::Event::ClipboardWritten
    CopyToClipboard { payload: String },

    /// Requests a [`Event::Tick`](crate::app::Event::Tick) after `seconds`,
    /// used to expire notifications.
    ScheduleTick { seconds: f64 },
}
