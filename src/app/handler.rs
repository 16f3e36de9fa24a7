//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place state changes. It returns whether the
//! pane needs a re-render and the side effects to run.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `NextPage`, `PrevPage`, `Navigate`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Mode switching**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **Commands**: `Activate`, `CopySnippet`, `CloseDrawer`, `CloseFocus`
//! - **Feedback**: `ClipboardWritten`, `ClipboardFailed`, `Tick`
//!
//! Clipboard feedback only ever touches the notice. Query, selection and
//! results are the same before and after a failed copy.
//!
//! # Example
//!
//! ```rust
//! use zicons::app::{handle_event, AppState, Event};
//! use zicons::catalog::{BuiltinGlyphs, IconRegistry};
//!
//! let mut state = AppState::new(IconRegistry::load(&BuiltinGlyphs, 800)?);
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), zicons::ZiconsError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use super::pages::PrimaryAction;
use crate::app::{Action, AppState};
use crate::clipboard::{CopyOutcome, NoticeKind, SnippetKind};
use crate::domain::Result;
use chrono::{DateTime, Utc};

/// Longest payload echoed back in a notice.
const NOTICE_PAYLOAD_CHARS: usize = 40;

/// Events from user input, pipes, timers and clipboard feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down by one entry (wraps to top).
    KeyDown,
    /// Moves the cursor up by one entry (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Runs the page's primary action on the entry under the cursor.
    Activate,
    /// Copies a snippet of the drawer entry, or of the cursor entry when no
    /// drawer is shown.
    CopySnippet(SnippetKind),
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input (from navigating).
    FocusSearchBar,
    /// Focuses the results (from typing).
    FocusResults,
    /// Closes the drawer if one is shown, otherwise leaves search mode and
    /// clears the query.
    ExitSearch,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character from the query.
    Backspace,
    /// Closes the drawer, or clears the query if no drawer is shown.
    Escape,
    NextPage,
    PrevPage,
    /// Opens an external `/collection/<name>` reference.
    Navigate(String),
    CloseDrawer,
    ClipboardWritten {
        payload: String,
    },
    ClipboardFailed {
        payload: String,
        reason: String,
    },
    /// Timer tick carrying the current time, used to expire notices.
    Tick {
        now: DateTime<Utc>,
    },
}

impl From<CopyOutcome> for Event {
    fn from(outcome: CopyOutcome) -> Self {
        match outcome {
            CopyOutcome::Copied { payload } => Self::ClipboardWritten { payload },
            CopyOutcome::Failed { payload, reason } => Self::ClipboardFailed { payload, reason },
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Errors
///
/// Currently infallible.
#[allow(clippy::too_many_lines, clippy::unnecessary_wraps)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Activate => {
            let Some(entry) = state.entry_at_cursor().cloned() else {
                tracing::debug!("no entry under cursor");
                if state.input_mode.is_search() {
                    state.input_mode = InputMode::Normal;
                    state.query.clear();
                    state.apply_search_filter();
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };

            match state.current_page().primary {
                PrimaryAction::OpenDetail => {
                    state.missing_route = None;
                    state.detail.open(entry);
                    Ok((true, vec![]))
                }
                PrimaryAction::Route => {
                    state.open_route(&entry.route());
                    Ok((true, vec![]))
                }
                PrimaryAction::CopyName => {
                    let payload = SnippetKind::Name.render(&entry);
                    state.detail.select(entry);
                    Ok((true, vec![Action::CopyToClipboard { payload }]))
                }
            }
        }
        Event::CopySnippet(kind) => state.copy_target().map_or_else(
            || {
                tracing::debug!(kind = ?kind, "nothing to copy");
                Ok((false, vec![]))
            },
            |entry| {
                let payload = kind.render(entry);
                tracing::debug!(kind = ?kind, name = %entry.name, "copy requested");
                Ok((false, vec![Action::CopyToClipboard { payload }]))
            },
        ),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.input_mode = if state.query.is_empty() {
                InputMode::Normal
            } else {
                InputMode::Search(SearchFocus::Navigating)
            };
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            if close_visible_drawer(state) {
                return Ok((true, vec![]));
            }
            tracing::debug!(query = %state.query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.query.clear();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !state.input_mode.is_typing() {
                return Ok((false, vec![]));
            }
            state.query.push(*c);
            tracing::trace!(query = %state.query, char = %c, "search query updated");
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.input_mode.is_search() || state.query.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Escape => {
            if close_visible_drawer(state) {
                return Ok((true, vec![]));
            }
            if state.query.is_empty() && state.input_mode == InputMode::Normal {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            state.query.clear();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::NextPage => {
            state.cycle_page(1);
            Ok((true, vec![]))
        }
        Event::PrevPage => {
            state.cycle_page(-1);
            Ok((true, vec![]))
        }
        Event::Navigate(route) => {
            let resolved = state.open_route(route);
            tracing::debug!(route = %route, resolved, "navigate");
            Ok((true, vec![]))
        }
        Event::CloseDrawer => Ok((close_visible_drawer(state), vec![])),
        Event::ClipboardWritten { payload } => {
            state.notify(
                NoticeKind::Info,
                format!("Copied {}", preview(payload)),
                Utc::now(),
            );
            Ok((true, vec![Action::ScheduleTick {
                seconds: state.notices.ttl_secs(),
            }]))
        }
        Event::ClipboardFailed { payload, reason } => {
            tracing::warn!(payload = %preview(payload), reason = %reason, "copy failed");
            state.notify(NoticeKind::Error, format!("Copy failed: {reason}"), Utc::now());
            Ok((true, vec![Action::ScheduleTick {
                seconds: state.notices.ttl_secs(),
            }]))
        }
        Event::Tick { now } => Ok((state.notices.expire(*now), vec![])),
    }
}

/// Closes the drawer or route placeholder if the page shows one.
fn close_visible_drawer(state: &mut AppState) -> bool {
    if !state.drawer_visible() {
        return false;
    }
    state.detail.close();
    state.missing_route = None;
    true
}

fn preview(payload: &str) -> String {
    if payload.chars().count() > NOTICE_PAYLOAD_CHARS {
        let head: String = payload.chars().take(NOTICE_PAYLOAD_CHARS - 3).collect();
        format!("{head}...")
    } else {
        payload.to_string()
    }
}
