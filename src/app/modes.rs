//! Input mode state types.
//!
//! The application operates in one of two primary input modes:
//! - **Normal**: navigation, copy and page commands
//! - **Search**: typing into the query or navigating its results
//!
//! Leaving search with `Esc` clears the query. Moving focus to the results
//! keeps it, and so does switching pages.

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Characters go to the query.
    Typing,

    /// Arrow keys move the cursor; `/` returns to typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and the footer hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,

    Search(SearchFocus),
}

impl InputMode {
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing))
    }

    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }
}
