//! View model types representing renderable UI state.
//!
//! Computed by `AppState::compute_viewmodel()` and consumed by the renderer.
//! They contain no logic, only display-ready data: rows are already windowed,
//! names already truncated, highlight ranges already resolved.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Visible rows of the result list, group headers included.
    pub rows: Vec<DisplayRow>,

    /// Index into `rows` of the cursor entry, if it is visible.
    pub cursor_row: Option<usize>,

    pub header: HeaderInfo,
    pub footer: FooterInfo,

    /// Shown in place of the list when nothing matches.
    pub empty_state: Option<EmptyState>,

    /// Present while searching or while a query is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Detail drawer, or the not-found placeholder.
    pub drawer: Option<DrawerInfo>,

    /// Transient notice replacing the footer hints.
    pub notice: Option<NoticeInfo>,
}

/// One line of the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRow {
    Group { label: String, count: usize },
    Item(DisplayItem),
}

/// Display information for a single icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub name: String,
    pub glyph: String,

    /// `U+XXXX` labels, empty on narrow panes.
    pub code_points: String,

    pub is_cursor: bool,
    pub is_selected: bool,

    /// Character range of the query match in `name`.
    pub highlight: Option<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub tabs: Vec<PageTab>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTab {
    pub label: String,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently go to the query.
    pub is_focused: bool,
}

#[derive(Debug, Clone)]
pub struct DrawerInfo {
    pub title: String,
    pub glyph: String,
    pub code_points: String,
    pub snippets: Vec<SnippetLine>,
    /// Placeholder for a route that did not resolve.
    pub is_missing: bool,
}

/// A copyable snippet with its shortcut key.
#[derive(Debug, Clone)]
pub struct SnippetLine {
    pub key: char,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct NoticeInfo {
    pub message: String,
    pub is_error: bool,
}
