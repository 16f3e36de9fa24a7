//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for everything transient: the
//! query, the cursor, the active page, the detail view and the current notice.
//! The registry it holds never changes after load.
//!
//! # Derived State
//!
//! `filtered` and `display` are recomputed from the registry by
//! [`AppState::apply_search_filter`] whenever the query or page changes. A new
//! query supersedes the old result entirely. The selection is never derived
//! from them, so hiding the selected entry does not clear it.
//!
//! # Example
//!
//! ```rust
//! use zicons::app::AppState;
//! use zicons::catalog::{BuiltinGlyphs, IconRegistry};
//!
//! let registry = IconRegistry::load(&BuiltinGlyphs, 800)?;
//! let mut state = AppState::new(registry);
//! state.query = "arrow".to_string();
//! state.apply_search_filter();
//! assert!(state.filtered.iter().all(|e| e.name.to_lowercase().contains("arrow")));
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.empty_state.is_none());
//! # Ok::<(), zicons::ZiconsError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use super::pages::{self, Page, PrimaryAction, DETAIL_PAGE};
use super::selection::{DetailView, DrawerState};
use crate::catalog::IconRegistry;
use crate::clipboard::{NoticeKind, Notices, SnippetKind};
use crate::domain::IconEntry;
use crate::search::{self, DisplayGroup, Grouper};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, DisplayRow, DrawerInfo, EmptyState, FooterInfo, HeaderInfo, NoticeInfo,
    PageTab, SearchBarInfo, SnippetLine, UIViewModel,
};
use chrono::{DateTime, Utc};

/// Rows taken by the drawer when it is visible.
pub const DRAWER_HEIGHT: usize = 11;

/// Longest name shown before truncation.
const NAME_COLUMN_WIDTH: usize = 32;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable catalog loaded at startup.
    pub registry: IconRegistry,

    /// Registry entries matching `query`, in registry order.
    pub filtered: Vec<IconEntry>,

    /// `filtered` grouped by the active page.
    pub display: DisplayGroup,

    /// Index of the cursor within the flattened entries of `display`.
    pub cursor: usize,

    pub input_mode: InputMode,

    /// Literal, case-insensitive search text.
    pub query: String,

    pub pages: Vec<Page>,
    pub page_index: usize,

    /// Selection and drawer, shared by all pages.
    pub detail: DetailView,

    /// Name requested by a route that did not resolve. Rendered as the
    /// placeholder drawer.
    pub missing_route: Option<String>,

    pub notices: Notices,

    /// Theme of the active page.
    pub page_theme: Theme,

    /// Configured theme that replaces every page theme.
    pub theme_override: Option<Theme>,
}

impl AppState {
    /// Creates state on the detail page with an empty query.
    #[must_use]
    pub fn new(registry: IconRegistry) -> Self {
        let pages = pages::presets();
        let page_theme = pages
            .first()
            .map_or_else(Theme::default, |page| Theme::builtin_or_default(page.theme));

        let mut state = Self {
            registry,
            filtered: Vec::new(),
            display: DisplayGroup::default(),
            cursor: 0,
            input_mode: InputMode::Normal,
            query: String::new(),
            pages,
            page_index: 0,
            detail: DetailView::new(),
            missing_route: None,
            notices: Notices::default(),
            page_theme,
            theme_override: None,
        };
        state.apply_search_filter();
        state
    }

    #[must_use]
    pub fn current_page(&self) -> &Page {
        &self.pages[self.page_index]
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        self.theme_override.as_ref().unwrap_or(&self.page_theme)
    }

    /// Recomputes `filtered` and `display` from the registry and clamps the cursor.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total = self.registry.len(),
            query_len = self.query.len(),
            page = self.current_page().id
        )
        .entered();

        self.filtered = search::filter(self.registry.entries(), &self.query);
        let grouper = Grouper::new(&self.registry);
        self.display = self.pages[self.page_index].group(&grouper, &self.filtered);

        let visible = self.display.entry_count();
        self.cursor = if visible == 0 {
            0
        } else {
            self.cursor.min(visible - 1)
        };

        tracing::debug!(
            filtered = self.filtered.len(),
            groups = self.display.groups().len(),
            "search filter applied"
        );
    }

    /// Entries in display order, across all groups.
    pub fn visible_entries(&self) -> impl Iterator<Item = &IconEntry> {
        self.display.groups().iter().flat_map(|g| g.entries.iter())
    }

    #[must_use]
    pub fn entry_at_cursor(&self) -> Option<&IconEntry> {
        self.visible_entries().nth(self.cursor)
    }

    /// Entry the copy commands act on: the drawer if one is shown, else the cursor.
    #[must_use]
    pub fn copy_target(&self) -> Option<&IconEntry> {
        match self.detail.drawer() {
            DrawerState::Open(entry) if self.current_page().has_drawer => Some(entry),
            _ => self.entry_at_cursor(),
        }
    }

    /// Whether the active page is showing the drawer.
    #[must_use]
    pub fn drawer_visible(&self) -> bool {
        self.current_page().has_drawer && (self.detail.is_open() || self.missing_route.is_some())
    }

    /// Moves the cursor to the next visible entry, wrapping to the first.
    ///
    /// Group header rows are skipped; the cursor counts entries only.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zicons::catalog::IconRegistry;
    /// use zicons::domain::{Glyph, IconEntry};
    /// use zicons::AppState;
    ///
    /// let entries = vec![
    ///     IconEntry::new("Home", Glyph::new("⌂")),
    ///     IconEntry::new("Star", Glyph::new("★")),
    /// ];
    /// let mut state = AppState::new(IconRegistry::load(&entries, 800)?);
    /// state.move_cursor_down();
    /// assert_eq!(state.entry_at_cursor().unwrap().name, "Star");
    /// state.move_cursor_down();
    /// assert_eq!(state.entry_at_cursor().unwrap().name, "Home");
    /// # Ok::<(), zicons::ZiconsError>(())
    /// ```
    pub fn move_cursor_down(&mut self) {
        let visible = self.display.entry_count();
        if visible == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % visible;
    }

    /// Moves the cursor to the previous visible entry, wrapping to the last.
    pub fn move_cursor_up(&mut self) {
        let visible = self.display.entry_count();
        if visible == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 {
            visible - 1
        } else {
            self.cursor - 1
        };
    }

    /// Places the cursor on `name` if it is visible on the current page.
    pub fn focus_entry(&mut self, name: &str) {
        let found = self.visible_entries().position(|e| e.name == name);
        if let Some(index) = found {
            self.cursor = index;
        }
    }

    /// Switches to the page at `index`, keeping query and selection.
    ///
    /// The filter is re-run against the new page's grouping and the cursor
    /// follows the entry it was on when that entry is still visible.
    ///
    /// # Parameters
    ///
    /// * `index` - Position in `pages`; out of range or current is a no-op
    ///
    /// # Example
    ///
    /// ```rust
    /// use zicons::app::pages;
    /// use zicons::{initialize, Config};
    ///
    /// let mut state = initialize(&Config::default());
    /// let ink = pages::position(&state.pages, "ink").unwrap();
    /// state.switch_page(ink);
    /// assert_eq!(state.current_page().id, "ink");
    /// assert_eq!(state.theme().name, "ink");
    /// ```
    pub fn switch_page(&mut self, index: usize) {
        if index >= self.pages.len() || index == self.page_index {
            return;
        }
        let focused = self.entry_at_cursor().map(|e| e.name.clone());

        self.page_index = index;
        self.page_theme = Theme::builtin_or_default(self.pages[index].theme);
        if !self.pages[index].has_drawer {
            self.missing_route = None;
        }
        self.apply_search_filter();

        if let Some(name) = focused {
            self.focus_entry(&name);
        }
        tracing::debug!(page = self.current_page().id, "page switched");
    }

    /// Cycles pages by `step`, wrapping at either end.
    ///
    /// `1` is the next page and `-1` the previous one.
    pub fn cycle_page(&mut self, step: isize) {
        let len = self.pages.len();
        if len == 0 {
            return;
        }
        let offset = step.rem_euclid(len as isize).unsigned_abs();
        self.switch_page((self.page_index + offset) % len);
    }

    /// Opens `/collection/<name>` on the detail page.
    ///
    /// An unresolved route closes the drawer and records the missing name for
    /// the placeholder. Returns whether the route resolved.
    pub fn open_route(&mut self, path: &str) -> bool {
        if let Some(index) = pages::position(&self.pages, DETAIL_PAGE) {
            self.switch_page(index);
        }

        let resolved = self.registry.resolve_route(path).map(IconEntry::clone);
        match resolved {
            Ok(entry) => {
                tracing::debug!(name = %entry.name, "route resolved");
                self.missing_route = None;
                self.focus_entry(&entry.name);
                self.detail.open(entry);
                true
            }
            Err(e) => {
                tracing::debug!(route = %path, error = %e, "route not found");
                self.detail.close();
                self.missing_route = Some(
                    path.trim()
                        .strip_prefix(crate::catalog::ROUTE_PREFIX)
                        .unwrap_or(path)
                        .trim_end_matches('/')
                        .to_string(),
                );
                false
            }
        }
    }

    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>, now: DateTime<Utc>) {
        self.notices.push(kind, message, now);
    }

    /// Computes the renderable view model for a `rows` x `cols` pane.
    ///
    /// # Windowing Algorithm
    ///
    /// Rows are the group headers and items of `display` in order. The window
    /// is centred on the cursor row, then shifted back if it would run past
    /// the end so the pane stays full.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let drawer = self.compute_drawer();
        let available_rows = self.calculate_available_rows(rows, drawer.is_some());

        let (all_rows, cursor_row) = self.compute_rows(cols);

        let mut visible_start = cursor_row.map_or(0, |c| c.saturating_sub(available_rows / 2));
        let visible_end = (visible_start + available_rows).min(all_rows.len());
        if visible_end - visible_start < available_rows && all_rows.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_rows = all_rows[visible_start..visible_end].to_vec();

        UIViewModel {
            rows: display_rows,
            cursor_row: cursor_row.map(|c| c.saturating_sub(visible_start)),
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            search_bar: self.compute_search_bar(),
            drawer,
            notice: self.notices.current().map(|notice| NoticeInfo {
                message: notice.message.clone(),
                is_error: notice.kind == NoticeKind::Error,
            }),
        }
    }

    fn compute_rows(&self, cols: usize) -> (Vec<DisplayRow>, Option<usize>) {
        let show_code_points = cols > NAME_COLUMN_WIDTH + 24;
        let highlight = self.input_mode.is_search() && !self.query.is_empty();
        let single_group = self.display.groups().len() == 1
            && self.current_page().primary == PrimaryAction::CopyName;

        let mut rows = Vec::with_capacity(self.display.entry_count() + self.display.groups().len());
        let mut cursor_row = None;
        let mut index = 0;

        for group in self.display.groups() {
            if !single_group {
                rows.push(DisplayRow::Group {
                    label: group.label.clone(),
                    count: group.entries.len(),
                });
            }
            for entry in &group.entries {
                let is_cursor = index == self.cursor;
                if is_cursor {
                    cursor_row = Some(rows.len());
                }
                rows.push(DisplayRow::Item(DisplayItem {
                    name: truncate(&entry.name, NAME_COLUMN_WIDTH),
                    glyph: entry.glyph.as_str().to_string(),
                    code_points: if show_code_points {
                        entry.glyph.code_point_label()
                    } else {
                        String::new()
                    },
                    is_cursor,
                    is_selected: self.detail.selection().is_selected(entry),
                    highlight: if highlight {
                        search::highlight_range(&entry.name, &self.query)
                            .filter(|&(_, end)| end <= NAME_COLUMN_WIDTH)
                    } else {
                        None
                    },
                }));
                index += 1;
            }
        }

        (rows, cursor_row)
    }

    fn compute_header(&self) -> HeaderInfo {
        let page = self.current_page();
        HeaderInfo {
            title: format!(" {} ({}) ", page.title, self.display.entry_count()),
            tabs: self
                .pages
                .iter()
                .enumerate()
                .map(|(i, p)| PageTab {
                    label: p.id.to_string(),
                    is_active: i == self.page_index,
                })
                .collect(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let primary = match self.current_page().primary {
            PrimaryAction::OpenDetail => "Enter: details",
            PrimaryAction::Route => "Enter: open",
            PrimaryAction::CopyName => "Enter: copy name",
        };

        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: results  Ctrl+n/p: navigate  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                format!("ESC: exit search  /: edit query  j/k: navigate  {primary}")
            }
            InputMode::Normal if self.drawer_visible() => {
                "y/g/u/h/c/x/i: copy snippet  ESC: close  j/k: navigate  q: quit".to_string()
            }
            InputMode::Normal => {
                format!("j/k: navigate  /: search  {primary}  y: copy  Tab: page  q: quit")
            }
        };

        FooterInfo { keybindings }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if self.input_mode.is_search() || !self.query.is_empty() {
            Some(SearchBarInfo {
                query: self.query.clone(),
                is_focused: self.input_mode.is_typing(),
            })
        } else {
            None
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.registry.is_empty() {
            return Some(EmptyState {
                message: "No icons loaded".to_string(),
                subtitle: format!("Source: {}", self.registry.source()),
            });
        }
        if self.display.is_empty() {
            return Some(EmptyState {
                message: format!("No icons match \"{}\"", self.query),
                subtitle: "Backspace to edit the query, ESC to clear it".to_string(),
            });
        }
        None
    }

    fn compute_drawer(&self) -> Option<DrawerInfo> {
        if !self.current_page().has_drawer {
            return None;
        }

        if let DrawerState::Open(entry) = self.detail.drawer() {
            return Some(DrawerInfo {
                title: entry.name.clone(),
                glyph: entry.glyph.as_str().to_string(),
                code_points: entry.glyph.code_point_label(),
                snippets: SnippetKind::ALL
                    .into_iter()
                    .map(|kind| SnippetLine {
                        key: kind.key(),
                        label: kind.label().to_string(),
                        value: kind.render(entry),
                    })
                    .collect(),
                is_missing: false,
            });
        }

        self.missing_route.as_ref().map(|name| DrawerInfo {
            title: "Icon not found".to_string(),
            glyph: "?".to_string(),
            code_points: String::new(),
            snippets: vec![SnippetLine {
                key: ' ',
                label: "Route".to_string(),
                value: format!("{}{name}", crate::catalog::ROUTE_PREFIX),
            }],
            is_missing: true,
        })
    }

    /// Rows left for the list after header, tabs, borders, footer, search bar
    /// and drawer.
    fn calculate_available_rows(&self, total_rows: usize, has_drawer: bool) -> usize {
        let search = if self.input_mode.is_search() || !self.query.is_empty() {
            3
        } else {
            0
        };
        let drawer = if has_drawer { DRAWER_HEIGHT } else { 0 };
        total_rows.saturating_sub(6 + search + drawer)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}
