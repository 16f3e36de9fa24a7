//! Single-slot selection and the detail drawer derived from it.
//!
//! Selection is independent of filtering: a query that hides the selected
//! entry leaves the selection in place.

use crate::domain::IconEntry;

/// At most one active entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(IconEntry),
}

/// Last-write-wins selection state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `entry` unconditionally, replacing any prior selection.
    ///
    /// Membership in the visible set is not checked.
    pub fn select(&mut self, entry: IconEntry) {
        tracing::debug!(name = %entry.name, "icon selected");
        self.state = Selection::Selected(entry);
    }

    pub fn clear(&mut self) {
        self.state = Selection::Unselected;
    }

    /// Compares by name.
    #[must_use]
    pub fn is_selected(&self, entry: &IconEntry) -> bool {
        matches!(&self.state, Selection::Selected(current) if current.name == entry.name)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&IconEntry> {
        match &self.state {
            Selection::Selected(entry) => Some(entry),
            Selection::Unselected => None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &Selection {
        &self.state
    }
}

/// Detail drawer visibility.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open(IconEntry),
}

/// Selection paired with the drawer that follows it.
///
/// The drawer always shows the selected entry or nothing: `open` sets both,
/// `close` clears both, and `select` moves an open drawer along with the
/// selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailView {
    selection: SelectionController,
    drawer: DrawerState,
}

impl DetailView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, entry: IconEntry) {
        self.selection.select(entry.clone());
        self.drawer = DrawerState::Open(entry);
    }

    pub fn close(&mut self) {
        self.selection.clear();
        self.drawer = DrawerState::Closed;
    }

    /// Selects `entry` from a page without a drawer.
    ///
    /// A closed drawer stays closed; an open one follows the selection.
    pub fn select(&mut self, entry: IconEntry) {
        if self.is_open() {
            self.drawer = DrawerState::Open(entry.clone());
        }
        self.selection.select(entry);
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionController {
        &self.selection
    }

    #[must_use]
    pub const fn drawer(&self) -> &DrawerState {
        &self.drawer
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.drawer, DrawerState::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Glyph;

    fn entry(name: &str) -> IconEntry {
        IconEntry::new(name, Glyph::new("*"))
    }

    #[test]
    fn starts_unselected() {
        let controller = SelectionController::new();
        assert_eq!(controller.state(), &Selection::Unselected);
        assert!(controller.selected().is_none());
    }

    #[test]
    fn last_write_wins() {
        let mut controller = SelectionController::new();
        controller.select(entry("A"));
        controller.select(entry("B"));
        assert_eq!(controller.state(), &Selection::Selected(entry("B")));
        assert!(!controller.is_selected(&entry("A")));
        assert!(controller.is_selected(&entry("B")));
    }

    #[test]
    fn is_selected_compares_names() {
        let mut controller = SelectionController::new();
        controller.select(IconEntry::new("Star", Glyph::new("★")));
        assert!(controller.is_selected(&IconEntry::new("Star", Glyph::new("☆"))));
    }

    #[test]
    fn clear_returns_to_unselected() {
        let mut controller = SelectionController::new();
        controller.select(entry("A"));
        controller.clear();
        assert_eq!(controller.state(), &Selection::Unselected);
    }

    #[test]
    fn drawer_follows_open_and_close() {
        let mut view = DetailView::new();
        view.open(entry("Home"));
        assert_eq!(view.drawer(), &DrawerState::Open(entry("Home")));
        assert!(view.selection().is_selected(&entry("Home")));

        view.open(entry("Star"));
        assert_eq!(view.drawer(), &DrawerState::Open(entry("Star")));

        view.close();
        assert_eq!(view.drawer(), &DrawerState::Closed);
        assert!(view.selection().selected().is_none());
    }

    #[test]
    fn plain_select_leaves_drawer_closed() {
        let mut view = DetailView::new();
        view.select(entry("Home"));
        assert!(!view.is_open());
        assert!(view.selection().is_selected(&entry("Home")));
    }

    #[test]
    fn select_moves_an_open_drawer() {
        let mut view = DetailView::new();
        view.open(entry("Home"));
        view.select(entry("Star"));

        assert_eq!(view.drawer(), &DrawerState::Open(entry("Star")));
        assert_eq!(view.selection().selected(), Some(&entry("Star")));
    }
}
