//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: page tabs and title bar
//! - [`search`]: search input box
//! - [`list`]: grouped icon rows
//! - [`empty`]: message shown when nothing is listed
//! - [`drawer`]: snippets for the open icon
//! - [`footer`]: keybinding hints or the current notice
//!
//! # Layout
//!
//! ```text
//! [Tabs]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, optional]
//! [Column labels]
//! [Rows or empty state]
//! [Drawer - optional]
//! [Border]
//! [Footer]
//! ```

mod drawer;
mod empty;
mod footer;
mod header;
mod list;
mod search;

use crate::app::DRAWER_HEIGHT;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws the full screen for `vm`.
///
/// ```text
/// [Tabs]
/// [Header]
/// [Search bar]        (search mode only)
/// [Column labels]
/// [Rows | empty state]
/// [Blank padding]
/// [Drawer]            (when the page shows one)
/// [Footer | notice]
/// ```
///
/// # Parameters
///
/// * `vm` - View model computed for this frame
/// * `theme` - Theme of the active page, or the configured override
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 1;

    current_row = header::render_tabs(current_row, &vm.header, theme, cols);
    current_row = header::render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = search::render_search_bar(current_row, search, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        empty::render_empty_state(current_row, empty, theme, cols);
    } else {
        current_row = list::render_list_headers(current_row, theme);
        list::render_list_rows(current_row, &vm.rows, theme, cols);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);

    if let Some(drawer) = &vm.drawer {
        let drawer_row = border_row.saturating_sub(DRAWER_HEIGHT);
        drawer::render_drawer(drawer_row, drawer, theme, cols, DRAWER_HEIGHT);
    }

    render_border(border_row, &theme.colors.border, cols);
    footer::render_footer(footer_row, &vm.footer, vm.notice.as_ref(), theme, cols);
}
