//! Page tabs and title bar.

use crate::ui::helpers::{clip, pad, position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the page tab strip at `row`, active page highlighted.
///
/// # Parameters
///
/// * `row` - Row to draw on (1-indexed)
/// * `header` - Tab labels and the active index
/// * `theme` - Theme of the active page
/// * `cols` - Terminal width; tabs past it are clipped
///
/// # Returns
///
/// The next free row (`row + 1`).
///
/// # Layout
///
/// ```text
///  catalog  [broadsheet]  showcase  daily ...
/// ```
pub fn render_tabs(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 0;
    for tab in &header.tabs {
        let label = format!(" {} ", tab.label);
        let width = label.chars().count();
        if used + width > cols {
            break;
        }
        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{label}");
        print!("{}", Theme::reset());
        used += width;
    }
    pad(cols.saturating_sub(used));
    row + 1
}

/// Renders the centred bold title at `row`. Returns the next free row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print_centered(&clip(&header.title, cols), cols);
    print!("{}", Theme::reset());
    row + 1
}
