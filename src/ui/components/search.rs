//! Search bar component renderer.
//!
//! A three-line box holding the query. While typing, a block cursor follows
//! the query text.

use crate::ui::helpers::{clip, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin on each side of the box.
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the search box starting at `row`. Returns `row + 3`.
///
/// The cursor block is only drawn while the query is being typed.
///
/// ```text
/// ┌──────────────────┐
/// │ Search: arrow█   │
/// └──────────────────┘
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(row, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let caret = if search.is_focused { "█" } else { "" };
    let text = clip(&format!(" Search: {}{caret}", search.query), inner_width);
    let text_len = text.chars().count();

    position_cursor(row + 1, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{border}│");
    if search.is_focused {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{text}");
    pad(inner_width.saturating_sub(text_len));
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 2, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 3
}
