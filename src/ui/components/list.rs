//! Icon list component renderer.
//!
//! Renders group header rows and icon rows in three columns: glyph, name and
//! code points. The cursor row gets the selection colors across the full
//! width; the selected icon is marked with `●`.

use crate::ui::helpers::{self, clip, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, DisplayRow};

/// Width of the glyph column including the selection marker.
const GLYPH_COLUMN: usize = 6;
/// Width of the name column.
const NAME_COLUMN: usize = 34;

/// Renders the bold column labels at `row`.
pub fn render_list_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<GLYPH_COLUMN$}{:<NAME_COLUMN$}{}", "", "NAME", "CODE POINTS");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every row in order.
///
/// Group rows print a rule with the label and entry count. Item rows print
/// the glyph, then the name with the query match highlighted, then the code
/// points.
/// The cursor row gets the selection background, and the selected entry
/// gets a `●` marker.
///
/// # Parameters
///
/// * `row` - First row to draw on (1-indexed)
/// * `rows` - Windowed display rows from the view model
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The row after the last one drawn (`row + rows.len()`).
///
/// # Layout
///
/// ```text
/// ── H (2) ────────────────────────
///  ● ⌂  Home        U+2302
///    ⌂  House       U+2302
/// ```
pub fn render_list_rows(row: usize, rows: &[DisplayRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for display_row in rows {
        current_row = match display_row {
            DisplayRow::Group { label, count } => {
                render_group_row(current_row, label, *count, theme, cols)
            }
            DisplayRow::Item(item) => render_item_row(current_row, item, theme, cols),
        };
    }
    current_row
}

fn render_group_row(row: usize, label: &str, count: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let text = clip(&format!("── {label} ({count}) "), cols);
    let len = text.chars().count();

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.group_label_fg));
    print!("{text}");
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "─".repeat(cols.saturating_sub(len)));
    print!("{}", Theme::reset());
    row + 1
}

fn render_item_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base = if item.is_cursor {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    print!("{base}");
    print!("{}", if item.is_selected { " ● " } else { "   " });

    if !item.is_cursor {
        print!("{}", Theme::fg(&theme.colors.glyph_fg));
    }
    print!("{}", item.glyph);
    pad(GLYPH_COLUMN.saturating_sub(3 + item.glyph.chars().count()));
    print!("{base}");

    helpers::render_highlighted_text(&item.name, item.highlight, theme, &base, item.is_cursor);
    let name_len = item.name.chars().count();
    pad(NAME_COLUMN.saturating_sub(name_len));

    if !item.is_cursor {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.code_points);

    let used = GLYPH_COLUMN + NAME_COLUMN.max(name_len) + item.code_points.chars().count();
    pad(cols.saturating_sub(used));
    print!("{}", Theme::reset());
    row + 1
}
