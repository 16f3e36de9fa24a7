//! Detail drawer for the open icon.

use crate::ui::helpers::{clip, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DrawerInfo;

/// Width reserved for the `[k] Label` column.
const LABEL_COLUMN: usize = 18;

/// Renders the drawer in the block starting at `row`.
///
/// The block is a titled border, the code points (or the missing-route
/// message), one line per snippet and blank padding up to `height` lines.
///
/// # Parameters
///
/// * `row` - First row of the block (1-indexed)
/// * `drawer` - Title, glyph and snippet lines, or the missing-route message
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `height` - Lines reserved for the block
///
/// # Layout
///
/// ```text
/// ── ⌂ Home ────────────────────────
///   U+2302
///   [y] Name    Home
///   [x] JSX     <Home />
/// ```
pub fn render_drawer(row: usize, drawer: &DrawerInfo, theme: &Theme, cols: usize, height: usize) {
    position_cursor(row, 1);
    let title = clip(&format!("── {} {} ", drawer.glyph, drawer.title), cols);
    let title_len = title.chars().count();
    let title_color = if drawer.is_missing {
        &theme.colors.error_fg
    } else {
        &theme.colors.header_fg
    };
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(title_color));
    print!("{title}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "─".repeat(cols.saturating_sub(title_len)));
    print!("{}", Theme::reset());

    let mut line = row + 1;
    position_cursor(line, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    let sub = if drawer.is_missing {
        "  No icon with that name in this catalog".to_string()
    } else {
        format!("  {}", drawer.code_points)
    };
    let sub = clip(&sub, cols);
    print!("{sub}");
    pad(cols.saturating_sub(sub.chars().count()));
    print!("{}", Theme::reset());
    line += 1;

    for snippet in drawer.snippets.iter().take(height.saturating_sub(2)) {
        position_cursor(line, 1);
        let label = if snippet.key == ' ' {
            format!("    {}", snippet.label)
        } else {
            format!("  [{}] {}", snippet.key, snippet.label)
        };
        let label = clip(&label, LABEL_COLUMN);
        let value = clip(&snippet.value, cols.saturating_sub(LABEL_COLUMN));

        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{label}");
        pad(LABEL_COLUMN.saturating_sub(label.chars().count()));
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{value}");
        pad(cols.saturating_sub(LABEL_COLUMN + value.chars().count()));
        print!("{}", Theme::reset());
        line += 1;
    }

    while line < row + height {
        position_cursor(line, 1);
        pad(cols);
        line += 1;
    }
}
