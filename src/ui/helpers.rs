//! Shared rendering utilities.
//!
//! Text positions here are character indices, never byte offsets.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `count` spaces.
pub fn pad(count: usize) {
    print!("{}", " ".repeat(count));
}

/// Prints `text` centred in `cols`, filling the rest of the line.
pub fn print_centered(text: &str, cols: usize) {
    let len = text.chars().count().min(cols);
    let left = cols.saturating_sub(len) / 2;
    pad(left);
    print!("{}", clip(text, cols));
    pad(cols.saturating_sub(left + len));
}

/// First `max` characters of `text`.
#[must_use]
pub fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Renders `text` with the `(start, end)` character range highlighted.
///
/// Highlighting is skipped on the cursor row so the selection colors stay
/// intact; `restore` is re-applied after the highlighted section otherwise.
pub fn render_highlighted_text(
    text: &str,
    range: Option<(usize, usize)>,
    theme: &Theme,
    restore: &str,
    is_cursor: bool,
) {
    let Some((start, end)) = range.filter(|_| !is_cursor) else {
        print!("{text}");
        return;
    };

    let chars: Vec<char> = text.chars().collect();
    let start = start.min(chars.len());
    let end = end.clamp(start, chars.len());

    let before: String = chars[..start].iter().collect();
    let matched: String = chars[start..end].iter().collect();
    let after: String = chars[end..].iter().collect();

    print!("{before}");
    print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
    print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
    print!("{matched}");
    print!("{}", Theme::reset());
    print!("{restore}");
    print!("{after}");
}
