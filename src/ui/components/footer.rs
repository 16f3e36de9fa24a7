//! Footer: keybinding hints, or the current notice when there is one.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, NoticeInfo};

/// Renders the keybinding hints at `row`, or the notice in its place.
///
/// Error notices use the theme's error color. Returns `row + 1`.
pub fn render_footer(
    row: usize,
    footer: &FooterInfo,
    notice: Option<&NoticeInfo>,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    match notice {
        Some(notice) => {
            let color = if notice.is_error {
                &theme.colors.error_fg
            } else {
                &theme.colors.notice_fg
            };
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(color));
            print_centered(&notice.message, cols);
        }
        None => {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print_centered(&footer.keybindings, cols);
        }
    }

    print!("{}", Theme::reset());
    row + 1
}
