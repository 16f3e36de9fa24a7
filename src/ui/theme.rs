//! Theme management and ANSI escape sequence generation.
//!
//! Each page ships with its own built-in theme; a configured `theme` or
//! `theme_file` replaces it on every page.
//!
//! # Built-in Themes
//!
//! `catalog` (default), `broadsheet`, `showcase`, `daily`, `bauhaus`, `candy`,
//! `darkroom`, `ink`, `terminal`.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#1c1917"
//! header_bg = "#fbfbf8"          # optional
//! selection_fg = "#fbfbf8"
//! selection_bg = "#1c1917"
//! text_normal = "#1c1917"
//! text_dim = "#78716c"
//! border = "#d6d3d1"
//! search_bar_border = "#b91c1c"
//! match_highlight_fg = "#fbfbf8"
//! match_highlight_bg = "#b91c1c"
//! empty_state_fg = "#b91c1c"
//! group_label_fg = "#b91c1c"
//! glyph_fg = "#1c1917"
//! notice_fg = "#15803d"
//! error_fg = "#b91c1c"
//! ```

use crate::domain::{Result, ZiconsError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when nothing else resolves.
pub const DEFAULT_THEME: &str = "catalog";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex color strings (e.g. `"#cdd6f4"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Group header labels.
    pub group_label_fg: String,
    /// Icon glyphs in the list and drawer.
    pub glyph_fg: String,
    /// Informational notices.
    pub notice_fg: String,
    /// Error notices and the not-found drawer.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catalog" => include_str!("../../themes/catalog.toml"),
            "broadsheet" => include_str!("../../themes/broadsheet.toml"),
            "showcase" => include_str!("../../themes/showcase.toml"),
            "daily" => include_str!("../../themes/daily.toml"),
            "bauhaus" => include_str!("../../themes/bauhaus.toml"),
            "candy" => include_str!("../../themes/candy.toml"),
            "darkroom" => include_str!("../../themes/darkroom.toml"),
            "ink" => include_str!("../../themes/ink.toml"),
            "terminal" => include_str!("../../themes/terminal.toml"),
            _ => return None,
        };

        match toml::from_str(toml_str) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!(theme = %name, error = %e, "built-in theme failed to parse");
                None
            }
        }
    }

    /// Built-in theme `name`, falling back to [`Theme::default`].
    #[must_use]
    pub fn builtin_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::debug!(theme = %name, "unknown theme, using default");
            Self::default()
        })
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ZiconsError::Io`] if the file cannot be read and
    /// [`ZiconsError::Theme`] if it does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ZiconsError::Theme(format!("invalid theme TOML: {e}")))
    }

    /// Parses `#rrggbb`. Malformed input renders as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The `catalog` theme, or a plain monochrome palette if it fails to load.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::monochrome)
    }
}

impl Theme {
    fn monochrome() -> Self {
        let light = "#e5e5e5".to_string();
        let dark = "#171717".to_string();
        let mid = "#737373".to_string();
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                header_fg: light.clone(),
                header_bg: None,
                selection_fg: dark.clone(),
                selection_bg: light.clone(),
                text_normal: light.clone(),
                text_dim: mid.clone(),
                border: mid.clone(),
                search_bar_border: light.clone(),
                match_highlight_fg: dark,
                match_highlight_bg: light.clone(),
                empty_state_fg: light.clone(),
                group_label_fg: light.clone(),
                glyph_fg: light.clone(),
                notice_fg: light,
                error_fg: mid,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pages;
    use std::io::Write;

    #[test]
    fn every_page_theme_parses() {
        for page in pages::presets() {
            let theme = Theme::from_name(page.theme);
            assert!(theme.is_some(), "theme {} failed to load", page.theme);
            assert_eq!(theme.unwrap().name, page.theme);
        }
    }

    #[test]
    fn unknown_theme_is_none() {
        assert!(Theme::from_name("nope").is_none());
        assert_eq!(Theme::builtin_or_default("nope").name, DEFAULT_THEME);
    }

    #[test]
    fn escapes_use_rgb_channels() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("bogus"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn loads_theme_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        file.write_all(toml::to_string(&theme).unwrap().as_bytes()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded, theme);
    }

    #[test]
    fn malformed_theme_file_is_theme_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(b"name = 1").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(ZiconsError::Theme(_))));
    }
}
