//! Copyable representations of an icon.

use crate::domain::IconEntry;

/// Package named in generated import lines.
pub const IMPORT_PACKAGE: &str = "lucide-react";

/// Formats offered in the detail drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetKind {
    Name,
    Glyph,
    /// Rust/JS style escape, e.g. `\u{2302}`.
    Unicode,
    /// Numeric character reference, e.g. `&#x2302;`.
    HtmlEntity,
    /// CSS `content` value, e.g. `"\2302"`.
    Css,
    Jsx,
    Import,
}

impl SnippetKind {
    /// Every kind in drawer order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Glyph,
        Self::Unicode,
        Self::HtmlEntity,
        Self::Css,
        Self::Jsx,
        Self::Import,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Glyph => "Glyph",
            Self::Unicode => "Unicode",
            Self::HtmlEntity => "HTML",
            Self::Css => "CSS",
            Self::Jsx => "JSX",
            Self::Import => "Import",
        }
    }

    /// Drawer shortcut key.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Name => 'y',
            Self::Glyph => 'g',
            Self::Unicode => 'u',
            Self::HtmlEntity => 'h',
            Self::Css => 'c',
            Self::Jsx => 'x',
            Self::Import => 'i',
        }
    }

    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Payload of this kind for `entry`.
    #[must_use]
    pub fn render(self, entry: &IconEntry) -> String {
        let points = entry.glyph.code_points();
        match self {
            Self::Name => entry.name.clone(),
            Self::Glyph => entry.glyph.as_str().to_string(),
            Self::Unicode => points.iter().map(|cp| format!("\\u{{{cp:04X}}}")).collect(),
            Self::HtmlEntity => points.iter().map(|cp| format!("&#x{cp:X};")).collect(),
            Self::Css => {
                let body: String = points.iter().map(|cp| format!("\\{cp:X}")).collect();
                format!("\"{body}\"")
            }
            Self::Jsx => format!("<{} />", entry.name),
            Self::Import => format!("import {{ {} }} from '{IMPORT_PACKAGE}';", entry.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Glyph;

    fn home() -> IconEntry {
        IconEntry::new("Home", Glyph::new("\u{2302}"))
    }

    #[test]
    fn renders_every_kind() {
        let entry = home();
        assert_eq!(SnippetKind::Name.render(&entry), "Home");
        assert_eq!(SnippetKind::Glyph.render(&entry), "\u{2302}");
        assert_eq!(SnippetKind::Unicode.render(&entry), "\\u{2302}");
        assert_eq!(SnippetKind::HtmlEntity.render(&entry), "&#x2302;");
        assert_eq!(SnippetKind::Css.render(&entry), "\"\\2302\"");
        assert_eq!(SnippetKind::Jsx.render(&entry), "<Home />");
        assert_eq!(
            SnippetKind::Import.render(&entry),
            "import { Home } from 'lucide-react';"
        );
    }

    #[test]
    fn multi_code_point_glyphs_expand_each_point() {
        let entry = IconEntry::new("Flag", Glyph::new("\u{2691}\u{FE0F}"));
        assert_eq!(SnippetKind::Unicode.render(&entry), "\\u{2691}\\u{FE0F}");
        assert_eq!(SnippetKind::HtmlEntity.render(&entry), "&#x2691;&#xFE0F;");
    }

    #[test]
    fn keys_are_unique_and_round_trip() {
        for kind in SnippetKind::ALL {
            assert_eq!(SnippetKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(SnippetKind::from_key('z'), None);
    }
}
