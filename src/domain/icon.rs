//! Icon domain model.
//!
//! An [`IconEntry`] pairs a unique name with a [`Glyph`], the capability that
//! renders it. In a terminal the renderer is simply the text to print, so a
//! glyph is a short string of one or more Unicode scalar values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Renderable text for a single icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Glyph(String);

impl Glyph {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unicode code points of the glyph, in order.
    ///
    /// ```
    /// use zicons::domain::Glyph;
    ///
    /// assert_eq!(Glyph::new("★").code_points(), vec![0x2605]);
    /// ```
    #[must_use]
    pub fn code_points(&self) -> Vec<u32> {
        self.0.chars().map(u32::from).collect()
    }

    /// Code points formatted as `U+XXXX`, space separated.
    #[must_use]
    pub fn code_point_label(&self) -> String {
        self.code_points()
            .iter()
            .map(|cp| format!("U+{cp:04X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One named, renderable catalog item.
///
/// Entries are immutable once the registry is loaded. Equality is by value, and
/// names are unique within a registry, so comparing names is equivalent to
/// comparing identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconEntry {
    pub name: String,
    pub glyph: Glyph,
}

impl IconEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, glyph: Glyph) -> Self {
        Self {
            name: name.into(),
            glyph,
        }
    }

    /// External route addressing this entry's detail view.
    ///
    /// ```
    /// use zicons::domain::{Glyph, IconEntry};
    ///
    /// let entry = IconEntry::new("Home", Glyph::new("⌂"));
    /// assert_eq!(entry.route(), "/collection/Home");
    /// ```
    #[must_use]
    pub fn route(&self) -> String {
        format!("{}{}", crate::catalog::ROUTE_PREFIX, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_point_label_joins_multi_char_glyphs() {
        let glyph = Glyph::new("✔\u{fe0f}");
        assert_eq!(glyph.code_point_label(), "U+2714 U+FE0F");
    }

    #[test]
    fn glyph_serializes_as_plain_string() {
        let entry = IconEntry::new("Star", Glyph::new("★"));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"Star","glyph":"★"}"#);
    }
}
