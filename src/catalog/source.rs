//! Icon source abstraction.
//!
//! This module defines the [`IconSource`] trait, the read-only collaborator the
//! registry enumerates exactly once at load time. Sources may expose symbols
//! that are not icons (factory or utility exports); the registry filters those.
//!
//! # Implementations
//!
//! - [`BuiltinGlyphs`](super::BuiltinGlyphs): static table compiled into the plugin
//! - [`GlyphFile`]: user-supplied TOML or JSON file
//!
//! # File Format
//!
//! ```toml
//! [[icons]]
//! name = "Home"
//! glyph = "⌂"
//!
//! [[icons]]
//! name = "Star"
//! glyph = "★"
//! ```
//!
//! The JSON equivalent is `{"icons": [{"name": "Home", "glyph": "⌂"}]}`.

use crate::domain::{Glyph, IconEntry, Result, ZiconsError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Enumerable, read-only catalog of named glyphs.
pub trait IconSource {
    /// Short human-readable description for logs and the header.
    fn describe(&self) -> String;

    /// Enumerates every exported symbol in source order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed.
    fn icons(&self) -> Result<Vec<(String, Glyph)>>;
}

/// Entries already in memory, enumerated in vector order.
impl IconSource for Vec<IconEntry> {
    fn describe(&self) -> String {
        format!("{} in-memory entries", self.len())
    }

    fn icons(&self) -> Result<Vec<(String, Glyph)>> {
        Ok(self
            .iter()
            .map(|entry| (entry.name.clone(), entry.glyph.clone()))
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct GlyphFileData {
    #[serde(default)]
    icons: Vec<GlyphRecord>,
}

#[derive(Debug, Deserialize)]
struct GlyphRecord {
    name: String,
    glyph: String,
}

/// Icon source read from a TOML or JSON file.
///
/// The format is chosen by extension: `.json` is parsed as JSON, anything else
/// as TOML. The file is read on every call to [`IconSource::icons`], which the
/// registry does once.
#[derive(Debug, Clone)]
pub struct GlyphFile {
    path: PathBuf,
}

impl GlyphFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl IconSource for GlyphFile {
    fn describe(&self) -> String {
        crate::infrastructure::display_path(&self.path.to_string_lossy())
    }

    fn icons(&self) -> Result<Vec<(String, Glyph)>> {
        let contents = std::fs::read_to_string(&self.path)?;

        let data: GlyphFileData = if self.is_json() {
            serde_json::from_str(&contents)
                .map_err(|e| ZiconsError::Catalog(format!("invalid glyph JSON: {e}")))?
        } else {
            toml::from_str(&contents)
                .map_err(|e| ZiconsError::Catalog(format!("invalid glyph TOML: {e}")))?
        };

        tracing::debug!(path = ?self.path, records = data.icons.len(), "glyph file parsed");

        Ok(data
            .icons
            .into_iter()
            .filter(|record| !record.glyph.is_empty())
            .map(|record| (record.name, Glyph::new(record.glyph)))
            .collect())
    }
}
