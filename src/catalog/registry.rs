//! The bounded, ordered, immutable icon catalog.
//!
//! [`IconRegistry::load`] is the only place a source is enumerated. It replaces
//! any reflection over a library's exports with an explicit name → entry table
//! built once, in source order, with three rules applied in sequence:
//!
//! 1. Symbols listed in [`EXCLUDED_SYMBOLS`] are dropped (non-icon exports).
//! 2. A name already seen is dropped, keeping the first occurrence.
//! 3. The result is truncated to the configured cap.

use super::source::IconSource;
use super::ROUTE_PREFIX;
use crate::domain::{IconEntry, Result, ZiconsError};
use std::collections::HashMap;

/// Default maximum number of entries kept from a source.
pub const DEFAULT_CAP: usize = 800;

/// Exported symbols that are library plumbing rather than icons.
pub const EXCLUDED_SYMBOLS: &[&str] = &["createLucideIcon", "default", "icons"];

/// Immutable, capped catalog of icon entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRegistry {
    entries: Vec<IconEntry>,
    index: HashMap<String, usize>,
    cap: usize,
    source: String,
}

impl IconRegistry {
    /// Materializes the catalog from `source`, keeping at most `cap` entries.
    ///
    /// Repeated calls with the same source and cap return equal registries.
    ///
    /// # Errors
    ///
    /// Propagates the source's enumeration error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zicons::catalog::{BuiltinGlyphs, IconRegistry};
    ///
    /// let registry = IconRegistry::load(&BuiltinGlyphs, 10)?;
    /// assert_eq!(registry.len(), 10);
    /// # Ok::<(), zicons::ZiconsError>(())
    /// ```
    pub fn load(source: &dyn IconSource, cap: usize) -> Result<Self> {
        let _span = tracing::debug_span!("registry_load", source = %source.describe(), cap).entered();

        let symbols = source.icons()?;
        let exported = symbols.len();

        let mut entries = Vec::with_capacity(exported.min(cap));
        let mut index = HashMap::with_capacity(exported.min(cap));

        for (name, glyph) in symbols {
            if entries.len() == cap {
                break;
            }
            if EXCLUDED_SYMBOLS.contains(&name.as_str()) {
                tracing::trace!(symbol = %name, "skipping non-icon export");
                continue;
            }
            if index.contains_key(&name) {
                tracing::debug!(name = %name, "duplicate icon name, keeping first");
                continue;
            }
            index.insert(name.clone(), entries.len());
            entries.push(IconEntry::new(name, glyph));
        }

        tracing::debug!(exported, loaded = entries.len(), "icon registry loaded");

        Ok(Self {
            entries,
            index,
            cap,
            source: source.describe(),
        })
    }

    /// A registry with no entries.
    #[must_use]
    pub fn empty(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            cap,
            source: "empty".to_string(),
        }
    }

    /// Looks up an entry by its exact name.
    ///
    /// # Errors
    ///
    /// Returns [`ZiconsError::NotFound`] if no entry has that name.
    pub fn get(&self, name: &str) -> Result<&IconEntry> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| ZiconsError::NotFound(name.to_string()))
    }

    /// Resolves an external `/collection/<name>` reference.
    ///
    /// A trailing slash is tolerated. Paths of any other shape are treated the
    /// same as unknown names.
    ///
    /// # Errors
    ///
    /// Returns [`ZiconsError::NotFound`] carrying the requested name (or the
    /// whole path when it does not have the route shape).
    pub fn resolve_route(&self, path: &str) -> Result<&IconEntry> {
        let trimmed = path.trim();
        let name = trimmed
            .strip_prefix(ROUTE_PREFIX)
            .map(|rest| rest.trim_end_matches('/'))
            .filter(|rest| !rest.is_empty() && !rest.contains('/'))
            .ok_or_else(|| ZiconsError::NotFound(trimmed.to_string()))?;
        self.get(name)
    }

    /// Registry position of `name`, used to resolve fixed slice membership.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    #[must_use]
    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Description of the source the registry was loaded from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BuiltinGlyphs;
    use crate::domain::Glyph;

    struct FakeSource(Vec<(&'static str, &'static str)>);

    impl IconSource for FakeSource {
        fn describe(&self) -> String {
            "fake".to_string()
        }

        fn icons(&self) -> Result<Vec<(String, Glyph)>> {
            Ok(self
                .0
                .iter()
                .map(|(n, g)| ((*n).to_string(), Glyph::new(*g)))
                .collect())
        }
    }

    struct BrokenSource;

    impl IconSource for BrokenSource {
        fn describe(&self) -> String {
            "broken".to_string()
        }

        fn icons(&self) -> Result<Vec<(String, Glyph)>> {
            Err(ZiconsError::Catalog("unreadable".to_string()))
        }
    }

    fn names(registry: &IconRegistry) -> Vec<&str> {
        registry.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn preserves_source_order() {
        let source = FakeSource(vec![("Star", "★"), ("Home", "⌂"), ("Heart", "♥")]);
        let registry = IconRegistry::load(&source, DEFAULT_CAP).unwrap();
        assert_eq!(names(&registry), vec!["Star", "Home", "Heart"]);
    }

    #[test]
    fn excludes_non_icon_exports() {
        let source = FakeSource(vec![
            ("createLucideIcon", "?"),
            ("Home", "⌂"),
            ("default", "?"),
            ("icons", "?"),
        ]);
        let registry = IconRegistry::load(&source, DEFAULT_CAP).unwrap();
        assert_eq!(names(&registry), vec!["Home"]);
    }

    #[test]
    fn truncates_to_cap_after_exclusion() {
        let source = FakeSource(vec![("default", "?"), ("A", "a"), ("B", "b"), ("C", "c")]);
        let registry = IconRegistry::load(&source, 2).unwrap();
        assert_eq!(names(&registry), vec!["A", "B"]);
        assert_eq!(registry.cap(), 2);
    }

    #[test]
    fn keeps_first_of_duplicate_names() {
        let source = FakeSource(vec![("Star", "★"), ("Star", "☆")]);
        let registry = IconRegistry::load(&source, DEFAULT_CAP).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Star").unwrap().glyph, Glyph::new("★"));
    }

    #[test]
    fn load_is_idempotent() {
        let first = IconRegistry::load(&BuiltinGlyphs, 50).unwrap();
        let second = IconRegistry::load(&BuiltinGlyphs, 50).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_cap_yields_empty_registry() {
        let registry = IconRegistry::load(&BuiltinGlyphs, 0).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn get_unknown_name_is_not_found() {
        let registry = IconRegistry::load(&BuiltinGlyphs, DEFAULT_CAP).unwrap();
        let err = registry.get("Nonexistent").unwrap_err();
        assert!(matches!(err, ZiconsError::NotFound(ref n) if n == "Nonexistent"));
    }

    #[test]
    fn get_is_case_sensitive() {
        let registry = IconRegistry::load(&BuiltinGlyphs, DEFAULT_CAP).unwrap();
        assert!(registry.get("Home").is_ok());
        assert!(registry.get("home").is_err());
    }

    #[test]
    fn resolves_collection_routes() {
        let registry = IconRegistry::load(&BuiltinGlyphs, DEFAULT_CAP).unwrap();
        assert_eq!(registry.resolve_route("/collection/Home").unwrap().name, "Home");
        assert_eq!(registry.resolve_route("/collection/Home/").unwrap().name, "Home");
        assert!(registry.resolve_route("/collection/Nonexistent").is_err());
        assert!(registry.resolve_route("/collection/").is_err());
        assert!(registry.resolve_route("/other/Home").is_err());
    }

    #[test]
    fn source_errors_propagate() {
        assert!(matches!(
            IconRegistry::load(&BrokenSource, DEFAULT_CAP),
            Err(ZiconsError::Catalog(_))
        ));
    }
}
