//! Icon catalog layer.
//!
//! Loads the bounded, ordered catalog that every page browses. The catalog is
//! built once per plugin instance and never mutated afterwards.
//!
//! # Modules
//!
//! - `source`: [`IconSource`] trait and the file-backed implementation
//! - `builtin`: static glyph table used when no catalog file is configured
//! - `registry`: [`IconRegistry`] load, lookup and route resolution

mod builtin;
mod registry;
mod source;

pub use builtin::BuiltinGlyphs;
pub use registry::{IconRegistry, DEFAULT_CAP, EXCLUDED_SYMBOLS};
pub use source::{GlyphFile, IconSource};

/// Path prefix of externally addressable detail routes.
pub const ROUTE_PREFIX: &str = "/collection/";

/// Loads the registry from the configured catalog file, falling back to the
/// built-in table when none is configured or the file cannot be used.
#[must_use]
pub fn load_registry(catalog_file: Option<&str>, cap: usize) -> IconRegistry {
    if let Some(path) = catalog_file {
        let file = GlyphFile::new(crate::infrastructure::expand_tilde(path));
        match IconRegistry::load(&file, cap) {
            Ok(registry) if !registry.is_empty() => return registry,
            Ok(_) => tracing::warn!(path = %path, "catalog file has no icons, using builtin glyphs"),
            Err(e) => tracing::warn!(path = %path, error = %e, "failed to load catalog file, using builtin glyphs"),
        }
    }

    IconRegistry::load(&BuiltinGlyphs, cap).unwrap_or_else(|e| {
        tracing::error!(error = %e, "builtin glyph table failed to load");
        IconRegistry::empty(cap)
    })
}
