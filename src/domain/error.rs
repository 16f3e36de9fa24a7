//! Error types for the Zicons plugin.
//!
//! This module defines the centralized error type [`ZiconsError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Only two variants are user-facing: [`ZiconsError::NotFound`] for detail lookups
//! and [`ZiconsError::ClipboardWriteFailed`] for clipboard writes. Both are contained
//! at the point they occur and rendered as placeholders or transient notices.

use thiserror::Error;

/// The main error type for Zicons plugin operations.
///
/// # Examples
///
/// ```
/// use zicons::ZiconsError;
///
/// fn lookup() -> Result<(), ZiconsError> {
///     Err(ZiconsError::NotFound("Nonexistent".to_string()))
/// }
///
/// assert_eq!(lookup().unwrap_err().to_string(), "Icon not found: Nonexistent");
/// ```
#[derive(Debug, Error)]
pub enum ZiconsError {
    /// A detail reference (route parameter or registry lookup) matched no entry.
    #[error("Icon not found: {0}")]
    NotFound(String),

    /// The clipboard collaborator rejected the write or is unavailable.
    ///
    /// Never affects catalog, query or selection state.
    #[error("Clipboard write failed: {0}")]
    ClipboardWriteFailed(String),

    /// An icon source could not be enumerated or parsed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or lookup failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Zicons operations.
pub type Result<T> = std::result::Result<T, ZiconsError>;
