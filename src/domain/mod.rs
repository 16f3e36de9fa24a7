//! Domain layer for the Zicons plugin.
//!
//! Core types independent of Zellij-specific APIs: the icon model and the
//! error type shared by every layer.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`icon`]: Icon entry and glyph model

pub mod error;
pub mod icon;

pub use error::{Result, ZiconsError};
pub use icon::{Glyph, IconEntry};
