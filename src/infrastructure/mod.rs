//! Sandbox environment helpers.

pub mod paths;

pub use paths::{display_path, expand_tilde, get_data_dir};
