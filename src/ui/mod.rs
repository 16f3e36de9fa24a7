//! Terminal rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! - [`viewmodel`]: renderable snapshot of the state
//! - [`renderer`]: entry point
//! - [`components`]: per-region renderers
//! - [`helpers`]: cursor positioning, padding, match highlighting
//! - [`theme`]: per-page color schemes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DisplayItem, DisplayRow, DrawerInfo, EmptyState, FooterInfo, HeaderInfo, NoticeInfo, PageTab,
    SearchBarInfo, SnippetLine, UIViewModel,
};
