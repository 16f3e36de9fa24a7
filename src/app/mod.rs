//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (main.rs) and the catalog, search and
//! clipboard layers, with a unidirectional data flow:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Clipboard Outcome ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects emitted by the handler
//! - [`handler`]: event processing
//! - [`modes`]: input mode state machine
//! - [`pages`]: the page presets
//! - [`selection`]: selection and detail drawer
//! - [`state`]: central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod pages;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use pages::{Page, PrimaryAction};
pub use selection::{DetailView, DrawerState, Selection, SelectionController};
pub use state::{AppState, DRAWER_HEIGHT};
