//! Zicons: a Zellij plugin for browsing and copying icon glyphs.
//!
//! Zicons loads a bounded catalog of named glyphs and presents it through
//! nine themed pages. Every page shares one query, one selection and one
//! clipboard:
//! - Literal, case-insensitive name search
//! - Alphabetical, fixed-slice and featured/secondary/standard grouping
//! - A detail drawer with copyable snippets (name, glyph, CSS, JSX, import)
//! - `/collection/<name>` routes from configuration or `zellij pipe`
//! - OSC 52 clipboard writes with transient notices

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, pages, selection                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Search Layer  │   │ Clipboard     │
//! │ (ui/)         │   │ (search/)     │   │ (clipboard/)  │
//! │ - Rendering   │   │ - Filtering   │   │ - OSC 52      │
//! │ - Theming     │   │ - Grouping    │   │ - Snippets    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog, Domain & Infrastructure                   │
//! │  - Icon registry and sources (catalog/)             │
//! │  - Icon model and errors (domain/)                  │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry spans exported to an OTLP file     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zicons.wasm" {
//!         page "showcase"
//!         cap "800"
//!         catalog_file "~/icons/glyphs.toml"
//!         clipboard "osc52"
//!         route "/collection/Home"
//!         notice_secs "3"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use zicons::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for event in [Event::SearchMode, Event::Char('h'), Event::FocusResults, Event::Activate] {
//!     let (_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert!(state.detail.is_open());
//! # Ok::<(), zicons::ZiconsError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod search;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use clipboard::ClipboardMode;
pub use domain::{IconEntry, Result, ZiconsError};
pub use ui::Theme;

use crate::app::pages::{self, DETAIL_PAGE};
use crate::catalog::DEFAULT_CAP;
use crate::clipboard::Notices;
use std::collections::BTreeMap;

/// Seconds a notice stays visible unless configured otherwise.
pub const DEFAULT_NOTICE_SECS: u32 = 3;

/// Plugin configuration parsed from Zellij's KDL plugin block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Id of the page shown first. Default: `catalog`.
    pub page: String,

    /// Registry capacity. Default: 800.
    pub cap: usize,

    /// TOML or JSON glyph file. The built-in table is used when unset.
    pub catalog_file: Option<String>,

    /// Built-in theme applied to every page instead of the page's own.
    pub theme_name: Option<String>,

    /// Custom TOML theme. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    pub clipboard: ClipboardMode,

    /// Detail route opened at startup, e.g. `/collection/Home`.
    pub route: Option<String>,

    pub notice_secs: u32,

    /// `EnvFilter` directive. Default: `info`.
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page: DETAIL_PAGE.to_string(),
            cap: DEFAULT_CAP,
            catalog_file: None,
            theme_name: None,
            theme_file: None,
            clipboard: ClipboardMode::default(),
            route: None,
            notice_secs: DEFAULT_NOTICE_SECS,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses Zellij's configuration map.
    ///
    /// Missing, blank or unparseable values keep their defaults; a `cap` or
    /// `notice_secs` of zero counts as unparseable.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zicons::{ClipboardMode, Config};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page".to_string(), "bauhaus".to_string());
    /// map.insert("cap".to_string(), "lots".to_string());
    /// map.insert("clipboard".to_string(), "off".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page, "bauhaus");
    /// assert_eq!(config.cap, 800);
    /// assert_eq!(config.clipboard, ClipboardMode::Off);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            page: text("page").unwrap_or(defaults.page),
            cap: text("cap")
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|&cap| cap > 0)
                .unwrap_or(defaults.cap),
            catalog_file: text("catalog_file"),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            clipboard: text("clipboard")
                .and_then(|v| ClipboardMode::parse(&v))
                .unwrap_or(defaults.clipboard),
            route: text("route"),
            notice_secs: text("notice_secs")
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(defaults.notice_secs),
            trace_level: text("trace_level").unwrap_or(defaults.trace_level),
        }
    }

    /// Whether any configured path needs host filesystem access.
    #[must_use]
    pub const fn reads_host_files(&self) -> bool {
        self.catalog_file.is_some() || self.theme_file.is_some()
    }
}

/// Builds the initial state from configuration.
///
/// Loads the registry (falling back to the built-in table), switches to the
/// configured page, installs the theme override and opens the configured
/// route. Nothing here fails; bad values are logged and skipped.
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize", page = %config.page, cap = config.cap).entered();

    let registry = catalog::load_registry(config.catalog_file.as_deref(), config.cap);
    tracing::debug!(icons = registry.len(), source = %registry.source(), "registry loaded");

    let mut state = AppState::new(registry);
    state.notices = Notices::new(config.notice_secs);
    state.theme_override = theme_override(config);

    match pages::position(&state.pages, &config.page) {
        Some(index) => state.switch_page(index),
        None => tracing::warn!(page = %config.page, "unknown page, using catalog"),
    }

    if let Some(route) = &config.route {
        if !state.open_route(route) {
            tracing::debug!(route = %route, "initial route did not resolve");
        }
    }

    state
}

fn theme_override(config: &Config) -> Option<Theme> {
    if let Some(path) = &config.theme_file {
        match Theme::from_file(infrastructure::expand_tilde(path)) {
            Ok(theme) => return Some(theme),
            Err(e) => tracing::warn!(theme_file = %path, error = %e, "failed to load theme file"),
        }
    }

    let name = config.theme_name.as_ref()?;
    let theme = Theme::from_name(name);
    if theme.is_none() {
        tracing::warn!(theme = %name, "unknown theme, using page themes");
    }
    theme
}
