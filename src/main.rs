//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Zicons library and the Zellij plugin
//! system: it maps Zellij events to library events, runs the returned
//! actions and prints the rendered frame.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, build `AppState`
//! 2. **Subscribe**: `Key`, `Timer` and `PermissionRequestResult`
//! 3. **Permissions granted**: reload the catalog when it lives on the host
//! 4. **Update / Pipe**: translate, delegate to `handle_event`, run actions
//! 5. **Render**: flush queued OSC 52 sequences, then draw
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Down`: move down
//! - `Ctrl+p` / `Up`: move up
//! - `Tab` / `Shift+Tab`: next / previous page
//!
//! Normal mode and search results:
//! - `j` / `k`: move down / up
//! - `Enter`: open details, follow the route or copy the name
//! - `y` `g` `u` `h` `c` `x` `i`: copy name, glyph, unicode escape, HTML
//!   entity, CSS content, JSX or import line
//! - `/`: search (or back to the query from the results)
//! - `Esc`: close the drawer, clear the query, leave search
//! - `q`: close the plugin (normal mode)
//!
//! While typing a query every printable key is text; `Enter` moves to the
//! results.
//!
//! # Routes
//!
//! `zellij pipe --name zicons -- /collection/Home` opens the detail drawer
//! for `Home`.

#![allow(clippy::multiple_crate_versions)]

use chrono::Utc;
use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zicons::app::AppState;
use zicons::catalog::ROUTE_PREFIX;
use zicons::clipboard::{self, Clipboard, SnippetKind};
use zicons::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Pipe name the plugin listens on.
const PIPE_NAME: &str = "zicons";

struct State {
    app: AppState,
    config: Config,
    clipboard: Box<dyn Clipboard>,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: zicons::initialize(&config),
            clipboard: config.clipboard.build(),
            config,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zicons::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = zicons::initialize(&config);
        self.clipboard = config.clipboard.build();

        let mut permissions = vec![PermissionType::ReadCliPipes];
        if config.reads_host_files() {
            permissions.push(PermissionType::FullHdAccess);
        }
        request_permission(&permissions);

        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        self.config = config;
        tracing::debug!(icons = self.app.registry.len(), "plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let span = tracing::debug_span!("plugin_update", event_type = %Self::event_name(&event));
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Tick { now: Utc::now() },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                return self.handle_permission_result(status);
            }
            _ => return false,
        };

        self.process(&our_event)
    }

    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        let span = tracing::debug_span!("plugin_pipe", name = %pipe_message.name);
        let _guard = span.entered();

        if let PipeSource::Cli(ref input_pipe_id) = pipe_message.source {
            unblock_cli_pipe_input(input_pipe_id);
        }

        match Self::route_from_pipe(&pipe_message) {
            Some(route) => self.process(&Event::Navigate(route)),
            None => {
                tracing::debug!("ignoring pipe message without a route");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        for sequence in self.clipboard.take_output() {
            print!("{sequence}");
        }
        zicons::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs `event` through the handler and executes the resulting actions.
    fn process(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                let mut render = should_render;
                for action in actions {
                    render |= self.execute_action(action);
                }
                render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Returns whether the action changed anything on screen.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) -> bool {
        match action {
            Action::CloseFocus => {
                hide_self();
                false
            }
            Action::CopyToClipboard { payload } => {
                let outcome = clipboard::copy(self.clipboard.as_mut(), &payload);
                self.process(&Event::from(outcome))
            }
            Action::ScheduleTick { seconds } => {
                set_timeout(seconds);
                false
            }
        }
    }

    fn handle_permission_result(&mut self, status: PermissionStatus) -> bool {
        match status {
            PermissionStatus::Granted if self.config.reads_host_files() => {
                tracing::debug!("permissions granted, reloading host files");
                self.app = zicons::initialize(&self.config);
                true
            }
            PermissionStatus::Granted => false,
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied, routes from zellij pipe are unavailable");
                false
            }
        }
    }

    /// Route in the payload, or in a `route` argument.
    fn route_from_pipe(message: &PipeMessage) -> Option<String> {
        let payload = message
            .payload
            .as_deref()
            .map(str::trim)
            .filter(|p| p.starts_with(ROUTE_PREFIX));
        if message.name != PIPE_NAME && payload.is_none() {
            return None;
        }

        payload
            .map(String::from)
            .or_else(|| message.args.get("route").cloned())
    }

    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let typing = self.app.input_mode.is_typing();

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevPage,
            BareKey::Tab => Event::NextPage,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Enter if typing => Event::FocusResults,
            BareKey::Enter => Event::Activate,
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::Escape,
            },
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if typing => Event::Char(c),
            BareKey::Char('j') => Event::KeyDown,
            BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Char('q') if self.app.input_mode == InputMode::Normal => Event::CloseFocus,
            BareKey::Char(c) => Event::CopySnippet(SnippetKind::from_key(c)?),
            _ => return None,
        })
    }
}
