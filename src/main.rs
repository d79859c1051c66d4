//! Zellij plugin wrapper and entry point.
//!
//! Thin layer translating Zellij events into library [`Event`]s and executing
//! the host actions the controller returns.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build the controller
//! 2. **Subscribe**: Register for `Key`, `RunCommandResult` and
//!    `PermissionRequestResult`
//! 3. **Update**: Map keys to events, dispatch, run returned actions
//! 4. **Render**: Print the terminal frame for the current state
//!
//! # Keybindings
//!
//! - Printable characters: type into the search box
//! - `Backspace`: delete the last search character
//! - `Tab`: next category (wraps through "All Categories")
//! - `Ctrl+f`: next pricing tier (wraps through "All Pricing")
//! - `Down`/`Ctrl+n`, `Up`/`Ctrl+p`: move the card cursor
//! - `Enter`: open the selected tool's website
//! - `Ctrl+t`: toggle light/dark theme
//! - `Esc`: clear search and filters, or close the plugin when nothing is set

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use tooldeck::{Action, Config, DynController, Event};

register_plugin!(State);

/// Context key marking commands started to open a website.
const OPEN_URL_CONTEXT: &str = "open_url";

/// Plugin state registered with Zellij.
struct State {
    app: DynController,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: tooldeck::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        tooldeck::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(
            catalog_file = ?config.catalog_file,
            data_dir = ?config.data_dir,
            "parsed configuration"
        );
        self.app = tooldeck::initialize(&config);

        request_permission(&[PermissionType::RunCommands, PermissionType::FullHdAccess]);
        subscribe(&[
            EventType::Key,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let _guard = tracing::debug_span!("plugin_update_event").entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                Self::log_command_result(exit_code, &stderr, &context);
                return false;
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match status {
                    PermissionStatus::Granted => tracing::debug!("permissions granted"),
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied, websites cannot be opened");
                    }
                }
                return false;
            }
            _ => return false,
        };

        match self.app.dispatch(&our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render,
                    "event handled"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        print!("{}", tooldeck::ui::render_terminal(self.app.state(), rows, cols));
    }
}

impl State {
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('f') => Some(Event::CyclePricing),
                BareKey::Char('t') => Some(Event::ToggleTheme),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Tab => Event::CycleCategory,
            BareKey::Enter => Event::VisitSelected,
            BareKey::Backspace => Event::Backspace,
            BareKey::Esc => {
                let state = self.app.state();
                if state.filter.is_unconstrained() && state.search_input.is_empty() {
                    Event::CloseFocus
                } else {
                    Event::ClearFilters
                }
            }
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn log_command_result(exit_code: Option<i32>, stderr: &[u8], context: &BTreeMap<String, String>) {
        let Some(url) = context.get(OPEN_URL_CONTEXT) else {
            return;
        };
        if exit_code == Some(0) {
            tracing::debug!(url = %url, "website opened");
        } else {
            tracing::warn!(
                url = %url,
                exit_code = ?exit_code,
                stderr = %String::from_utf8_lossy(stderr),
                "failed to open website"
            );
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::OpenUrl { name, url } => {
                tracing::debug!(tool = %name, url = %url, "opening website");
                let mut context = BTreeMap::new();
                context.insert(OPEN_URL_CONTEXT.to_string(), url.clone());
                run_command(&["xdg-open", url.as_str()], context);
            }
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ToggleTheme => {
                tracing::debug!("internal action reached the host, ignoring");
            }
        }
    }
}
