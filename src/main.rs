//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the MemeVerse library and Zellij: it turns
//! Zellij events into library [`Event`]s and runs the returned [`Action`]s
//! against the host API.
//!
//! ```text
//! ┌───────────────────────────┐
//! │   Zellij Main Thread      │
//! │  ┌────────────────────┐   │     web_request ──► catalog API
//! │  │  State (plugin)    │───┼──►  set_timeout ──► debounce timer
//! │  └────────────────────┘   │
//! │          │ IPC (JSON)     │
//! │          ▼                │
//! │  ┌────────────────────┐   │
//! │  │ MemeVerseWorker    │   │  ← preference file I/O
//! │  └────────────────────┘   │
//! └───────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! Gallery:
//! - `j`/`k`/`Down`/`Up` (or `Ctrl+n`/`Ctrl+p`): move selection
//! - `h`/`l`/`Left`/`Right`: previous/next page; `1`-`9`: jump to page;
//!   `g`/`G`: first/last page
//! - `/`: search; `c`: cycle category; `s`: cycle sort
//! - `Enter`: open detail; `d`: toggle dark mode; `r`: refresh; `q`: hide
//!
//! Detail:
//! - `l`: like/unlike; `c`: write a comment; `Esc`/`Backspace`: back
//!
//! While typing (search or comment):
//! - `Enter`: apply/post; `Esc`: clear/cancel; anything else is text
//!
//! # Pipes
//!
//! `zellij pipe --name navigate -- /memes/181913649` routes to a path.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use memeverse::app::AppState;
use memeverse::worker::{MemeVerseWorker, WorkerMessage, WorkerResponse, WORKER_NAME};
use memeverse::{handle_event, Action, Config, Event, InputMode, Route};

register_plugin!(State);
register_worker!(MemeVerseWorker, memeverse_worker, MEMEVERSE_WORKER);

/// Context key tagging the catalog request so unrelated results are ignored.
const REQUEST_KIND: &str = "kind";
const CATALOG_REQUEST: &str = "catalog";

/// Pipe name accepted by [`ZellijPlugin::pipe`].
const NAVIGATE_PIPE: &str = "navigate";

struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: memeverse::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the state, requests web access and
    /// subscribes to events. Fetching waits for the permission result.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        memeverse::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(api_url = %config.api_url, page_size = config.page_size.get(), "parsed configuration");
        self.app = memeverse::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => self.map_key_event(key),
            zellij_tile::prelude::Event::Timer(_elapsed) => Some(Event::DebounceElapsed),
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Self::map_web_result(status, body, &context)
            }
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                Self::map_custom_message_event(&message, &payload)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Some(Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            }),
            _ => None,
        };

        our_event.is_some_and(|event| self.dispatch(&event))
    }

    /// Accepts `navigate` pipes whose payload is a path.
    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        if pipe_message.name != NAVIGATE_PIPE {
            return false;
        }
        match pipe_message.payload {
            Some(path) => self.dispatch(&Event::Navigate(path)),
            None => {
                tracing::warn!("navigate pipe without a path");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        memeverse::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs the handler and executes its actions. Returns whether to re-render.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps a key to an event according to the route and input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::SelectionDown),
                BareKey::Char('p') => Some(Event::SelectionUp),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Search => Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::SubmitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Down => Event::SelectionDown,
                BareKey::Up => Event::SelectionUp,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Comment => Some(match key.bare_key {
                BareKey::Esc => Event::ExitComment,
                BareKey::Enter => Event::SubmitComment,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Normal => match &self.app.route {
                Route::Gallery => Self::map_gallery_key(&key.bare_key),
                Route::Detail { .. } if self.app.detail.is_some() => Self::map_detail_key(&key.bare_key),
                Route::Detail { .. } | Route::NotFound => Self::map_not_found_key(&key.bare_key),
            },
        }
    }

    fn map_gallery_key(key: &BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::SelectionDown,
            BareKey::Up | BareKey::Char('k') => Event::SelectionUp,
            BareKey::Right | BareKey::Char('l') => Event::NextPage,
            BareKey::Left | BareKey::Char('h') => Event::PreviousPage,
            BareKey::Char(digit @ '1'..='9') => Event::GoToPage(digit.to_digit(10)? as usize),
            BareKey::Char('g') => Event::GoToPage(1),
            BareKey::Char('G') => Event::LastPage,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('c') => Event::CycleCategory,
            BareKey::Char('s') => Event::CycleSort,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Char('d') => Event::ToggleDarkMode,
            BareKey::Char('r') => Event::Refresh,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_detail_key(key: &BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Char('l') => Event::ToggleLike,
            BareKey::Char('c') => Event::CommentMode,
            BareKey::Esc | BareKey::Backspace | BareKey::Char('h') => Event::CloseDetail,
            BareKey::Char('d') => Event::ToggleDarkMode,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_not_found_key(key: &BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Enter | BareKey::Esc | BareKey::Backspace => Event::CloseDetail,
            BareKey::Char('d') => Event::ToggleDarkMode,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps the catalog response. Results without our context tag are ignored.
    fn map_web_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        if context.get(REQUEST_KIND).map(String::as_str) != Some(CATALOG_REQUEST) {
            tracing::debug!(status, "ignoring untagged web request result");
            return None;
        }

        if (200..300).contains(&status) {
            return Some(Event::CatalogFetched { status, body });
        }

        let detail: String = String::from_utf8_lossy(&body).chars().take(200).collect();
        Some(Event::CatalogFetchFailed {
            error: format!("HTTP {status}: {detail}"),
        })
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => post_message_to(PluginMessage {
                worker_name: Some(WORKER_NAME.to_string()),
                name: WORKER_NAME.to_string(),
                payload,
            }),
            Err(e) => tracing::error!(error = %e, "failed to serialize worker message"),
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::FetchCatalog { url } => {
                let context = BTreeMap::from([(REQUEST_KIND.to_string(), CATALOG_REQUEST.to_string())]);
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
            Action::ScheduleTimer { seconds } => set_timeout(*seconds),
            Action::PostToWorker(message) => Self::post_worker_message(message),
        }
    }
}
