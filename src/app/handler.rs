//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for everything that happens to
//! the plugin: key-derived commands, timer firings, catalog fetch results and
//! worker responses. It mutates [`AppState`] and returns whether to re-render
//! plus the side effects to run.
//!
//! # Event Types
//!
//! - **Gallery**: `SelectionDown`, `SelectionUp`, `NextPage`, `PreviousPage`,
//!   `GoToPage`, `LastPage`, `CycleCategory`, `CycleSort`, `OpenSelected`
//! - **Search input**: `SearchMode`, `Char`, `Backspace`, `ExitSearch`,
//!   `SubmitSearch`, `DebounceElapsed`
//! - **Detail**: `ToggleLike`, `CommentMode`, `ExitComment`, `SubmitComment`,
//!   `CloseDetail`
//! - **Global**: `Navigate`, `ToggleDarkMode`, `Refresh`, `CloseFocus`
//! - **System**: `PermissionsResult`, `CatalogFetched`, `CatalogFetchFailed`,
//!   `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use memeverse::app::{handle_event, AppState, Event};
//! use memeverse::ui::theme::ThemePair;
//!
//! let mut state = AppState::new(ThemePair::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Refresh)?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), memeverse::GalleryError>(())
//! ```

use super::modes::InputMode;
use super::routes::Route;
use crate::app::{Action, AppState};
use crate::catalog::{check_status, ingest, parse_catalog_response};
use crate::domain::error::Result;
use crate::preferences::PreferenceChange;
use crate::worker::{WorkerMessage, WorkerResponse};
use chrono::Utc;

/// Events triggered by user input, timers, fetch results or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down within the page (wraps to top).
    SelectionDown,
    /// Moves the cursor up within the page (wraps to bottom).
    SelectionUp,
    /// Advances one page, clamped to the last.
    NextPage,
    /// Goes back one page, clamped to the first.
    PreviousPage,
    /// Jumps to a page number shown in the pagination control.
    GoToPage(usize),
    /// Jumps to the last page.
    LastPage,
    /// Advances the category filter.
    CycleCategory,
    /// Advances the sort key.
    CycleSort,

    /// Focuses the search bar.
    SearchMode,
    /// Types a character into the focused input.
    Char(char),
    /// Deletes the last character of the focused input.
    Backspace,
    /// Clears the search and leaves search mode.
    ExitSearch,
    /// Applies the search input immediately and leaves search mode.
    SubmitSearch,
    /// A debounce timer fired.
    DebounceElapsed,

    /// Opens the detail view for the item under the cursor.
    OpenSelected,
    /// Returns to the gallery.
    CloseDetail,
    /// Goes to a path, e.g. `/memes/181913649`.
    Navigate(String),
    /// Likes or unlikes the open item.
    ToggleLike,
    /// Focuses the comment input.
    CommentMode,
    /// Discards the comment draft.
    ExitComment,
    /// Posts the comment draft.
    SubmitComment,

    /// Flips the dark-mode preference.
    ToggleDarkMode,
    /// Fetches the catalog again.
    Refresh,
    /// Hides the plugin.
    CloseFocus,

    /// The user answered the permission prompt.
    PermissionsResult {
        granted: bool,
    },

    /// The catalog request completed.
    CatalogFetched {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// The catalog request could not be made.
    CatalogFetchFailed {
        error: String,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions run in order; the list is empty when the
/// event needs no side effects.
///
/// # Errors
///
/// Reserved for state transitions that cannot complete. Catalog fetch failures
/// are not errors here: they are logged and leave the catalog unchanged.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    let on_gallery = state.route == Route::Gallery;

    match event {
        Event::SelectionDown if on_gallery => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::SelectionUp if on_gallery => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::NextPage if on_gallery => Ok((state.next_page(), vec![])),
        Event::PreviousPage if on_gallery => Ok((state.previous_page(), vec![])),
        Event::GoToPage(page) if on_gallery => Ok((state.go_to_page(*page), vec![])),
        Event::LastPage if on_gallery => Ok((state.last_page(), vec![])),
        Event::CycleCategory if on_gallery => {
            state.cycle_category();
            tracing::debug!(filter = ?state.query.category_filter(), "category filter changed");
            Ok((true, vec![]))
        }
        Event::CycleSort if on_gallery => {
            state.cycle_sort();
            tracing::debug!(sort_key = ?state.query.sort_key(), "sort key changed");
            Ok((true, vec![]))
        }
        Event::OpenSelected if on_gallery => Ok((state.open_selected(), vec![])),
        Event::SearchMode if on_gallery => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }

        Event::Char(_) | Event::Backspace if !state.input_mode.is_typing() => {
            tracing::trace!("text input outside an editor");
            Ok((false, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search => {
                state.search_input.push(*c);
                Ok((true, vec![schedule_search(state)]))
            }
            InputMode::Comment => Ok((edit_draft(state, |d| d.push_char(*c)), vec![])),
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search => {
                if state.search_input.pop().is_none() {
                    return Ok((false, vec![]));
                }
                Ok((true, vec![schedule_search(state)]))
            }
            InputMode::Comment => Ok((edit_draft(state, |d| d.backspace()), vec![])),
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::ExitSearch => {
            tracing::debug!(input = %state.search_input, "clearing search");
            state.input_mode = InputMode::Normal;
            state.search_input.clear();
            state.search.cancel();
            state.apply_search_term(String::new());
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            state.input_mode = InputMode::Normal;
            if let Some(term) = state.search.flush() {
                state.apply_search_term(term);
            }
            Ok((true, vec![]))
        }
        Event::DebounceElapsed => match state.search.on_timer() {
            Some(term) => {
                state.apply_search_term(term);
                Ok((true, vec![]))
            }
            None => Ok((false, vec![])),
        },

        Event::CloseDetail => {
            if on_gallery {
                return Ok((false, vec![]));
            }
            state.navigate(Route::Gallery);
            Ok((true, vec![]))
        }
        Event::Navigate(path) => {
            state.navigate(Route::resolve(path));
            Ok((true, vec![]))
        }
        Event::ToggleLike => Ok((edit_draft(state, |d| d.toggle_like()), vec![])),
        Event::CommentMode => {
            if state.detail.is_none() {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Comment;
            Ok((true, vec![]))
        }
        Event::ExitComment => {
            edit_draft(state, |d| d.clear_draft());
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::SubmitComment => {
            edit_draft(state, |d| {
                d.submit_comment();
            });
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }

        Event::ToggleDarkMode => {
            let PreferenceChange::DarkMode(enabled) = state.toggle_dark_mode();
            tracing::debug!(dark_mode = enabled, "dark mode toggled");
            Ok((true, vec![Action::PostToWorker(WorkerMessage::save_dark_mode(enabled))]))
        }
        Event::Refresh => {
            if state.loading {
                tracing::debug!("fetch already in flight");
                return Ok((false, vec![]));
            }
            Ok((true, vec![start_fetch(state)]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::PermissionsResult { granted: true } => {
            tracing::debug!("permissions granted, fetching catalog and preferences");
            let fetch = start_fetch(state);
            Ok((true, vec![fetch, Action::PostToWorker(WorkerMessage::load_preferences())]))
        }
        Event::PermissionsResult { granted: false } => {
            tracing::warn!("permissions denied, catalog cannot be fetched");
            Ok((false, vec![Action::PostToWorker(WorkerMessage::load_preferences())]))
        }
        Event::CatalogFetched { status, body } => {
            let parsed = check_status(*status).and_then(|()| parse_catalog_response(body));
            match parsed {
                Ok(raw) => {
                    let items = ingest(raw, &mut state.metadata, Utc::now());
                    state.replace_catalog(items);
                    Ok((true, vec![]))
                }
                Err(e) => Ok(fetch_failed(state, &e.to_string())),
            }
        }
        Event::CatalogFetchFailed { error } => Ok(fetch_failed(state, error)),

        Event::WorkerResponse(response) => match response {
            WorkerResponse::PreferencesLoaded { dark_mode } => {
                let changed = state.restore_dark_mode(*dark_mode);
                tracing::debug!(dark_mode, changed, "preferences restored");
                Ok((changed, vec![]))
            }
            WorkerResponse::PreferenceSaved { dark_mode } => {
                tracing::trace!(dark_mode, "preference persisted");
                Ok((false, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!(error = %message, "worker error");
                Ok((false, vec![]))
            }
        },

        Event::SelectionDown
        | Event::SelectionUp
        | Event::NextPage
        | Event::PreviousPage
        | Event::GoToPage(_)
        | Event::LastPage
        | Event::CycleCategory
        | Event::CycleSort
        | Event::OpenSelected
        | Event::SearchMode => {
            tracing::trace!(route = %state.route, "gallery event ignored outside the gallery");
            Ok((false, vec![]))
        }
    }
}

/// Feeds the current search input to the debouncer.
fn schedule_search(state: &mut AppState) -> Action {
    let request = state.search.feed(state.search_input.clone());
    tracing::trace!(input = %state.search_input, "search input debounced");
    Action::ScheduleTimer {
        seconds: request.seconds(),
    }
}

/// Applies `edit` to the open detail session. Returns `false` if none is open.
fn edit_draft(state: &mut AppState, edit: impl FnOnce(&mut crate::detail::DetailSession)) -> bool {
    match state.detail.as_mut() {
        Some(session) => {
            edit(session);
            true
        }
        None => false,
    }
}

fn start_fetch(state: &mut AppState) -> Action {
    state.loading = true;
    Action::FetchCatalog {
        url: state.api_url.clone(),
    }
}

fn fetch_failed(state: &mut AppState, error: &str) -> (bool, Vec<Action>) {
    tracing::error!(error = %error, catalog_len = state.catalog.len(), "catalog fetch failed");
    state.loading = false;
    (true, vec![])
}

/// Variant name for span fields, without the payload of `CatalogFetched`.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::SelectionDown => "SelectionDown",
        Event::SelectionUp => "SelectionUp",
        Event::NextPage => "NextPage",
        Event::PreviousPage => "PreviousPage",
        Event::GoToPage(_) => "GoToPage",
        Event::LastPage => "LastPage",
        Event::CycleCategory => "CycleCategory",
        Event::CycleSort => "CycleSort",
        Event::SearchMode => "SearchMode",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::ExitSearch => "ExitSearch",
        Event::SubmitSearch => "SubmitSearch",
        Event::DebounceElapsed => "DebounceElapsed",
        Event::OpenSelected => "OpenSelected",
        Event::CloseDetail => "CloseDetail",
        Event::Navigate(_) => "Navigate",
        Event::ToggleLike => "ToggleLike",
        Event::CommentMode => "CommentMode",
        Event::ExitComment => "ExitComment",
        Event::SubmitComment => "SubmitComment",
        Event::ToggleDarkMode => "ToggleDarkMode",
        Event::Refresh => "Refresh",
        Event::CloseFocus => "CloseFocus",
        Event::PermissionsResult { .. } => "PermissionsResult",
        Event::CatalogFetched { .. } => "CatalogFetched",
        Event::CatalogFetchFailed { .. } => "CatalogFetchFailed",
        Event::WorkerResponse(_) => "WorkerResponse",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RandomMetadata;
    use crate::domain::{CatalogItem, SortKey};
    use crate::ui::theme::ThemePair;

    fn state() -> AppState {
        AppState::new(ThemePair::default())
            .with_api_url("http://catalog.test/memes")
            .with_metadata(RandomMetadata::from_seed(5))
    }

    fn loaded(count: u32) -> AppState {
        let mut state = state();
        state.replace_catalog(
            (0..count)
                .map(|i| CatalogItem::builder(i.to_string(), format!("meme {i}")).likes(i).build())
                .collect(),
        );
        state
    }

    fn run(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    fn catalog_body(names: &[&str]) -> Vec<u8> {
        let memes: Vec<serde_json::Value> = names
            .iter()
            .enumerate()
            .map(|(i, name)| serde_json::json!({"id": i.to_string(), "name": name, "url": format!("https://i.test/{i}.jpg")}))
            .collect();
        serde_json::to_vec(&serde_json::json!({"success": true, "data": {"memes": memes}})).unwrap()
    }

    #[test]
    fn permissions_start_fetch_and_preference_load() {
        let mut state = state();
        let (render, actions) = run(&mut state, Event::PermissionsResult { granted: true });
        assert!(render);
        assert!(state.loading);
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0], Action::FetchCatalog { url: "http://catalog.test/memes".into() });
        assert!(matches!(actions[1], Action::PostToWorker(WorkerMessage::LoadPreferences { .. })));
    }

    #[test]
    fn denied_permissions_still_restore_preferences() {
        let mut state = state();
        let (_, actions) = run(&mut state, Event::PermissionsResult { granted: false });
        assert!(!state.loading);
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::LoadPreferences { .. })]
        ));
    }

    #[test]
    fn refetch_returns_to_the_first_page() {
        let mut state = loaded(30);
        run(&mut state, Event::GoToPage(3));
        assert_eq!(state.query.page(), 3);

        run(&mut state, Event::Refresh);
        run(&mut state, Event::CatalogFetched { status: 200, body: catalog_body(&["a"; 30]) });
        assert_eq!(state.query.page(), 1);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn last_page_event_reaches_pages_beyond_nine() {
        let mut state = loaded(130);
        let (render, _) = run(&mut state, Event::LastPage);
        assert!(render);
        assert_eq!(state.query.page(), 11);
    }

    #[test]
    fn fetched_catalog_is_ingested() {
        let mut state = state();
        run(&mut state, Event::Refresh);
        let (render, _) = run(&mut state, Event::CatalogFetched { status: 200, body: catalog_body(&["Doge", "Grumpy Cat"]) });
        assert!(render);
        assert!(!state.loading);
        let names: Vec<&str> = state.catalog.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Doge", "Grumpy Cat"]);
    }

    #[test]
    fn failed_fetch_leaves_catalog_untouched() {
        let mut state = loaded(3);
        let before = state.catalog.clone();

        run(&mut state, Event::Refresh);
        run(&mut state, Event::CatalogFetched { status: 500, body: catalog_body(&["x"]) });
        assert_eq!(state.catalog, before);
        assert!(!state.loading);

        run(&mut state, Event::Refresh);
        run(&mut state, Event::CatalogFetched { status: 200, body: b"{\"success\":false}".to_vec() });
        assert_eq!(state.catalog, before);

        run(&mut state, Event::Refresh);
        run(&mut state, Event::CatalogFetchFailed { error: "offline".into() });
        assert_eq!(state.catalog, before);
        assert!(!state.loading);
    }

    #[test]
    fn refresh_is_ignored_while_loading() {
        let mut state = state();
        assert_eq!(run(&mut state, Event::Refresh).1.len(), 1);
        assert_eq!(run(&mut state, Event::Refresh), (false, vec![]));
    }

    #[test]
    fn typing_schedules_a_timer_per_keystroke_and_applies_the_last() {
        let mut state = loaded(30);
        run(&mut state, Event::NextPage);
        assert_eq!(state.query.page(), 2);

        run(&mut state, Event::SearchMode);
        let mut timers = 0;
        for c in "meme 2".chars() {
            let (_, actions) = run(&mut state, Event::Char(c));
            assert_eq!(actions, vec![Action::ScheduleTimer { seconds: 0.5 }]);
            timers += 1;
        }
        assert_eq!(state.query.search_term(), "");
        assert_eq!(state.query.page(), 2);

        for _ in 1..timers {
            assert_eq!(run(&mut state, Event::DebounceElapsed), (false, vec![]));
        }
        assert!(run(&mut state, Event::DebounceElapsed).0);
        assert_eq!(state.query.search_term(), "meme 2");
        assert_eq!(state.query.page(), 1);
    }

    #[test]
    fn submit_applies_immediately_and_stale_timers_do_nothing() {
        let mut state = loaded(5);
        run(&mut state, Event::SearchMode);
        run(&mut state, Event::Char('3'));
        run(&mut state, Event::SubmitSearch);
        assert_eq!(state.query.search_term(), "3");
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(run(&mut state, Event::DebounceElapsed), (false, vec![]));
    }

    #[test]
    fn exit_search_clears_input_and_term() {
        let mut state = loaded(5);
        run(&mut state, Event::SearchMode);
        run(&mut state, Event::Char('4'));
        run(&mut state, Event::SubmitSearch);
        run(&mut state, Event::SearchMode);
        run(&mut state, Event::Char('x'));
        run(&mut state, Event::ExitSearch);
        assert_eq!(state.search_input, "");
        assert_eq!(state.query.search_term(), "");
        assert_eq!(run(&mut state, Event::DebounceElapsed), (false, vec![]));
    }

    #[test]
    fn backspace_on_empty_input_schedules_nothing() {
        let mut state = loaded(5);
        run(&mut state, Event::SearchMode);
        assert_eq!(run(&mut state, Event::Backspace), (false, vec![]));
    }

    #[test]
    fn filter_and_sort_reset_the_page() {
        let mut state = loaded(40);
        run(&mut state, Event::GoToPage(3));
        assert_eq!(state.query.page(), 3);
        run(&mut state, Event::CycleSort);
        assert_eq!(state.query.sort_key(), SortKey::Likes);
        assert_eq!(state.query.page(), 1);

        run(&mut state, Event::GoToPage(2));
        run(&mut state, Event::CycleCategory);
        assert_eq!(state.query.page(), 1);
    }

    #[test]
    fn characters_in_normal_mode_are_ignored() {
        let mut state = loaded(3);
        assert_eq!(run(&mut state, Event::Char('z')), (false, vec![]));
        assert_eq!(state.search_input, "");
    }

    #[test]
    fn detail_flow() {
        let mut state = loaded(3);
        run(&mut state, Event::SelectionDown);
        run(&mut state, Event::OpenSelected);
        assert_eq!(state.route, Route::Detail { id: "1".into() });

        run(&mut state, Event::ToggleLike);
        let session = state.detail.as_ref().unwrap();
        assert!(session.liked());
        assert_eq!(session.likes_count(), 2);

        run(&mut state, Event::CommentMode);
        for c in "nice".chars() {
            run(&mut state, Event::Char(c));
        }
        run(&mut state, Event::SubmitComment);
        let first = &state.detail.as_ref().unwrap().comments()[0];
        assert_eq!(first.text, "nice");
        assert_eq!(first.username, "current_user");
        assert_eq!(state.input_mode, InputMode::Normal);

        run(&mut state, Event::CloseDetail);
        assert_eq!(state.route, Route::Gallery);
        assert!(state.detail.is_none());
        assert_eq!(state.catalog[1].likes, 1);
    }

    #[test]
    fn gallery_keys_do_nothing_on_detail() {
        let mut state = loaded(30);
        run(&mut state, Event::OpenSelected);
        assert_eq!(run(&mut state, Event::NextPage), (false, vec![]));
        assert_eq!(state.query.page(), 1);
    }

    #[test]
    fn navigate_resolves_paths() {
        let mut state = loaded(3);
        run(&mut state, Event::Navigate("/memes/2".into()));
        assert_eq!(state.route, Route::Detail { id: "2".into() });
        run(&mut state, Event::Navigate("/memes/77".into()));
        assert_eq!(state.route, Route::NotFound);
        run(&mut state, Event::Navigate("/".into()));
        assert_eq!(state.route, Route::Gallery);
    }

    #[test]
    fn dark_mode_toggle_is_persisted_through_the_worker() {
        let mut state = state();
        let (render, actions) = run(&mut state, Event::ToggleDarkMode);
        assert!(render);
        assert!(state.preferences.dark_mode());
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::SaveDarkMode { enabled: true, .. })]
        ));
    }

    #[test]
    fn restored_preference_renders_only_on_change() {
        let mut state = state();
        let loaded = Event::WorkerResponse(WorkerResponse::PreferencesLoaded { dark_mode: true });
        assert!(run(&mut state, loaded.clone()).0);
        assert!(state.preferences.dark_mode());
        assert!(!run(&mut state, loaded).0);
    }

    #[test]
    fn late_restore_does_not_override_a_toggle() {
        let mut state = state();
        run(&mut state, Event::ToggleDarkMode);
        let (render, _) = run(&mut state, Event::WorkerResponse(WorkerResponse::PreferencesLoaded { dark_mode: false }));
        assert!(!render);
        assert!(state.preferences.dark_mode());
    }
}
