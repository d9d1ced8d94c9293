//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for everything the plugin shows:
//! the ingested catalog, the query parameters, the raw search input and its
//! debouncer, the current route with its detail session, and the display
//! preferences. View models are computed on demand from a state snapshot.
//!
//! # State Components
//!
//! - **Catalog**: enriched items, replaced wholesale on every fetch
//! - **Query**: search term, category filter, sort key and page
//! - **Search input**: raw keystrokes, applied to the query once debounced
//! - **Selection**: cursor position within the current page
//! - **Route**: gallery, detail (with its [`DetailSession`]) or not-found
//! - **Preferences**: dark mode, choosing between the two themes
//!
//! # Example
//!
//! ```rust
//! use memeverse::app::AppState;
//! use memeverse::domain::CatalogItem;
//! use memeverse::ui::theme::ThemePair;
//!
//! let mut state = AppState::new(ThemePair::default());
//! state.replace_catalog(vec![CatalogItem::builder("1", "Doge").build()]);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! ```

use super::modes::InputMode;
use super::routes::Route;
use crate::catalog::RandomMetadata;
use crate::detail::DetailSession;
use crate::domain::{CatalogItem, CategoryFilter};
use crate::preferences::{PreferenceChange, Preferences};
use crate::query::{compute_page, select, total_pages, Debouncer, PageView, QueryState, DEFAULT_PAGE_SIZE};
use crate::ui::theme::{Theme, ThemePair};
use crate::ui::viewmodel::{
    Body, CommentLine, DetailView, DisplayItem, EmptyState, FilterBarInfo, FooterInfo, GalleryView,
    HeaderInfo, NotFoundView, PaginationInfo, SearchBarInfo, UIViewModel,
};
use chrono::{DateTime, Utc};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Catalog endpoint used unless configured otherwise.
pub const DEFAULT_API_URL: &str = "https://api.imgflip.com/get_memes";

/// Lines taken by everything except the gallery rows: blank line, header,
/// border, search box (3), filter line, table header, blank line, pagination,
/// border and footer.
const GALLERY_CHROME_ROWS: usize = 13;

const NOT_FOUND_CAPTIONS: [&str; 5] = [
    "When I try to find a page that doesn't exist",
    "One does not simply find this page",
    "Me trying to understand why this URL should work",
    "Much 404. Very missing. So error. Wow.",
    "Can't get a 404 error if you go back to the homepage",
];

/// Central application state container.
///
/// Mutated by the event handler in response to user input, timer firings,
/// fetch results and worker responses.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Enriched catalog in source order.
    pub catalog: Vec<CatalogItem>,

    /// Applied query parameters.
    pub query: QueryState,

    /// Raw search input as typed, possibly ahead of `query.search_term()`.
    pub search_input: String,

    /// Debounces `search_input` into the query.
    pub search: Debouncer<String>,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Zero-based cursor within the current page.
    pub selected_index: usize,

    /// Whether a catalog fetch is outstanding.
    pub loading: bool,

    /// Screen currently shown.
    pub route: Route,

    /// Local state of the open detail view, if any.
    pub detail: Option<DetailSession>,

    /// Display preferences.
    pub preferences: Preferences,

    /// Light and dark color schemes.
    pub themes: ThemePair,

    /// Items per page.
    pub page_size: NonZeroUsize,

    /// Catalog endpoint.
    pub api_url: String,

    /// Randomness for ingestion, comment seeding and the not-found caption.
    pub metadata: RandomMetadata,

    not_found_caption: usize,

    /// Set once the user toggles dark mode; a later restore must not undo it.
    dark_mode_toggled: bool,
}

impl AppState {
    /// Creates an empty state with default page size, debounce and endpoint.
    ///
    /// The catalog stays empty until the first fetch completes.
    #[must_use]
    pub fn new(themes: ThemePair) -> Self {
        Self {
            catalog: Vec::new(),
            query: QueryState::default(),
            search_input: String::new(),
            search: Debouncer::default(),
            input_mode: InputMode::Normal,
            selected_index: 0,
            loading: false,
            route: Route::Gallery,
            detail: None,
            preferences: Preferences::default(),
            themes,
            page_size: DEFAULT_PAGE_SIZE,
            api_url: DEFAULT_API_URL.to_string(),
            metadata: RandomMetadata::from_entropy(),
            not_found_caption: 0,
            dark_mode_toggled: false,
        }
    }

    #[must_use]
    pub const fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.search = Debouncer::new(delay);
        self
    }

    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: RandomMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Flips dark mode at the user's request.
    pub fn toggle_dark_mode(&mut self) -> PreferenceChange {
        self.dark_mode_toggled = true;
        self.preferences.toggle_dark_mode()
    }

    /// Applies the stored dark-mode flag. Returns `true` if the display changed.
    ///
    /// Ignored once the user has toggled, since the worker has already
    /// persisted the newer value.
    pub fn restore_dark_mode(&mut self, enabled: bool) -> bool {
        if self.dark_mode_toggled {
            tracing::debug!(stored = enabled, "keeping dark mode toggled before the restore");
            return false;
        }
        self.preferences.set_dark_mode(enabled).is_some()
    }

    /// Theme matching the dark-mode preference.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.pick(self.preferences.dark_mode())
    }

    /// Runs the query pipeline for the current page.
    #[must_use]
    pub fn page_view(&self) -> PageView<'_> {
        compute_page(&self.catalog, &self.query, self.page_size)
    }

    /// Page count for the current query.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(select(&self.catalog, &self.query).len(), self.page_size)
    }

    /// Item under the cursor, if the current page has any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&CatalogItem> {
        self.page_view().items.get(self.selected_index).copied()
    }

    /// Replaces the catalog after a fetch and stops loading.
    ///
    /// Every fetch re-rolls the generated metadata, so the view returns to the
    /// first page with the cursor on the first row.
    pub fn replace_catalog(&mut self, items: Vec<CatalogItem>) {
        tracing::debug!(item_count = items.len(), "catalog replaced");
        self.catalog = items;
        self.loading = false;
        self.query.set_page(1);
        self.selected_index = 0;
    }

    /// Keeps the page within `1..=total_pages` and the cursor within the page.
    pub fn clamp_page(&mut self) {
        let total = self.total_pages();
        let page = self.query.page();
        let clamped = page.min(total).max(1);
        if clamped != page {
            tracing::debug!(from = page, to = clamped, "page clamped");
            self.query.set_page(clamped);
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.page_view().items.len();
        self.selected_index = if len == 0 { 0 } else { self.selected_index.min(len - 1) };
    }

    /// Moves the cursor down, wrapping to the top of the page.
    pub fn move_selection_down(&mut self) {
        let len = self.page_view().items.len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up, wrapping to the bottom of the page.
    pub fn move_selection_up(&mut self) {
        let len = self.page_view().items.len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 { len - 1 } else { self.selected_index - 1 };
    }

    /// Jumps to `page` if it exists. Returns `true` if the page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total = self.total_pages();
        if page == 0 || page > total || page == self.query.page() {
            return false;
        }
        self.query.set_page(page);
        self.selected_index = 0;
        true
    }

    /// Advances one page, stopping at the last.
    pub fn next_page(&mut self) -> bool {
        let target = (self.query.page() + 1).min(self.total_pages());
        self.go_to_page(target)
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages())
    }

    /// Goes back one page, stopping at the first.
    pub fn previous_page(&mut self) -> bool {
        let target = self.query.page().saturating_sub(1).max(1);
        self.go_to_page(target)
    }

    /// Applies a debounced search term. Returns `true` if the query changed.
    pub fn apply_search_term(&mut self, term: String) -> bool {
        let changed = self.query.set_search_term(term);
        if changed {
            tracing::debug!(term = %self.query.search_term(), "search term applied");
            self.selected_index = 0;
            self.clamp_page();
        }
        changed
    }

    /// Advances the category filter (All, Trending, New, Classic, Random, All...).
    pub fn cycle_category(&mut self) {
        let next = self.query.category_filter().next();
        if self.query.set_category_filter(next) {
            self.selected_index = 0;
            self.clamp_page();
        }
    }

    /// Advances the sort key (All, Likes, Comments, Date, All...).
    pub fn cycle_sort(&mut self) {
        let next = self.query.sort_key().next();
        if self.query.set_sort_key(next) {
            self.selected_index = 0;
            self.clamp_page();
        }
    }

    /// Switches to `route`, opening or closing the detail session as needed.
    ///
    /// A detail route for an id missing from the catalog lands on
    /// [`Route::NotFound`].
    pub fn navigate(&mut self, route: Route) {
        let _span = tracing::debug_span!("navigate", to = %route, from = %self.route).entered();

        self.input_mode = InputMode::Normal;
        match route {
            Route::Detail { id } => {
                let Some(item) = self.catalog.iter().find(|item| item.id == id).cloned() else {
                    tracing::warn!(id = %id, "detail requested for unknown item");
                    self.show_not_found();
                    return;
                };
                self.detail = Some(DetailSession::open(item, &mut self.metadata));
                self.route = Route::Detail { id };
            }
            Route::Gallery => {
                self.detail = None;
                self.route = Route::Gallery;
            }
            Route::NotFound => self.show_not_found(),
        }
    }

    fn show_not_found(&mut self) {
        self.detail = None;
        self.not_found_caption = self.metadata.pick_index(NOT_FOUND_CAPTIONS.len());
        self.route = Route::NotFound;
    }

    /// Opens the detail view for the item under the cursor.
    pub fn open_selected(&mut self) -> bool {
        let Some(id) = self.selected_item().map(|item| item.id.clone()) else {
            return false;
        };
        self.navigate(Route::Detail { id });
        true
    }

    /// Computes a renderable view model for the given terminal size.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        self.compute_viewmodel_at(rows, cols, Utc::now())
    }

    /// Same as [`compute_viewmodel`](Self::compute_viewmodel) with an explicit clock.
    #[must_use]
    pub fn compute_viewmodel_at(&self, rows: usize, _cols: usize, now: DateTime<Utc>) -> UIViewModel {
        let body = match (&self.route, &self.detail) {
            (Route::Gallery, _) => Body::Gallery(self.compute_gallery(rows, now)),
            (Route::Detail { .. }, Some(session)) => Body::Detail(self.compute_detail(session, now)),
            (Route::Detail { .. } | Route::NotFound, _) => Body::NotFound(self.compute_not_found()),
        };

        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            body,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title_lead: "Meme".to_string(),
            title_accent: "Verse".to_string(),
            mode_label: if self.preferences.dark_mode() { "☾ dark" } else { "☀ light" }.to_string(),
            status: self.loading.then(|| "Loading memes...".to_string()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.route, self.input_mode) {
            (_, InputMode::Search) => "Type to search  Enter: apply  Esc: clear",
            (_, InputMode::Comment) => "Type your comment  Enter: post  Esc: cancel",
            (Route::Gallery, InputMode::Normal) => {
                "j/k: select  h/l: page  g/G: first/last  /: search  c: category  s: sort  Enter: open  d: theme  r: refresh  q: quit"
            }
            (Route::Detail { .. }, InputMode::Normal) if self.detail.is_some() => {
                "l: like  c: comment  Esc: back  d: theme  q: quit"
            }
            (Route::Detail { .. } | Route::NotFound, InputMode::Normal) => "Enter/Esc: back to gallery  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_gallery(&self, rows: usize, now: DateTime<Utc>) -> GalleryView {
        let view = self.page_view();
        let filter = self.query.category_filter();
        let heading = match filter {
            CategoryFilter::All => None,
            CategoryFilter::Only(_) => Some(filter.label()),
        };

        let available_rows = rows.saturating_sub(GALLERY_CHROME_ROWS + usize::from(heading.is_some())).max(1);

        let len = view.items.len();
        let cursor = self.selected_index.min(len.saturating_sub(1));
        let mut visible_start = cursor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(len);
        if visible_end - visible_start < available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let rows = view.items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, item)| DisplayItem {
                name: item.name.clone(),
                category: item.category.to_string(),
                likes: item.likes.to_string(),
                comments: item.comments.to_string(),
                age: item.age_label(now),
                is_selected: visible_start + offset == self.selected_index,
            })
            .collect();

        let pagination = (!view.is_empty()).then(|| PaginationInfo {
            markers: view.window.clone(),
            current: view.page,
            total: view.total_pages,
            has_previous: view.page > 1,
            has_next: view.page < view.total_pages,
        });

        let empty_state = (view.is_empty() && !self.loading).then(|| EmptyState {
            message: "No memes found matching your criteria".to_string(),
            subtitle: "Try adjusting your filters or search terms".to_string(),
        });

        GalleryView {
            search_bar: SearchBarInfo {
                query: self.search_input.clone(),
                is_editing: self.input_mode == InputMode::Search,
                is_pending: self.search.is_pending(),
            },
            filters: FilterBarInfo {
                category_label: filter.label(),
                sort_label: self.query.sort_key().label().to_string(),
                match_count: view.total_matches,
            },
            heading,
            rows,
            pagination,
            empty_state,
        }
    }

    fn compute_detail(&self, session: &DetailSession, now: DateTime<Utc>) -> DetailView {
        let item = session.item();
        let dimensions = if item.width == 0 || item.height == 0 {
            "unknown size".to_string()
        } else {
            format!("{}×{}", item.width, item.height)
        };

        let comments: Vec<CommentLine> = session
            .comments()
            .iter()
            .map(|c| CommentLine {
                username: c.username.clone(),
                text: c.text.clone(),
                timestamp: c.timestamp.clone(),
            })
            .collect();

        DetailView {
            name: item.name.clone(),
            url: item.source_url.clone(),
            dimensions,
            category: item.category.to_string(),
            age: item.age_label(now),
            liked: session.liked(),
            likes: session.likes_count(),
            comment_count: comments.len(),
            draft: (self.input_mode == InputMode::Comment).then(|| session.draft().to_string()),
            empty_comments: comments
                .is_empty()
                .then(|| "No comments yet. Be the first to comment!".to_string()),
            comments,
        }
    }

    fn compute_not_found(&self) -> NotFoundView {
        let caption = NOT_FOUND_CAPTIONS
            .get(self.not_found_caption)
            .copied()
            .unwrap_or(NOT_FOUND_CAPTIONS[0]);

        NotFoundView {
            message: format!("404 · Page Not Found · {caption}"),
            hint: "The page you're looking for has gone missing... just like my ability to find good memes."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn state_with(count: u32) -> AppState {
        let mut state = AppState::new(ThemePair::default()).with_metadata(RandomMetadata::from_seed(11));
        let items = (0..count)
            .map(|i| {
                CatalogItem::builder(i.to_string(), format!("meme {i}"))
                    .category(Category::ALL[i as usize % 4])
                    .likes(i)
                    .comments(3)
                    .build()
            })
            .collect();
        state.replace_catalog(items);
        state
    }

    #[test]
    fn selection_wraps_within_the_page() {
        let mut state = state_with(14);
        state.move_selection_up();
        assert_eq!(state.selected_index, 11);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);

        assert!(state.next_page());
        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn paging_clamps_at_both_ends() {
        let mut state = state_with(30);
        assert!(!state.previous_page());
        assert!(state.next_page());
        assert!(state.next_page());
        assert!(!state.next_page());
        assert_eq!(state.query.page(), 3);
        assert!(!state.go_to_page(4));
        assert!(state.go_to_page(1));
    }

    #[test]
    fn replacing_the_catalog_returns_to_the_first_page() {
        let mut state = state_with(30);
        state.go_to_page(3);
        state.selected_index = 4;
        state.replace_catalog(state.catalog[..13].to_vec());
        assert_eq!(state.query.page(), 1);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn refetch_of_the_same_size_still_resets_the_page() {
        let mut state = state_with(40);
        assert!(state.go_to_page(3));
        state.move_selection_down();
        state.replace_catalog(state.catalog.clone());
        assert_eq!(state.query.page(), 1);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn last_page_jumps_past_the_digit_range() {
        let mut state = state_with(130);
        assert_eq!(state.total_pages(), 11);
        assert!(state.last_page());
        assert_eq!(state.query.page(), 11);
        assert!(!state.last_page());
        assert!(state.go_to_page(1));
    }

    #[test]
    fn restore_does_not_undo_a_toggle() {
        let mut state = state_with(1);
        assert!(state.restore_dark_mode(true));
        assert!(state.preferences.dark_mode());

        assert_eq!(state.toggle_dark_mode(), PreferenceChange::DarkMode(false));
        assert!(!state.restore_dark_mode(true));
        assert!(!state.preferences.dark_mode());
    }

    #[test]
    fn unknown_detail_id_is_not_found() {
        let mut state = state_with(3);
        state.navigate(Route::Detail { id: "999".into() });
        assert_eq!(state.route, Route::NotFound);
        assert!(state.detail.is_none());

        state.navigate(Route::Detail { id: "2".into() });
        assert_eq!(state.route, Route::Detail { id: "2".into() });
        assert_eq!(state.detail.as_ref().map(|d| d.item().name.as_str()), Some("meme 2"));
    }

    #[test]
    fn gallery_viewmodel_has_heading_only_when_filtered() {
        let mut state = state_with(8);
        let Body::Gallery(view) = state.compute_viewmodel(40, 100).body else {
            panic!("expected gallery");
        };
        assert_eq!(view.heading, None);
        assert_eq!(view.rows.len(), 8);
        assert!(view.rows[0].is_selected);

        state.cycle_category();
        let Body::Gallery(view) = state.compute_viewmodel(40, 100).body else {
            panic!("expected gallery");
        };
        assert_eq!(view.heading.as_deref(), Some("Trending Memes"));
        assert_eq!(view.filters.match_count, 2);
    }

    #[test]
    fn empty_result_shows_the_empty_state() {
        let mut state = state_with(5);
        state.apply_search_term("no such meme".into());
        let Body::Gallery(view) = state.compute_viewmodel(40, 100).body else {
            panic!("expected gallery");
        };
        assert!(view.rows.is_empty());
        assert!(view.pagination.is_none());
        let empty = view.empty_state.unwrap();
        assert_eq!(empty.message, "No memes found matching your criteria");
        assert_eq!(empty.subtitle, "Try adjusting your filters or search terms");
    }

    #[test]
    fn short_terminal_keeps_the_cursor_visible() {
        let mut state = state_with(12);
        state.selected_index = 11;
        let Body::Gallery(view) = state.compute_viewmodel(GALLERY_CHROME_ROWS + 4, 100).body else {
            panic!("expected gallery");
        };
        assert_eq!(view.rows.len(), 4);
        assert!(view.rows[3].is_selected);
        assert_eq!(view.rows[3].name, "meme 11");
    }

    #[test]
    fn theme_follows_dark_mode() {
        let mut state = state_with(0);
        assert_eq!(state.theme().name, "catppuccin-latte");
        state.preferences.set_dark_mode(true);
        assert_eq!(state.theme().name, "catppuccin-mocha");
        assert_eq!(state.compute_viewmodel(24, 80).header.mode_label, "☾ dark");
    }
}
