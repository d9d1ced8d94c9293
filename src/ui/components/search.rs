//! Search bar component renderer.
//!
//! A 3-line bordered box. The border takes the active color while the box has
//! focus, and a trailing `…` marks input still waiting on the debounce.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

const PLACEHOLDER: &str = "Search memes...";

/// Renders the search input box at `row` and returns the row after it.
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Search: doge▏    │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_editing {
        &theme.colors.search_bar_active
    } else {
        &theme.colors.search_bar_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}┌{}┐{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    let (text, color) = if search.query.is_empty() && !search.is_editing {
        (format!(" {PLACEHOLDER}"), &theme.colors.text_dim)
    } else {
        let cursor = if search.is_editing { "▏" } else { "" };
        let pending = if search.is_pending { " …" } else { "" };
        (format!(" Search: {}{cursor}{pending}", search.query), &theme.colors.text_normal)
    };
    let text = truncate(&text, inner_width);
    let padding = inner_width.saturating_sub(text_width(&text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}│", Theme::fg(border));
    print!("{}{text}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{}│{}", Theme::fg(border), Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}└{}┘{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    row + 3
}
