//! Page-number window for the pagination control.
//!
//! Short page counts are listed in full. Longer ones collapse to the first
//! page, the neighbours of the current page and the last page, with ellipsis
//! markers standing in for the hidden runs.

use serde::{Deserialize, Serialize};

/// Page counts up to this value are listed without collapsing.
const FULL_LIST_LIMIT: usize = 7;

/// One entry of the page-number control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageMarker {
    /// A clickable page number (1-based).
    Page(usize),
    /// Hidden pages between page 1 and the current neighbourhood.
    EllipsisLeft,
    /// Hidden pages between the current neighbourhood and the last page.
    EllipsisRight,
}

/// Computes the page-number window for `current_page` out of `total_pages`.
///
/// # Rules
///
/// - `total_pages <= 7`: every page `1..=total_pages`
/// - otherwise: `1`, then `EllipsisLeft` iff `current_page > 3`, then every
///   page in `[max(2, current-1), min(total-1, current+1)]`, then
///   `EllipsisRight` iff `current_page < total_pages - 2`, then `total_pages`
///
/// Zero pages produce an empty window.
///
/// # Examples
///
/// ```
/// use memeverse::query::{page_window, PageMarker::*};
///
/// assert_eq!(page_window(6, 10), vec![Page(1), EllipsisLeft, Page(5), Page(6), Page(7), EllipsisRight, Page(10)]);
/// ```
#[must_use]
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages <= FULL_LIST_LIMIT {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    let mut markers = Vec::with_capacity(FULL_LIST_LIMIT);
    markers.push(PageMarker::Page(1));

    if current_page > 3 {
        markers.push(PageMarker::EllipsisLeft);
    }

    let range_start = current_page.saturating_sub(1).max(2);
    let range_end = (current_page + 1).min(total_pages - 1);
    markers.extend((range_start..=range_end).map(PageMarker::Page));

    if current_page + 2 < total_pages {
        markers.push(PageMarker::EllipsisRight);
    }

    markers.push(PageMarker::Page(total_pages));
    markers
}
