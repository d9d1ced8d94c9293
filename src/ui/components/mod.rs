//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Two-tone title with theme indicator and loading status
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`filters`]: Category and sort selectors with the match count
//! - [`table`]: Gallery rows (NAME, CATEGORY, LIKES, COMMENTS, ADDED)
//! - [`pagination`]: Page-number control
//! - [`empty`]: Empty result message
//! - [`detail`]: Single item with likes and comments
//! - [`not_found`]: 404 screen
//!
//! # Layouts
//!
//! Every screen shares the frame drawn by [`render_frame_top`] and
//! [`render_frame_bottom`]. The gallery fills it like this:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Filters]
//! [Heading, when a category is selected]
//! [Table Headers]
//! [Table Rows]
//! [Blank padding to fill screen]
//! [Pagination]
//! [Border]
//! [Footer]
//! ```

mod detail;
mod empty;
mod filters;
mod footer;
mod header;
mod not_found;
mod pagination;
mod search;
mod table;

pub use detail::render_detail;
pub use empty::render_empty_state;
pub use not_found::render_not_found;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, GalleryView, HeaderInfo};

use filters::render_filters;
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders header and border. Returns the first row available to the body.
pub fn render_frame_top(header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let current_row = render_header(2, header, theme, cols);
    render_border(current_row, &theme.colors.border, cols)
}

/// Renders the closing border and the footer on the last two used rows.
pub fn render_frame_bottom(footer: &FooterInfo, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, footer, theme, cols);
}

/// Renders the gallery body starting at `row`.
pub fn render_gallery(row: usize, gallery: &GalleryView, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = render_search_bar(row, &gallery.search_bar, theme, cols);
    current_row = render_filters(current_row, &gallery.filters, theme, cols);

    if let Some(heading) = &gallery.heading {
        position_cursor(current_row, 1);
        print!("{}{}  {heading}{}", Theme::bold(), Theme::fg(&theme.colors.accent), Theme::reset());
        current_row += 1;
    }

    if let Some(empty) = &gallery.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, theme, cols);
        render_table_rows(current_row, &gallery.rows, theme, cols);
    }

    if let Some(pagination) = &gallery.pagination {
        render_pagination(rows.saturating_sub(3), pagination, theme, cols);
    }
}
