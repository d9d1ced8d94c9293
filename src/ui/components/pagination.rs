//! Pagination control renderer.

use crate::query::PageMarker;
use crate::ui::helpers::{center_offset, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Plain-text form of the control, used for centering.
fn label(pagination: &PaginationInfo) -> String {
    let mut parts = vec!["«".to_string()];
    parts.extend(pagination.markers.iter().map(|marker| match marker {
        PageMarker::Page(page) => format!(" {page} "),
        PageMarker::EllipsisLeft | PageMarker::EllipsisRight => "…".to_string(),
    }));
    parts.push("»".to_string());
    parts.join(" ")
}

/// Renders `« 1 … 5 [6] 7 … 10 »` centered at `row`.
///
/// The current page is drawn in the current-page colors. Arrows are dimmed
/// when there is no page in that direction.
pub fn render_pagination(row: usize, pagination: &PaginationInfo, theme: &Theme, cols: usize) {
    let padding = center_offset(text_width(&label(pagination)), cols);
    let arrow = |enabled: bool| {
        if enabled {
            Theme::fg(&theme.colors.accent)
        } else {
            Theme::fg(&theme.colors.text_dim)
        }
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{}«{}", arrow(pagination.has_previous), Theme::reset());

    for marker in &pagination.markers {
        print!(" ");
        match marker {
            PageMarker::Page(page) if *page == pagination.current => {
                print!("{}", Theme::bold());
                print!("{}", Theme::fg(&theme.colors.page_current_fg));
                print!("{}", Theme::bg(&theme.colors.page_current_bg));
                print!(" {page} ");
                print!("{}", Theme::reset());
            }
            PageMarker::Page(page) => {
                print!("{} {page} {}", Theme::fg(&theme.colors.text_normal), Theme::reset());
            }
            PageMarker::EllipsisLeft | PageMarker::EllipsisRight => {
                print!("{}…{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
            }
        }
    }

    print!(" {}»{}", arrow(pagination.has_next), Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::page_window;

    #[test]
    fn label_lists_markers_between_arrows() {
        let info = PaginationInfo {
            markers: page_window(6, 10),
            current: 6,
            total: 10,
            has_previous: true,
            has_next: true,
        };
        assert_eq!(label(&info), "«  1  …  5   6   7  …  10  »");
    }
}
