//! Table component renderer.
//!
//! Renders the current page as fixed-width columns. NAME takes whatever width
//! the other columns leave over and is cut with `…` when it does not fit.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const CATEGORY_WIDTH: usize = 10;
const LIKES_WIDTH: usize = 7;
const COMMENTS_WIDTH: usize = 9;
const AGE_WIDTH: usize = 14;
const GUTTER: usize = 2;

/// Width left for the NAME column once the fixed columns are placed.
const fn name_width(cols: usize) -> usize {
    let fixed = GUTTER + CATEGORY_WIDTH + LIKES_WIDTH + COMMENTS_WIDTH + AGE_WIDTH + 4;
    let available = cols.saturating_sub(fixed);
    if available < 8 {
        8
    } else {
        available
    }
}

/// Renders the column headers at `row` and returns the next row.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{}{} {} {:>likes$} {:>comments$} {}",
        " ".repeat(GUTTER),
        fit("NAME", name_width(cols)),
        fit("CATEGORY", CATEGORY_WIDTH),
        "LIKES",
        "COMMENTS",
        fit("ADDED", AGE_WIDTH),
        likes = LIKES_WIDTH,
        comments = COMMENTS_WIDTH,
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every row starting at `row` and returns the row after the last.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one row. The selected row gets the selection colors across the
/// full width; other rows color the category and like columns.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let name_width = name_width(cols);
    let marker = if item.is_selected { "▶ " } else { "  " };
    let line_len = GUTTER + name_width + CATEGORY_WIDTH + LIKES_WIDTH + COMMENTS_WIDTH + AGE_WIDTH + 4;

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!(
            "{marker}{} {} {:>likes$} {:>comments$} {}",
            fit(&item.name, name_width),
            fit(&item.category, CATEGORY_WIDTH),
            item.likes,
            item.comments,
            fit(&item.age, AGE_WIDTH),
            likes = LIKES_WIDTH,
            comments = COMMENTS_WIDTH,
        );
    } else {
        let normal = Theme::fg(&theme.colors.text_normal);
        print!("{normal}{marker}{}", fit(&item.name, name_width));
        print!(" {}{}", Theme::fg(&theme.colors.category_fg), fit(&item.category, CATEGORY_WIDTH));
        print!(" {}{:>width$}", Theme::fg(&theme.colors.like_fg), item.likes, width = LIKES_WIDTH);
        print!(" {normal}{:>width$}", item.comments, width = COMMENTS_WIDTH);
        print!(" {}{}", Theme::fg(&theme.colors.text_dim), fit(&item.age, AGE_WIDTH));
    }

    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
    row + 1
}
