use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Renders `Category: <label>  Sort: <label>  <n> memes` and returns the next row.
pub fn render_filters(row: usize, filters: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    let count = match filters.match_count {
        1 => "1 meme".to_string(),
        n => format!("{n} memes"),
    };
    let line = format!(
        "  Category: {}  Sort: {}  {count}",
        filters.category_label, filters.sort_label
    );

    position_cursor(row, 1);
    if line.chars().count() > cols {
        print!("{}{}{}", Theme::fg(&theme.colors.text_dim), truncate(&line, cols), Theme::reset());
        return row + 1;
    }

    let dim = Theme::fg(&theme.colors.text_dim);
    let category = Theme::fg(&theme.colors.category_fg);
    let normal = Theme::fg(&theme.colors.text_normal);
    print!("  {dim}Category: {category}{}", filters.category_label);
    print!("  {dim}Sort: {normal}{}", filters.sort_label);
    print!("  {dim}{count}{}", Theme::reset());
    row + 1
}
