use crate::ui::helpers::{center_offset, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NotFoundView;

/// Renders the 404 message and hint, centered a few rows below `row`.
pub fn render_not_found(row: usize, not_found: &NotFoundView, theme: &Theme, cols: usize) {
    let message = truncate(&not_found.message, cols);
    position_cursor(row + 3, 1);
    print!("{}", " ".repeat(center_offset(text_width(&message), cols)));
    print!("{}{}{message}{}", Theme::bold(), Theme::fg(&theme.colors.accent), Theme::reset());

    let hint = truncate(&not_found.hint, cols);
    position_cursor(row + 5, 1);
    print!("{}", " ".repeat(center_offset(text_width(&hint), cols)));
    print!("{}{hint}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
}
