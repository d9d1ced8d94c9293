//! Header component renderer.
//!
//! Draws the two-tone title centered, with the loading status and the theme
//! indicator right-aligned on the same line.

use crate::ui::helpers::{center_offset, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at `row` and returns the next row.
///
/// # Layout
///
/// ```text
/// [left padding] MemeVerse [padding] Loading memes...  ☾ dark
/// ```
///
/// The right-hand labels are dropped when they would overlap the title.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = text_width(&header.title_lead) + text_width(&header.title_accent);
    let padding = center_offset(title_len, cols);

    let right = match &header.status {
        Some(status) => format!("{status}  {} ", header.mode_label),
        None => format!("{} ", header.mode_label),
    };
    let right_len = text_width(&right);
    let used = padding + title_len;
    let show_right = used + right_len < cols;

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(padding));
    print!("{}{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), header.title_lead);
    print!("{}{}", Theme::fg(&theme.colors.accent), header.title_accent);
    print!("{}", Theme::reset());
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    if show_right {
        print!("{}", " ".repeat(cols - used - right_len));
        print!("{}{right}", Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(used)));
    }

    print!("{}", Theme::reset());
    row + 1
}
