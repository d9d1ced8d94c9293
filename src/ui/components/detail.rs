//! Detail screen renderer.
//!
//! ```text
//! Distracted Boyfriend
//! Trending · 3 weeks ago · 1200×800
//! https://i.imgflip.com/1ur9b0.jpg
//! ♥ 125 likes
//! ──────────────
//! Comments (2)
//! [comment box while typing]
//! meme_lover · 2 hours ago
//!   This is hilarious! 😂
//! ```
//!
//! Comments past the bottom of the pane are not drawn.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

const INDENT: &str = "  ";

fn line(row: usize, color: &str, text: &str, cols: usize) {
    position_cursor(row, 1);
    print!("{}{INDENT}{}{}", Theme::fg(color), truncate(text, cols.saturating_sub(INDENT.len())), Theme::reset());
}

/// Renders the detail body from `row` down to just above the frame bottom.
pub fn render_detail(row: usize, detail: &DetailView, theme: &Theme, cols: usize, rows: usize) {
    let colors = &theme.colors;
    let last_row = rows.saturating_sub(3);
    let mut current_row = row + 1;

    position_cursor(current_row, 1);
    print!("{}{}{INDENT}{}{}", Theme::bold(), Theme::fg(&colors.accent), detail.name, Theme::reset());
    current_row += 1;

    position_cursor(current_row, 1);
    print!("{INDENT}{}{}", Theme::fg(&colors.category_fg), detail.category);
    print!("{} · {} · {}{}", Theme::fg(&colors.text_dim), detail.age, detail.dimensions, Theme::reset());
    current_row += 1;

    line(current_row, &colors.text_dim, &detail.url, cols);
    current_row += 2;

    let (heart, label) = if detail.liked { ("♥", "liked") } else { ("♡", "like") };
    position_cursor(current_row, 1);
    print!("{INDENT}{}{heart} {}", Theme::fg(&colors.like_fg), detail.likes);
    print!("{} ({label}){}", Theme::fg(&colors.text_dim), Theme::reset());
    current_row += 1;

    position_cursor(current_row, 1);
    print!("{}{}{}", Theme::fg(&colors.border), "─".repeat(cols), Theme::reset());
    current_row += 1;

    position_cursor(current_row, 1);
    print!("{}{INDENT}Comments ({}){}", Theme::bold(), detail.comment_count, Theme::reset());
    current_row += 1;

    if let Some(draft) = &detail.draft {
        let inner = cols.saturating_sub(INDENT.len() * 2 + 2);
        let text = truncate(&format!(" {draft}▏"), inner);
        let padding = inner.saturating_sub(text.chars().count());
        let border = Theme::fg(&colors.search_bar_active);

        position_cursor(current_row, 1);
        print!("{INDENT}{border}┌{}┐{}", "─".repeat(inner), Theme::reset());
        position_cursor(current_row + 1, 1);
        print!("{INDENT}{border}│{}{text}{}{border}│{}", Theme::fg(&colors.text_normal), " ".repeat(padding), Theme::reset());
        position_cursor(current_row + 2, 1);
        print!("{INDENT}{border}└{}┘{}", "─".repeat(inner), Theme::reset());
        current_row += 3;
    }

    if let Some(empty) = &detail.empty_comments {
        line(current_row + 1, &colors.empty_state_fg, empty, cols);
        return;
    }

    for comment in &detail.comments {
        if current_row + 1 > last_row {
            break;
        }
        position_cursor(current_row, 1);
        print!("{INDENT}{}{}{}", Theme::bold(), Theme::fg(&colors.text_normal), comment.username);
        print!("{}{} · {}{}", Theme::reset(), Theme::fg(&colors.text_dim), comment.timestamp, Theme::reset());
        line(current_row + 1, &colors.text_normal, &format!("{INDENT}{}", comment.text), cols);
        current_row += 2;
    }
}
