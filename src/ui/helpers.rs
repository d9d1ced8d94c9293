//! Shared rendering utilities.
//!
//! Column math is done in characters, not bytes, so names with multibyte
//! characters (the `×` in dimensions, `·` separators) line up.

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Width of `text` in terminal columns, counting one per character.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters, ending with `…` when cut.
///
/// # Example
///
/// ```rust
/// use memeverse::ui::helpers::truncate;
///
/// assert_eq!(truncate("Distracted Boyfriend", 10), "Distracte…");
/// assert_eq!(truncate("Doge", 10), "Doge");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Truncates and then pads `text` with spaces to exactly `width` characters.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let padding = width.saturating_sub(text_width(&cut));
    format!("{cut}{}", " ".repeat(padding))
}

/// Left padding that centers `text_len` columns inside `cols`.
#[must_use]
pub const fn center_offset(text_len: usize, cols: usize) -> usize {
    cols.saturating_sub(text_len) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("één twee", 4), "één…");
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("abcd", 0), "");
        assert_eq!(truncate("abcd", 1), "…");
    }

    #[test]
    fn fit_pads_short_and_cuts_long() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(text_width(&fit("500×500", 10)), 10);
    }

    #[test]
    fn centering_never_underflows() {
        assert_eq!(center_offset(4, 10), 3);
        assert_eq!(center_offset(20, 10), 0);
    }
}
