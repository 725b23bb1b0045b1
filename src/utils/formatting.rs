//! Terminal width helpers: ANSI-aware, wide-glyph-aware.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

static ANSI_SGR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

/// Remove colour escape sequences.
pub fn strip_ansi(s: &str) -> String {
    match ANSI_SGR.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Columns `s` occupies on screen once colours are removed.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Cut plain text to at most `max` columns, ending in `...` when shortened.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let budget = max.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_glyphs_take_two_columns() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width("\x1b[32m日本\x1b[0m"), 4);
        assert_eq!(display_width("abc"), 3);
    }

    #[test]
    fn strip_leaves_plain_text() {
        assert_eq!(strip_ansi("\x1b[1;31mREJECTED\x1b[0m"), "REJECTED");
    }

    #[test]
    fn truncation_counts_columns() {
        assert_eq!(truncate_to_width("insert (users:u1)", 40), "insert (users:u1)");
        assert_eq!(truncate_to_width("abcdefghij", 8), "abcde...");
        // 学 is two columns wide: eight columns do not fit in seven
        assert_eq!(truncate_to_width("学学学学", 8), "学学学学");
        assert_eq!(truncate_to_width("学学学学", 7), "学学...");
    }
}
