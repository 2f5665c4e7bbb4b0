//! Cell-width helpers for laying out timeline columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of a string in terminal cells; wide characters count as two.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Shorten `s` to at most `max_width` cells, ending in "..." when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if visual_width(s) <= max_width {
        return s.to_string();
    }

    let target_width = max_width.saturating_sub(3);
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(&".".repeat(max_width.min(3)));
    result
}

/// Fit `s` into exactly `width` cells, padding on the left.
pub fn align_right(s: &str, width: usize) -> String {
    let fitted = truncate_to_width(s, width);
    let pad = width.saturating_sub(visual_width(&fitted));
    format!("{}{fitted}", " ".repeat(pad))
}

/// Fit `s` into exactly `width` cells, padding on the right.
pub fn pad_right(s: &str, width: usize) -> String {
    let fitted = truncate_to_width(s, width);
    let pad = width.saturating_sub(visual_width(&fitted));
    format!("{fitted}{}", " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_width_ascii() {
        assert_eq!(visual_width("Jan 01, 2024"), 12);
        assert_eq!(visual_width(""), 0);
    }

    #[test]
    fn test_visual_width_wide_chars() {
        assert_eq!(visual_width("你好"), 4);
    }

    #[test]
    fn test_truncate_no_truncation_needed() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_very_short() {
        assert_eq!(truncate_to_width("hello", 3), "...");
        assert_eq!(truncate_to_width("hello", 2), "..");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_truncate_does_not_split_wide_chars() {
        let result = truncate_to_width("你好世界", 6);
        assert_eq!(result, "你...");
    }

    #[test]
    fn test_align_right() {
        assert_eq!(align_right("ab", 5), "   ab");
        assert_eq!(align_right("abcdef", 5), "ab...");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("★", 2), "★ ");
        assert_eq!(pad_right("", 3), "   ");
    }
}
