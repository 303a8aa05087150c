// Text formatters
//
// Shared width-aware helpers for laying out text in fixed-size cells.

use unicode_width::UnicodeWidthChar;

/// Display width of a single character (control characters count as zero)
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Display width of a string
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Split `text` into rows of at most `width` display columns, breaking at
/// any character (no word boundaries). Text is kept verbatim.
///
/// # Examples
/// ```ignore
/// assert_eq!(break_anywhere("betway-ABC123", 6), vec!["betway", "-ABC12", "3"]);
/// ```
pub fn break_anywhere(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for c in text.chars() {
        let w = char_width(c);
        if row_width + w > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        row.push(c);
        row_width += w;
    }
    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

/// Word-wrap `text` to rows of at most `width` columns. Words longer than a
/// row fall back to [`break_anywhere`].
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut rows: Vec<String> = Vec::new();
    let mut row = String::new();

    for word in text.split_whitespace() {
        let w = display_width(word);
        let row_width = display_width(&row);
        if !row.is_empty() && row_width + 1 + w <= width {
            row.push(' ');
            row.push_str(word);
            continue;
        }
        if !row.is_empty() {
            rows.push(std::mem::take(&mut row));
        }
        if w <= width {
            row.push_str(word);
        } else {
            let mut pieces = break_anywhere(word, width);
            row = pieces.pop().unwrap_or_default();
            rows.extend(pieces);
        }
    }
    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breaks_mid_token() {
        assert_eq!(
            break_anywhere("betway-ABC123-converted", 10),
            vec!["betway-ABC", "123-conver", "ted"]
        );
    }

    #[test]
    fn short_text_is_one_row() {
        assert_eq!(break_anywhere("abc", 10), vec!["abc"]);
        assert_eq!(break_anywhere("", 10), vec![""]);
    }

    #[test]
    fn spaces_are_preserved() {
        assert_eq!(break_anywhere("a   b", 2), vec!["a ", "  ", "b"]);
    }

    #[test]
    fn wide_characters_respect_columns() {
        // Each CJK character is two columns wide
        assert_eq!(break_anywhere("日本語", 4), vec!["日本", "語"]);
        assert_eq!(display_width("日本語"), 6);
    }

    #[test]
    fn zero_width_returns_text_unchanged() {
        assert_eq!(break_anywhere("abc", 0), vec!["abc"]);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_words("Enter your bet slip code", 12),
            vec!["Enter your", "bet slip", "code"]
        );
    }

    #[test]
    fn overlong_words_are_split() {
        assert_eq!(wrap_words("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
    }
}
