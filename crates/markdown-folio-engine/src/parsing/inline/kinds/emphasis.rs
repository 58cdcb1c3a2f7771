use crate::parsing::inline::{cursor::run_len_at, types::EmphasisStrength};

use super::{code_span::CodeSpan, link::Link};

/// Emphasis inline type (`*`, `_` runs) with owned delimiter constants.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    /// Longest delimiter run that carries meaning (`***` = strong + emphasis).
    pub const MAX_RUN: usize = 3;

    pub fn is_delimiter(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }

    /// Strength for a matched delimiter run of length `k` (1..=3).
    pub fn strength(k: usize) -> EmphasisStrength {
        match k {
            1 => EmphasisStrength::Weak,
            2 => EmphasisStrength::Strong,
            _ => EmphasisStrength::Both,
        }
    }
}

/// Strikethrough inline type with owned delimiter constants.
pub struct Strikethrough;

impl Strikethrough {
    pub const TILDE: u8 = b'~';
    pub const RUN: usize = 2;
}

/// Whether a delimiter run of `d` spanning `start..end` may open a span.
///
/// The next character must be non-whitespace; `_` may not open inside a
/// word.
pub fn can_open(s: &str, start: usize, end: usize, d: u8) -> bool {
    let Some(after) = s[end..].chars().next() else {
        return false;
    };
    if after.is_whitespace() {
        return false;
    }
    if d == Emphasis::UNDERSCORE
        && s[..start].chars().next_back().is_some_and(char::is_alphanumeric)
    {
        return false;
    }
    true
}

/// Finds the nearest valid closer for a `k`-long run of `d` whose content
/// starts at byte `from`.
///
/// A candidate run of length `m` closes when `m == k`, or when it is a
/// longer run of at least three (its last `k` characters close, the rest
/// stays with the content). The closer must follow non-whitespace, the
/// content must not be empty, and `_` may not close inside a word. Escapes,
/// code spans and whole links or images are skipped. Returns the byte index of the `k` closing
/// characters.
pub fn find_closer(s: &str, from: usize, d: u8, k: usize) -> Option<usize> {
    let b = s.as_bytes();
    let mut j = from;
    while j < b.len() {
        match b[j] {
            b'\\' => j += 2,
            CodeSpan::TICK => j = CodeSpan::skip(s, j),
            Link::LABEL_OPEN | Link::IMAGE_BANG => j = Link::skip(s, j).unwrap_or(j + 1),
            x if x == d => {
                let m = run_len_at(b, j, d);
                let close = j + m - k.min(m);
                if j > from && (m == k || (m >= Emphasis::MAX_RUN && m > k)) && closes(s, j, j + m, d) {
                    return Some(close);
                }
                j += m;
            }
            _ => j += 1,
        }
    }
    None
}

fn closes(s: &str, start: usize, end: usize, d: u8) -> bool {
    let Some(before) = s[..start].chars().next_back() else {
        return false;
    };
    if before.is_whitespace() {
        return false;
    }
    if d == Emphasis::UNDERSCORE && s[end..].chars().next().is_some_and(char::is_alphanumeric) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_needs_following_text() {
        assert!(can_open("*a*", 0, 1, b'*'));
        assert!(!can_open("* a*", 0, 1, b'*'));
        assert!(!can_open("*", 0, 1, b'*'));
    }

    #[test]
    fn underscore_is_not_intraword() {
        assert!(!can_open("snake_case_name", 5, 6, b'_'));
        assert_eq!(find_closer("_a_b", 1, b'_', 1), None);
    }

    #[test]
    fn finds_nearest_single_closer() {
        assert_eq!(find_closer("*a* b*", 1, b'*', 1), Some(2));
    }

    #[test]
    fn single_closer_skips_double_runs() {
        assert_eq!(find_closer("*a **b** c*", 1, b'*', 1), Some(10));
    }

    #[test]
    fn longer_run_closes_with_its_tail() {
        // `**bold *it***`: the trailing `***` closes the strong span with its last two
        assert_eq!(find_closer("**bold *it***", 2, b'*', 2), Some(11));
    }

    #[test]
    fn closer_skips_escapes_and_code() {
        assert_eq!(find_closer(r"*a \* b*", 1, b'*', 1), Some(7));
        assert_eq!(find_closer("*a `*` b*", 1, b'*', 1), Some(8));
    }

    #[test]
    fn closer_skips_links_and_images() {
        assert_eq!(find_closer("*a [b*](c)", 1, b'*', 1), None);
        assert_eq!(find_closer("*see [x](http://a/*b) now*", 1, b'*', 1), Some(25));
        assert_eq!(find_closer("*a ![*](p) b*", 1, b'*', 1), Some(12));
        assert_eq!(find_closer("*a [b* c", 1, b'*', 1), Some(5));
    }

    #[test]
    fn closer_after_whitespace_is_rejected() {
        assert_eq!(find_closer("*a *", 1, b'*', 1), None);
    }

    #[test]
    fn strength_by_run_length() {
        assert_eq!(Emphasis::strength(1), EmphasisStrength::Weak);
        assert_eq!(Emphasis::strength(2), EmphasisStrength::Strong);
        assert_eq!(Emphasis::strength(3), EmphasisStrength::Both);
    }
}
