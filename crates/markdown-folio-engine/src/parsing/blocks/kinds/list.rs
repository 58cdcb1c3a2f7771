use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::lines::{indent_width, strip_indent};

/// Leading whitespace, a bullet or `digits.` marker, then whitespace or end
/// of line.
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([ \t]*)([-*+]|[0-9]{1,9}\.)([ \t].*)?$").expect("list marker pattern is valid")
});

/// Spacing after a marker wider than this means the content is indented
/// code-like text; the content column then sits one column past the marker.
const MAX_MARKER_PADDING: usize = 4;

/// A recognised list item line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker {
    pub ordered: bool,
    /// The ordinal of an ordered marker.
    pub number: Option<u64>,
    /// Column of the marker.
    pub indent: usize,
    /// Column where item content starts; continuation lines indented at
    /// least this far belong to the item.
    pub content_col: usize,
    /// The item's first line of content.
    pub content: String,
}

impl ListMarker {
    pub fn parse(line: &str) -> Option<Self> {
        let caps = LIST_MARKER.captures(line)?;
        let indent = indent_width(caps.get(1).map_or("", |m| m.as_str()));
        let marker = caps.get(2)?.as_str();
        let after = caps.get(3).map_or("", |m| m.as_str());

        let ordered = marker.ends_with('.');
        let number = if ordered {
            marker.trim_end_matches('.').parse().ok()
        } else {
            None
        };

        let padding = indent_width(after);
        let (padding, content) = if after.trim().is_empty() {
            (1, String::new())
        } else if padding > MAX_MARKER_PADDING {
            (1, strip_indent(after, 1))
        } else {
            (padding, after.trim_start().to_string())
        };

        Some(Self {
            ordered,
            number,
            indent,
            content_col: indent + marker.len() + padding,
            content,
        })
    }

    /// Whether `other` continues the same list as a sibling item of `self`.
    pub fn is_sibling(&self, other: &ListMarker) -> bool {
        self.ordered == other.ordered && other.indent < self.content_col
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bullet_marker() {
        let m = ListMarker::parse("- item").unwrap();
        assert!(!m.ordered);
        assert_eq!(m.number, None);
        assert_eq!(m.indent, 0);
        assert_eq!(m.content_col, 2);
        assert_eq!(m.content, "item");
    }

    #[test]
    fn ordered_marker() {
        let m = ListMarker::parse("  12. twelve").unwrap();
        assert!(m.ordered);
        assert_eq!(m.number, Some(12));
        assert_eq!(m.indent, 2);
        assert_eq!(m.content_col, 6);
        assert_eq!(m.content, "twelve");
    }

    #[test]
    fn all_bullet_characters() {
        for line in ["- a", "* a", "+ a"] {
            assert!(ListMarker::parse(line).is_some(), "{line}");
        }
    }

    #[test]
    fn marker_requires_whitespace() {
        assert!(ListMarker::parse("-item").is_none());
        assert!(ListMarker::parse("1.5 apples").is_none());
        assert!(ListMarker::parse("*emphasis*").is_none());
    }

    #[test]
    fn empty_item() {
        let m = ListMarker::parse("-").unwrap();
        assert_eq!(m.content, "");
        assert_eq!(m.content_col, 2);
    }

    #[test]
    fn wide_padding_keeps_extra_spaces_in_content() {
        let m = ListMarker::parse("-      code").unwrap();
        assert_eq!(m.content_col, 2);
        assert_eq!(m.content, "     code");
    }

    #[test]
    fn siblings_share_kind() {
        let a = ListMarker::parse("- a").unwrap();
        assert!(a.is_sibling(&ListMarker::parse(" - b").unwrap()));
        assert!(!a.is_sibling(&ListMarker::parse("1. b").unwrap()));
        assert!(!a.is_sibling(&ListMarker::parse("  - nested").unwrap()));
    }
}
