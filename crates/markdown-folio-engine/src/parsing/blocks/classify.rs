use crate::parsing::lines::is_blank;

use super::kinds::{
    BlockQuote, CodeFence, FenceSig, Heading, ListMarker, Table, ThematicBreak,
};

/// Classification of a single line containing only local facts plus one
/// line of lookahead (needed to recognise a table header).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    ThematicBreak,
    FenceOpen {
        sig: FenceSig,
        language: Option<String>,
    },
    Heading {
        level: u8,
        text: String,
    },
    /// A `>` line; `rest` is the line with one quote level stripped.
    BlockQuote {
        rest: String,
    },
    ListItem(ListMarker),
    /// A table header row; the next line is its delimiter row.
    TableStart,
    /// Anything else: paragraph text.
    Text,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Rules are tried in priority order and the first match wins: blank,
    /// horizontal rule, fence, heading, blockquote, list item, table header,
    /// paragraph text.
    pub fn classify(&self, line: &str, next: Option<&str>) -> LineClass {
        if is_blank(line) {
            return LineClass::Blank;
        }
        if ThematicBreak::matches(line) {
            return LineClass::ThematicBreak;
        }
        if let Some((sig, info)) = CodeFence::sig(line) {
            return LineClass::FenceOpen {
                sig,
                language: CodeFence::language(info),
            };
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading {
                level,
                text: text.to_string(),
            };
        }
        if let Some(rest) = BlockQuote::strip_prefix(line) {
            return LineClass::BlockQuote {
                rest: rest.to_string(),
            };
        }
        if let Some(marker) = ListMarker::parse(line) {
            return LineClass::ListItem(marker);
        }
        if Table::starts_table(line, next) {
            return LineClass::TableStart;
        }
        LineClass::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::kinds::FenceKind;

    fn classify(line: &str) -> LineClass {
        MarkdownLineClassifier.classify(line, None)
    }

    #[test]
    fn blank_lines() {
        assert_eq!(classify(""), LineClass::Blank);
        assert_eq!(classify("  \t "), LineClass::Blank);
    }

    #[test]
    fn rule_beats_list_item() {
        assert_eq!(classify("- - -"), LineClass::ThematicBreak);
        assert_eq!(classify("* * *"), LineClass::ThematicBreak);
    }

    #[test]
    fn fence_with_language() {
        assert_eq!(
            classify("```python"),
            LineClass::FenceOpen {
                sig: FenceSig {
                    kind: FenceKind::Backticks,
                    len: 3
                },
                language: Some("python".into()),
            }
        );
    }

    #[test]
    fn heading_line() {
        assert_eq!(
            classify("## Two"),
            LineClass::Heading {
                level: 2,
                text: "Two".into()
            }
        );
    }

    #[test]
    fn quote_line() {
        assert_eq!(
            classify("> quoted"),
            LineClass::BlockQuote {
                rest: "quoted".into()
            }
        );
    }

    #[test]
    fn list_lines() {
        assert!(matches!(classify("- a"), LineClass::ListItem(_)));
        assert!(matches!(classify("3. c"), LineClass::ListItem(_)));
    }

    #[test]
    fn table_needs_delimiter_lookahead() {
        let c = MarkdownLineClassifier;
        assert_eq!(c.classify("| a | b |", Some("|---|---|")), LineClass::TableStart);
        assert_eq!(c.classify("| a | b |", Some("| c | d |")), LineClass::Text);
        assert_eq!(c.classify("| a | b |", None), LineClass::Text);
    }

    #[test]
    fn plain_text() {
        assert_eq!(classify("just words"), LineClass::Text);
        assert_eq!(classify("#nospace"), LineClass::Text);
    }
}
