//! Frontmatter extraction.
//!
//! Frontmatter is a block of flat `key: value` lines at the very start of a
//! post, fenced by `---` lines:
//!
//! ```markdown
//! ---
//! title: Hello
//! date: 2024-01-01
//! ---
//! # Heading
//! ```
//!
//! Extraction never fails. A missing opening or closing delimiter leaves
//! the frontmatter empty and the whole text as body.

use std::collections::BTreeMap;

use serde::Serialize;

/// The line that opens and closes a frontmatter block.
pub const DELIMITER: &str = "---";

/// Metadata read from a post's frontmatter.
///
/// Known keys get their own fields; every other key is kept verbatim in
/// `extra`. Nothing is defaulted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Frontmatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Frontmatter {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.date.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.extra.is_empty()
    }

    /// Looks up any key, known or not. `key` is matched case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        match key.as_str() {
            "title" => self.title.as_deref(),
            "date" => self.date.as_deref(),
            "category" => self.category.as_deref(),
            "description" => self.description.as_deref(),
            other => self.extra.get(other).map(String::as_str),
        }
    }

    /// Stores one pair; a repeated key overwrites the earlier value.
    fn set(&mut self, key: String, value: String) {
        match key.as_str() {
            "title" => self.title = Some(value),
            "date" => self.date = Some(value),
            "category" => self.category = Some(value),
            "description" => self.description = Some(value),
            _ => {
                self.extra.insert(key, value);
            }
        }
    }
}

/// Result of frontmatter extraction.
#[derive(Debug, Clone)]
pub struct FrontmatterResult<'a> {
    frontmatter: Frontmatter,
    body: &'a str,
    body_line: usize,
    had_delimiters: bool,
}

impl<'a> FrontmatterResult<'a> {
    fn without_frontmatter(body: &'a str) -> Self {
        Self {
            frontmatter: Frontmatter::default(),
            body,
            body_line: 0,
            had_delimiters: false,
        }
    }

    pub fn frontmatter(&self) -> &Frontmatter {
        &self.frontmatter
    }

    pub fn into_frontmatter(self) -> Frontmatter {
        self.frontmatter
    }

    /// Everything after the closing delimiter.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Zero-based line index in the source text where the body starts.
    pub fn body_line(&self) -> usize {
        self.body_line
    }

    /// Whether a complete `---` … `---` block was found, even an empty one.
    pub fn had_delimiters(&self) -> bool {
        self.had_delimiters
    }
}

/// Splits `text` into frontmatter and body.
pub fn extract_frontmatter(text: &str) -> FrontmatterResult<'_> {
    let mut lines = text.split_inclusive('\n');
    let mut offset = match lines.next() {
        Some(first) if is_delimiter(first) => first.len(),
        _ => return FrontmatterResult::without_frontmatter(text),
    };

    let mut frontmatter = Frontmatter::default();
    for (index, line) in lines.enumerate() {
        offset += line.len();
        if is_delimiter(line) {
            return FrontmatterResult {
                frontmatter,
                body: &text[offset..],
                body_line: index + 2,
                had_delimiters: true,
            };
        }
        if let Some((key, value)) = parse_pair(line) {
            frontmatter.set(key, value);
        }
    }

    log::trace!("frontmatter opened but never closed; treating the whole text as body");
    FrontmatterResult::without_frontmatter(text)
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Parses one `key: value` line. Lines without a colon or with an empty key
/// yield nothing.
fn parse_pair(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    Some((key, unquote(value.trim()).to_string()))
}

/// Strips one pair of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|&q| {
            value
                .strip_prefix(q)
                .and_then(|v| v.strip_suffix(q))
        })
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn extracts_known_and_extra_keys() {
        let text = "---\ntitle: \"Hello: World\"\nDate: 2024-01-01\ntags: rust, web\n---\n# Body\n";
        let result = extract_frontmatter(text);

        let fm = result.frontmatter();
        assert_eq!(fm.title.as_deref(), Some("Hello: World"));
        assert_eq!(fm.date.as_deref(), Some("2024-01-01"));
        assert_eq!(fm.category, None);
        assert_eq!(fm.get("TAGS"), Some("rust, web"));
        assert_eq!(result.body(), "# Body\n");
        assert_eq!(result.body_line(), 5);
        assert!(result.had_delimiters());
    }

    #[test]
    fn no_opening_delimiter_keeps_everything_as_body() {
        let text = "# Title\n---\n";
        let result = extract_frontmatter(text);
        assert!(result.frontmatter().is_empty());
        assert_eq!(result.body(), text);
        assert_eq!(result.body_line(), 0);
    }

    #[test]
    fn unclosed_block_is_not_frontmatter() {
        let text = "---\ntitle: Lost\n\nSome text";
        let result = extract_frontmatter(text);
        assert!(result.frontmatter().is_empty());
        assert!(!result.had_delimiters());
        assert_eq!(result.body(), text);
    }

    #[test]
    fn tolerates_crlf_and_trailing_whitespace() {
        let result = extract_frontmatter("---  \r\ntitle: T\r\n---\r\nbody");
        assert_eq!(result.frontmatter().title.as_deref(), Some("T"));
        assert_eq!(result.body(), "body");
    }

    #[test]
    fn body_starts_after_padded_opening_line() {
        let result = extract_frontmatter("---    \nk: v\n---\n\n# After\n");
        assert_eq!(result.frontmatter().get("k"), Some("v"));
        assert_eq!(result.body(), "\n# After\n");
        assert_eq!(result.body_line(), 3);
    }

    #[test]
    fn last_repeated_key_wins_and_junk_is_ignored() {
        let result = extract_frontmatter("---\ntitle: One\nno colon here\n: empty\ntitle: Two\n---\n");
        let fm = result.frontmatter();
        assert_eq!(fm.title.as_deref(), Some("Two"));
        assert!(fm.extra.is_empty());
        assert_eq!(result.body(), "");
    }

    #[rstest]
    #[case("\"quoted\"", "quoted")]
    #[case("'single'", "single")]
    #[case("\"mismatched'", "\"mismatched'")]
    #[case("\"\"inner\"\"", "\"inner\"")]
    #[case("plain", "plain")]
    fn strips_one_pair_of_quotes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(unquote(raw), expected);
    }
}
