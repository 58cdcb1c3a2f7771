use std::sync::LazyLock;

use regex::Regex;

/// Three or more of the same `-`, `*` or `_`, whitespace allowed anywhere.
static THEMATIC_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})$")
        .expect("thematic break pattern is valid")
});

/// Horizontal rule block type.
pub struct ThematicBreak;

impl ThematicBreak {
    pub fn matches(line: &str) -> bool {
        THEMATIC_BREAK.is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("---", true)]
    #[case("***", true)]
    #[case("___", true)]
    #[case(" - - - ", true)]
    #[case("*****", true)]
    #[case("--", false)]
    #[case("-*-", false)]
    #[case("--- x", false)]
    #[case("- item", false)]
    fn matches_cases(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(ThematicBreak::matches(line), expected);
    }
}
