/// ATX heading block type with owned delimiter constants.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;
    /// Indentation allowed before the opening `#` run.
    pub const MAX_INDENT: usize = 3;

    /// Parses a heading line into its level and raw (not yet inline-parsed)
    /// text.
    ///
    /// The `#` run must be followed by a space, a tab or the end of the line.
    /// A closing run of `#` is dropped when whitespace separates it from the
    /// text, so `# C#` keeps its `#` but `# Title ##` does not.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let trimmed = line.trim_start_matches(' ');
        if line.len() - trimmed.len() > Self::MAX_INDENT {
            return None;
        }
        let level = trimmed.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &trimmed[level..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }
        Some((level as u8, Self::strip_closing(rest.trim())))
    }

    fn strip_closing(text: &str) -> &str {
        let without = text.trim_end_matches(Self::MARKER);
        if without.len() == text.len() {
            text
        } else if without.is_empty() {
            without
        } else if without.ends_with([' ', '\t']) {
            without.trim_end()
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("# Hello World", Some((1, "Hello World")))]
    #[case("###### six", Some((6, "six")))]
    #[case("####### seven", None)]
    #[case("#hashtag", None)]
    #[case("   ## indented", Some((2, "indented")))]
    #[case("    # too deep", None)]
    #[case("## Title ##", Some((2, "Title")))]
    #[case("# C#", Some((1, "C#")))]
    #[case("#", Some((1, "")))]
    #[case("#\tTabbed", Some((1, "Tabbed")))]
    fn parse_cases(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::parse(line), expected);
    }
}
