/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';
    /// Indentation allowed before the prefix.
    pub const MAX_INDENT: usize = 3;

    /// Strips one level of blockquote prefix from a line.
    ///
    /// Removes leading spaces, the `>` and at most one following space.
    /// Returns `None` if the line is not a blockquote line.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let trimmed = line.trim_start_matches(' ');
        if line.len() - trimmed.len() > Self::MAX_INDENT {
            return None;
        }
        let rest = trimmed.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
