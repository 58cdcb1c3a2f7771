/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block when no
/// other block opener matches.
pub struct Paragraph;

impl Paragraph {
    /// Joins paragraph lines into one logical text run.
    ///
    /// Each line is trimmed and lines are separated by a single space, never
    /// a literal newline.
    pub fn join<S: AsRef<str>>(lines: &[S]) -> String {
        lines
            .iter()
            .map(|l| l.as_ref().trim())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
