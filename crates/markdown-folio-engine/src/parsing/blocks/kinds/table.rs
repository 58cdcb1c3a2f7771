use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::types::Alignment;

/// Cells of hyphens with optional colons, separated by pipes.
static DELIMITER_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*\|?[ \t]*:?-+:?[ \t]*(?:\|[ \t]*:?-+:?[ \t]*)*\|?[ \t]*$")
        .expect("table delimiter pattern is valid")
});

/// Pipe table block type with owned delimiter constants.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';
    pub const ALIGN: char = ':';

    /// Whether `line` is a delimiter row such as `| :-- | :-: | --: |`.
    ///
    /// At least one pipe is required so that a bare `---` under a line that
    /// happens to contain a pipe stays a horizontal rule.
    pub fn is_delimiter_row(line: &str) -> bool {
        line.contains(Self::PIPE) && DELIMITER_ROW.is_match(line)
    }

    /// Whether `line` opens a table given the line after it.
    pub fn starts_table(line: &str, next: Option<&str>) -> bool {
        line.contains(Self::PIPE) && next.is_some_and(Self::is_delimiter_row)
    }

    /// Whether `line` can continue a table body.
    pub fn is_row(line: &str) -> bool {
        !line.trim().is_empty() && line.contains(Self::PIPE)
    }

    /// Splits a row into trimmed cell texts.
    ///
    /// Leading and trailing pipes are optional. `\|` does not split; it is
    /// kept as-is so the inline scanner turns it into a literal pipe.
    pub fn split_cells(line: &str) -> Vec<String> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = match t.strip_suffix(Self::PIPE) {
            Some(inner) if !inner.ends_with('\\') => inner,
            _ => t,
        };

        let mut cells = vec![];
        let mut cell = String::new();
        let mut chars = t.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    cell.push(c);
                    if let Some(next) = chars.next() {
                        cell.push(next);
                    }
                }
                Self::PIPE => cells.push(std::mem::take(&mut cell)),
                _ => cell.push(c),
            }
        }
        cells.push(cell);
        cells.into_iter().map(|c| c.trim().to_string()).collect()
    }

    /// Alignment for one delimiter cell.
    pub fn alignment(cell: &str) -> Alignment {
        let cell = cell.trim();
        match (cell.starts_with(Self::ALIGN), cell.ends_with(Self::ALIGN)) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        }
    }

    /// Pads `row` with defaults or truncates it to exactly `width` cells.
    pub fn fit_row<T: Default>(mut row: Vec<T>, width: usize) -> Vec<T> {
        row.resize_with(width, T::default);
        row
    }
}
