/// A single table cell: the text to print and the width it occupies on screen.
///
/// The width is kept apart from the text so that styled text (which carries
/// invisible ANSI escape sequences) can still be padded correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
    width: usize,
}

impl Cell {
    /// Cell whose width is the number of code points in `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = char_width(&text);
        Self { text, width }
    }

    /// Cell with an explicit visible width, independent of `text`.
    pub fn with_width(text: impl Into<String>, width: usize) -> Self {
        Self {
            text: text.into(),
            width,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

/// A committed line of cells.
pub type Row = Vec<Cell>;

/// Width of `s` counted in Unicode code points.
///
/// Wide East-Asian characters and combining marks are not special-cased.
pub fn char_width(s: &str) -> usize {
    s.chars().count()
}
