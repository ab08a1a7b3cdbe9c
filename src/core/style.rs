//! Styling capability used by the colored write helpers of [`Table`](super::table::Table).

use ansi_term::{Colour, Style};

/// Anything able to wrap a piece of text in (non-printing) presentation markers.
///
/// The table never measures the styled output: widths are always taken from
/// the text before `apply` is called.
pub trait Styler {
    fn apply(&self, text: &str) -> String;
}

impl Styler for Style {
    fn apply(&self, text: &str) -> String {
        self.paint(text).to_string()
    }
}

impl Styler for Colour {
    fn apply(&self, text: &str) -> String {
        self.paint(text).to_string()
    }
}

impl<F> Styler for F
where
    F: Fn(&str) -> String,
{
    fn apply(&self, text: &str) -> String {
        self(text)
    }
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Styler for Plain {
    fn apply(&self, text: &str) -> String {
        text.to_string()
    }
}
