pub mod cell;

pub use cell::{Cell, Row, char_width};
