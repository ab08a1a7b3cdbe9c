pub mod colors;
pub mod path;

pub use colors::parse_style;
