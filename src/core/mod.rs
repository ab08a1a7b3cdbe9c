pub mod input;
pub mod style;
pub mod table;

pub use input::{InputFormat, fill_table, read_records};
pub use style::{Plain, Styler};
pub use table::Table;
