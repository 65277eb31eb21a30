// Whitespace-based indentation levels for editor lines

pub mod columns;
pub mod map;

pub use columns::num_columns;
pub use map::{IndentEntry, IndentOptions, IndentationMap};
