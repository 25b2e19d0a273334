//! Read-only host data.
mod text;

pub use text::TextTable;
