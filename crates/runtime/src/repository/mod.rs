//! Persistent variable store and save files.
mod error;
mod file;
mod memory;

pub use error::{Result, SaveError};
pub use file::SaveFile;
pub use memory::MemoryVariableStore;
