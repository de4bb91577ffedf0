//! Persistence layer — flat JSON file holding the quote and poem collections.

pub mod file;
pub mod model;

pub use file::StoreFile;
pub use model::{Entry, EntryKind, NewEntry, Store};
