//! File persistence for the card collection

mod file_storage;

pub use file_storage::{FileStorage, StorageError};
