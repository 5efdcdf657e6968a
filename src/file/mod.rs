// src/file/mod.rs
use anyhow::Result;
use std::path::Path;

pub mod snapshot;

pub use snapshot::{StoreSnapshot, SnapshotFileHandler, snapshot_file_name};

// Core trait for file operations
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T>;
    fn save(&self, data: &T, path: &Path) -> Result<()>;
}
