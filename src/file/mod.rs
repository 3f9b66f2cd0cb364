// src/file/mod.rs
use anyhow::Result;
use std::path::Path;

pub mod export;

pub use export::{JsonResultHandler, EXPORT_EXTENSION, EXPORT_FILE_NAME};

// Core trait for file operations
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T>;
    fn save(&self, data: &T, path: &Path) -> Result<()>;
}
