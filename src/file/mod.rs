// src/file/mod.rs
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::catalog::Catalog;

// Core trait for file operations
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T>;
    fn save(&self, data: &T, path: &Path) -> Result<()>;
}

/// Reads and writes catalog files in RON. The application ships with a
/// built-in catalog; this handler backs the File menu override and export.
#[derive(Debug)]
pub struct CatalogFileHandler;

impl CatalogFileHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FileHandler<Catalog> for CatalogFileHandler {
    fn load(&self, path: &Path) -> Result<Catalog> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        ron::from_str(&content).context("Failed to parse catalog file")
    }

    fn save(&self, data: &Catalog, path: &Path) -> Result<()> {
        let content = ron::ser::to_string_pretty(
            data,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(4)
                .separate_tuple_members(true)
        )?;
        fs::write(path, content)?;
        Ok(())
    }
}
