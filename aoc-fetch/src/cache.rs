//! Input cache for storing puzzle inputs locally

use crate::coordinate::Coordinate;
use crate::error::CacheError;
use std::fs;
use std::path::PathBuf;

/// File-based cache for puzzle inputs
///
/// Directory structure: `{base_dir}/{year}/day/{day}/input`
pub struct InputCache {
    base_dir: PathBuf,
}

impl InputCache {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the cache path for a coordinate
    pub fn cache_path(&self, coordinate: &Coordinate) -> PathBuf {
        self.base_dir
            .join(coordinate.year())
            .join("day")
            .join(coordinate.day())
            .join("input")
    }

    /// Check if input is cached
    ///
    /// Existence alone counts; contents are never inspected.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.cache_path(coordinate).exists()
    }

    /// Store input in cache, creating any missing parent directories
    pub fn put(&self, coordinate: &Coordinate, input: &[u8]) -> Result<PathBuf, CacheError> {
        let path = self.cache_path(coordinate);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CacheError::DirCreation(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        fs::write(&path, input)?;
        Ok(path)
    }
}
