//! Site photo store: flat directory of files keyed by site and timestamp.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

pub struct PhotoStore {
    dir: PathBuf,
}

impl PhotoStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Copy a photo into the store as `{site_id}_{YYYYMMDD_HHMMSS}.{ext}`
    /// and return the stored filename.
    pub fn store(&self, site_id: &str, at: NaiveDateTime, src: &Path) -> AppResult<String> {
        if !src.is_file() {
            return Err(AppError::Other(format!(
                "Photo file not found: {}",
                src.display()
            )));
        }

        let ext = src
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| "jpg".to_string());

        let name = format!(
            "{}_{}.{}",
            site_id.trim(),
            at.format("%Y%m%d_%H%M%S"),
            ext
        );

        fs::create_dir_all(&self.dir)?;
        fs::copy(src, self.dir.join(&name))?;
        Ok(name)
    }

    /// Stored photo filenames, sorted.
    pub fn list(&self) -> AppResult<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
