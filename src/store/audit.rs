//! Append-only operation log.
//!
//! Every state-changing command appends one tab-separated line
//! (timestamp, operation, target, message) next to the visit log.
//! Writes are best-effort at the call sites: a failed audit line warns
//! and never aborts the operation it describes.

use crate::errors::AppResult;
use chrono::Local;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Audit file that belongs to a given visit log path
/// (`visit_log.csv` → `visit_log_audit.log`).
pub fn audit_file_for(visit_log: &str) -> PathBuf {
    let path = Path::new(visit_log);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "fieldlog".to_string());
    path.with_file_name(format!("{stem}_audit.log"))
}

pub fn write(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(
        file,
        "{}\t{}\t{}\t{}",
        Local::now().to_rfc3339(),
        operation,
        target,
        message
    )?;
    Ok(())
}

/// All audit lines, newest first.
pub fn read_newest_first(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    lines.reverse();
    Ok(lines)
}
