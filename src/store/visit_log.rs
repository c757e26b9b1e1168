//! CSV-backed visit log store.
//!
//! The whole dataset lives in one header-first CSV file: `load` reads every
//! row into memory, `save` rewrites the file in full through a temp file so
//! readers never observe a partial write. A sibling lock file serializes one
//! read-modify-write cycle across processes.

use crate::errors::{AppError, AppResult};
use crate::models::status::VisitStatus;
use crate::models::visit::{CELL_DATETIME_FORMAT, VisitRecord};
use chrono::NaiveDateTime;
use csv::StringRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical column layout of the persisted visit log.
pub const HEADERS: [&str; 14] = [
    "Timestamp",
    "FE/Contractor Name",
    "Phone Number",
    "Site ID",
    "RTO",
    "Region",
    "TT Number",
    "Remarks",
    "Latitude",
    "Longitude",
    "Photo",
    "Site Visit Time",
    "Activity Complete Time",
    "Status",
];

pub struct VisitLog {
    path: PathBuf,
}

impl VisitLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a header-only file. Used by `init`; refuses nothing, an
    /// existing log is truncated only via the same atomic rewrite as save.
    pub fn create_empty(&self) -> AppResult<()> {
        self.save(&[])
    }

    /// Read the full dataset in file order.
    /// A missing file is an empty dataset; an unreadable or malformed file
    /// is `StorageUnavailable` so the caller can surface it instead of
    /// silently dropping data.
    pub fn load(&self) -> AppResult<Vec<VisitRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::Reader::from_path(&self.path).map_err(|e| {
            AppError::StorageUnavailable(format!("cannot open {}: {e}", self.path.display()))
        })?;

        let headers = rdr
            .headers()
            .map_err(|e| AppError::StorageUnavailable(format!("cannot read header row: {e}")))?;

        if headers.iter().map(str::trim).ne(HEADERS.iter().copied()) {
            return Err(AppError::StorageUnavailable(format!(
                "unexpected column layout in {}",
                self.path.display()
            )));
        }

        let mut out = Vec::new();
        for (i, row) in rdr.records().enumerate() {
            let row = row.map_err(|e| {
                AppError::StorageUnavailable(format!("corrupt row {}: {e}", i + 2))
            })?;
            out.push(map_row(&row, i + 2)?);
        }
        Ok(out)
    }

    /// Rewrite the full dataset. The new content lands in a temp file first
    /// and replaces the log with a single rename, so a failed write leaves
    /// the previous file intact and the in-memory set untouched.
    pub fn save(&self, records: &[VisitRecord]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.sibling("tmp");
        let result = write_all(&tmp, records)
            .and_then(|_| fs::rename(&tmp, &self.path).map_err(AppError::from));

        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result.map_err(|e| {
            AppError::StorageUnavailable(format!("cannot write {}: {e}", self.path.display()))
        })
    }

    /// Run `f` while holding the log's lock file, serializing the whole
    /// load → mutate → save cycle against other processes on this host.
    pub fn with_exclusive_access<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&Self) -> AppResult<T>,
    {
        let _guard = LockGuard::acquire(self.sibling("lock"))?;
        f(self)
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "visit_log.csv".to_string());
        self.path.with_file_name(format!("{name}.{suffix}"))
    }
}

fn write_all(path: &Path, records: &[VisitRecord]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(HEADERS)?;
    for record in records {
        wtr.write_record(record_to_row(record))?;
    }
    wtr.flush()?;
    Ok(())
}

fn record_to_row(r: &VisitRecord) -> Vec<String> {
    vec![
        r.timestamp.format(CELL_DATETIME_FORMAT).to_string(),
        r.name.clone(),
        r.phone.clone(),
        r.site_id.clone(),
        r.rto.clone(),
        r.region.clone(),
        r.ticket.clone(),
        r.remarks.clone(),
        float_cell(r.latitude),
        float_cell(r.longitude),
        r.photo.clone(),
        r.opened_at_str(),
        r.closed_at_str(),
        r.status.as_cell().to_string(),
    ]
}

fn map_row(row: &StringRecord, line: usize) -> AppResult<VisitRecord> {
    let cell = |idx: usize| row.get(idx).unwrap_or("").trim().to_string();

    let status = VisitStatus::from_cell(&cell(13)).ok_or_else(|| {
        AppError::StorageUnavailable(format!("row {line}: invalid status '{}'", cell(13)))
    })?;

    let closed_at = parse_optional_datetime(&cell(12), line, "Activity Complete Time")?;

    Ok(VisitRecord {
        timestamp: parse_datetime(&cell(0), line, "Timestamp")?,
        name: cell(1),
        phone: cell(2),
        site_id: cell(3),
        rto: cell(4),
        region: cell(5),
        ticket: cell(6),
        remarks: cell(7),
        latitude: parse_float(&cell(8), line, "Latitude")?,
        longitude: parse_float(&cell(9), line, "Longitude")?,
        photo: cell(10),
        opened_at: parse_datetime(&cell(11), line, "Site Visit Time")?,
        closed_at,
        status,
    })
}

fn float_cell(v: Option<f64>) -> String {
    match v {
        Some(f) => f.to_string(),
        None => String::new(),
    }
}

fn parse_datetime(s: &str, line: usize, col: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, CELL_DATETIME_FORMAT).map_err(|_| {
        AppError::StorageUnavailable(format!("row {line}: invalid {col} '{s}'"))
    })
}

fn parse_optional_datetime(s: &str, line: usize, col: &str) -> AppResult<Option<NaiveDateTime>> {
    if s.is_empty() {
        Ok(None)
    } else {
        parse_datetime(s, line, col).map(Some)
    }
}

fn parse_float(s: &str, line: usize, col: &str) -> AppResult<Option<f64>> {
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<f64>()
        .map(Some)
        .map_err(|_| AppError::StorageUnavailable(format!("row {line}: invalid {col} '{s}'")))
}

/// Lock file guard: created with `create_new` so only one holder exists,
/// removed on drop. Contention maps to `StorageUnavailable` — the caller
/// reports it and the user retries, no queueing.
struct LockGuard {
    path: PathBuf,
}

impl LockGuard {
    fn acquire(path: PathBuf) -> AppResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(_) => Ok(Self { path }),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Err(
                AppError::StorageUnavailable(format!(
                    "visit log is locked by another process ({})",
                    path.display()
                )),
            ),
            Err(e) => Err(AppError::from(e)),
        }
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
