//! Master site directory lookup.
//!
//! The directory is a reference CSV maintained outside this tool, with at
//! least `Site ID`, `RTO` and `Region` columns. Lookups never fail: a
//! missing file, a malformed file or an unknown site all resolve to empty
//! strings, which downstream code tolerates. The file is re-read on every
//! lookup so an updated directory is picked up without restarting.

use std::path::{Path, PathBuf};

pub struct MasterDirectory {
    path: PathBuf,
}

impl MasterDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a site id to its (RTO, Region) pair.
    pub fn lookup(&self, site_id: &str) -> (String, String) {
        let site_id = site_id.trim();
        if site_id.is_empty() || !self.path.exists() {
            return (String::new(), String::new());
        }

        let mut rdr = match csv::Reader::from_path(&self.path) {
            Ok(rdr) => rdr,
            Err(_) => return (String::new(), String::new()),
        };

        let (site_col, rto_col, region_col) = match rdr.headers() {
            Ok(headers) => {
                let find = |wanted: &str| {
                    headers
                        .iter()
                        .position(|h| h.trim().eq_ignore_ascii_case(wanted))
                };
                match (find("Site ID"), find("RTO"), find("Region")) {
                    (Some(s), Some(rt), Some(rg)) => (s, rt, rg),
                    _ => return (String::new(), String::new()),
                }
            }
            Err(_) => return (String::new(), String::new()),
        };

        for row in rdr.records().flatten() {
            let candidate = row.get(site_col).unwrap_or("").trim();
            if candidate.eq_ignore_ascii_case(site_id) {
                return (
                    row.get(rto_col).unwrap_or("").trim().to_string(),
                    row.get(region_col).unwrap_or("").trim().to_string(),
                );
            }
        }

        (String::new(), String::new())
    }
}
