use super::status::VisitStatus;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Datetime format used for every timestamp cell in the visit log.
pub const CELL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Sentinel stored in the Photo column when no photo was uploaded.
pub const PHOTO_NONE: &str = "N/A";

/// Identity of one visit session: which engineer at which site.
/// Matching is case-insensitive on both parts so a check-out typed as
/// "alice" still closes the visit opened as "Alice".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub site_id: String,
    pub name: String,
}

impl SessionKey {
    pub fn new(site_id: &str, name: &str) -> Self {
        Self {
            site_id: site_id.trim().to_string(),
            name: name.trim().to_string(),
        }
    }

    pub fn matches(&self, record: &VisitRecord) -> bool {
        record.site_id.eq_ignore_ascii_case(&self.site_id)
            && record.name.eq_ignore_ascii_case(&self.name)
    }
}

/// One row of the visit log: a single check-in/check-out session,
/// open (no check-out yet) or closed.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitRecord {
    pub timestamp: NaiveDateTime, // record creation, same instant as opened_at
    pub name: String,
    pub phone: String,
    pub site_id: String,
    pub rto: String,    // denormalized from the master directory at open
    pub region: String, // denormalized from the master directory at open
    pub ticket: String, // generated once at open, immutable
    pub remarks: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photo: String, // stored filename, or PHOTO_NONE
    pub opened_at: NaiveDateTime,
    pub closed_at: Option<NaiveDateTime>, // empty while the visit is open
    pub status: VisitStatus,
}

impl VisitRecord {
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    pub fn opened_date(&self) -> NaiveDate {
        self.opened_at.date()
    }

    /// Elapsed time between check-in and check-out, never negative.
    /// None while the visit is still open.
    pub fn dwell(&self) -> Option<Duration> {
        self.closed_at
            .map(|closed| (closed - self.opened_at).max(Duration::zero()))
    }

    pub fn opened_at_str(&self) -> String {
        self.opened_at.format(CELL_DATETIME_FORMAT).to_string()
    }

    pub fn closed_at_str(&self) -> String {
        match self.closed_at {
            Some(closed) => closed.format(CELL_DATETIME_FORMAT).to_string(),
            None => String::new(),
        }
    }
}
