//! Visit session lifecycle: pairing a check-in with a later check-out.
//!
//! Session state lives in the persisted visit log itself, never in process
//! memory, so an abandoned session (engineer never checks out) survives a
//! restart and is closed by the next matching check-out. Both operations
//! are one load → mutate → save cycle under the store's exclusive lock.

use crate::core::ticket;
use crate::errors::{AppError, AppResult};
use crate::models::status::VisitStatus;
use crate::models::visit::{CELL_DATETIME_FORMAT, PHOTO_NONE, SessionKey, VisitRecord};
use crate::store::master::MasterDirectory;
use crate::store::visit_log::VisitLog;
use crate::ui::messages::warning;
use chrono::{Duration, NaiveDateTime};

pub struct CheckinRequest {
    pub key: SessionKey,
    pub phone: String,
    pub remarks: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photo: Option<String>,
}

#[derive(Default)]
pub struct CheckoutUpdate {
    pub remarks: Option<String>,
    pub photo: Option<String>,
}

/// High-level business logic for check-in and check-out.
pub struct SessionLogic;

impl SessionLogic {
    /// Open a new visit session.
    ///
    /// Re-validates the one-open-session invariant even though the CLI
    /// already routed the action: a second check-in for a key with an open
    /// visit is rejected without touching the store.
    pub fn begin_visit(
        log: &VisitLog,
        directory: &MasterDirectory,
        request: CheckinRequest,
        now: NaiveDateTime,
    ) -> AppResult<VisitRecord> {
        log.with_exclusive_access(|log| {
            let mut records = log.load()?;

            if let Some(open) = records
                .iter()
                .find(|r| r.is_open() && request.key.matches(r))
            {
                return Err(AppError::DuplicateOpenSession {
                    site_id: request.key.site_id.clone(),
                    name: request.key.name.clone(),
                    ticket: open.ticket.clone(),
                });
            }

            let (rto, region) = directory.lookup(&request.key.site_id);

            let record = VisitRecord {
                timestamp: now,
                name: request.key.name.clone(),
                phone: request.phone,
                site_id: request.key.site_id.clone(),
                rto,
                region,
                ticket: ticket::generate(&request.key.site_id, now),
                remarks: request.remarks,
                latitude: request.latitude,
                longitude: request.longitude,
                photo: request.photo.unwrap_or_else(|| PHOTO_NONE.to_string()),
                opened_at: now,
                closed_at: None,
                status: VisitStatus::Open,
            };

            records.push(record.clone());
            log.save(&records)?;
            Ok(record)
        })
    }

    /// Close the open visit session for `key` and return it together with
    /// the dwell time.
    ///
    /// No open visit is an error and leaves the store untouched. More than
    /// one open visit for the same key cannot happen through this module;
    /// if the file was edited by hand we close the most recently opened one
    /// (later row wins a timestamp tie), warn, and leave the strays alone.
    pub fn end_visit(
        log: &VisitLog,
        key: &SessionKey,
        update: CheckoutUpdate,
        now: NaiveDateTime,
    ) -> AppResult<(VisitRecord, Duration)> {
        log.with_exclusive_access(|log| {
            let mut records = log.load()?;

            let open: Vec<usize> = records
                .iter()
                .enumerate()
                .filter(|(_, r)| r.is_open() && key.matches(r))
                .map(|(i, _)| i)
                .collect();

            if open.is_empty() {
                return Err(AppError::NoOpenSession {
                    site_id: key.site_id.clone(),
                    name: key.name.clone(),
                });
            }

            if open.len() > 1 {
                warning(format!(
                    "Found {} open visits for {} at site {}; closing the most recent one.",
                    open.len(),
                    key.name,
                    key.site_id
                ));
            }

            let idx = open
                .iter()
                .copied()
                .max_by_key(|&i| (records[i].opened_at, i))
                .unwrap_or(open[0]);

            let record = &mut records[idx];

            let mut closed_at = now;
            if closed_at < record.opened_at {
                warning(AppError::ClockSkew {
                    opened_at: record.opened_at.format(CELL_DATETIME_FORMAT).to_string(),
                    closed_at: closed_at.format(CELL_DATETIME_FORMAT).to_string(),
                });
                closed_at = record.opened_at;
            }

            record.closed_at = Some(closed_at);
            record.status = VisitStatus::Closed;
            if let Some(remarks) = update.remarks {
                record.remarks = remarks;
            }
            if let Some(photo) = update.photo {
                record.photo = photo;
            }

            let dwell = closed_at - record.opened_at;
            let updated = record.clone();

            log.save(&records)?;
            Ok((updated, dwell))
        })
    }
}
