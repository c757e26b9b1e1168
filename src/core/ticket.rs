//! Trouble-ticket number derivation.

use chrono::NaiveDateTime;

/// Derive the ticket number for a visit opened at `at`:
/// `TT_{site_id}_{YYYYMMDD_HHMMSS}`.
///
/// Unique only down to one second per site: two check-ins at the same site
/// within the same second collide. Accepted at this deployment's scale;
/// the timestamp comes from the single `now` captured per CLI action, so
/// ticket order follows record order.
pub fn generate(site_id: &str, at: NaiveDateTime) -> String {
    format!("TT_{}_{}", site_id.trim(), at.format("%Y%m%d_%H%M%S"))
}
