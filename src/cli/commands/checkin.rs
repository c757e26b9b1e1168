use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{CheckinRequest, CheckoutUpdate, SessionLogic};
use crate::errors::{AppError, AppResult};
use crate::models::visit::SessionKey;
use crate::store::audit;
use crate::store::master::MasterDirectory;
use crate::store::photos::PhotoStore;
use crate::store::visit_log::VisitLog;
use crate::ui::messages::{success, warning};
use crate::utils::time::format_dwell;
use chrono::Local;
use std::path::Path;

/// Check in at a site: open a new visit session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin {
        site_id,
        name,
        phone,
        remarks,
        lat,
        lon,
        photo,
        complete,
    } = cmd
    {
        validate_coordinates(*lat, *lon)?;

        // One clock read per action; everything downstream (ticket,
        // opened_at, photo name) derives from it.
        let now = Local::now().naive_local();

        let log = VisitLog::new(&cfg.visit_log);
        let directory = MasterDirectory::new(&cfg.master_data);
        let key = SessionKey::new(site_id, name);

        let photo_ref = match photo {
            Some(src) => Some(
                PhotoStore::new(cfg.resolve_photo_dir()).store(
                    &key.site_id,
                    now,
                    Path::new(src),
                )?,
            ),
            None => None,
        };

        let request = CheckinRequest {
            key: key.clone(),
            phone: phone.clone(),
            remarks: remarks.clone(),
            latitude: *lat,
            longitude: *lon,
            photo: photo_ref,
        };

        let record = SessionLogic::begin_visit(&log, &directory, request, now)?;

        success(format!(
            "Checked in: {} at site {} (ticket {}).",
            record.name, record.site_id, record.ticket
        ));

        write_audit(cfg, "checkin", &record.site_id, &record.name, &record.ticket);

        if *complete {
            // Single-step submission: the visit is opened and closed in
            // one action with zero dwell.
            let (record, dwell) =
                SessionLogic::end_visit(&log, &key, CheckoutUpdate::default(), now)?;

            success(format!(
                "Visit recorded as completed (dwell {}).",
                format_dwell(dwell)
            ));
            write_audit(cfg, "checkout", &record.site_id, &record.name, &record.ticket);
        }
    }

    Ok(())
}

fn validate_coordinates(lat: Option<f64>, lon: Option<f64>) -> AppResult<()> {
    if let Some(lat) = lat
        && !(-90.0..=90.0).contains(&lat)
    {
        return Err(AppError::InvalidCoordinate(format!(
            "latitude out of range: {lat}"
        )));
    }
    if let Some(lon) = lon
        && !(-180.0..=180.0).contains(&lon)
    {
        return Err(AppError::InvalidCoordinate(format!(
            "longitude out of range: {lon}"
        )));
    }
    Ok(())
}

pub(crate) fn write_audit(cfg: &Config, operation: &str, site_id: &str, name: &str, ticket: &str) {
    let path = audit::audit_file_for(&cfg.visit_log);
    if let Err(e) = audit::write(&path, operation, site_id, &format!("{name} {ticket}")) {
        warning(format!("Failed to write operation log: {e}"));
    }
}
