use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{CheckoutUpdate, SessionLogic};
use crate::errors::AppResult;
use crate::models::visit::SessionKey;
use crate::store::photos::PhotoStore;
use crate::store::visit_log::VisitLog;
use crate::ui::messages::success;
use crate::utils::time::format_dwell;
use chrono::Local;
use std::path::Path;

/// Check out of a site: close the open visit session and report dwell.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkout {
        site_id,
        name,
        remarks,
        photo,
    } = cmd
    {
        let now = Local::now().naive_local();

        let log = VisitLog::new(&cfg.visit_log);
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

        let update = CheckoutUpdate {
            remarks: remarks.clone(),
            photo: photo_ref,
        };

        let (record, dwell) = SessionLogic::end_visit(&log, &key, update, now)?;

        success(format!(
            "Checked out: {} from site {} (ticket {}). Dwell time {}.",
            record.name,
            record.site_id,
            record.ticket,
            format_dwell(dwell)
        ));

        super::checkin::write_audit(cfg, "checkout", &record.site_id, &record.name, &record.ticket);
    }

    Ok(())
}
