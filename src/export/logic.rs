use crate::core::report::{ReportLogic, VisitFilter};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::VisitExport;
use crate::export::xlsx::export_xlsx;
use crate::store::visit_log::VisitLog;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export visits.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or a period expression:
    ///   `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or `start:end` of the same shapes
    /// - `region`: keep only visits in this region
    pub fn export(
        log: &VisitLog,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        region: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_period(r)?),
        };

        let filter = VisitFilter {
            bounds,
            region: region.clone(),
            ..VisitFilter::default()
        };

        let visits = ReportLogic::filter(&log.load()?, &filter);

        if visits.is_empty() {
            warning("No visits found for the selected range.");
            return Ok(());
        }

        let exports: Vec<VisitExport> = visits.iter().map(VisitExport::from_record).collect();

        match format {
            ExportFormat::Csv => export_csv(&exports, path)?,
            ExportFormat::Json => export_json(&exports, path)?,
            ExportFormat::Xlsx => export_xlsx(&exports, path)?,
        }

        Ok(())
    }
}
