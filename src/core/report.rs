//! Read-only projections over the visit log: filters and aggregates.

use crate::models::visit::VisitRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
pub struct VisitFilter {
    /// Inclusive bounds applied to the check-in date.
    pub bounds: Option<(NaiveDate, NaiveDate)>,
    /// Case-insensitive substring match on the engineer name.
    pub name: Option<String>,
    /// Case-insensitive equality on the region.
    pub region: Option<String>,
    /// Case-insensitive equality on the site id.
    pub site: Option<String>,
    /// Keep only visits that are still open.
    pub open_only: bool,
}

#[derive(Debug)]
pub struct VisitSummary {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    /// Average dwell over closed visits, in minutes.
    pub average_dwell_minutes: i64,
    pub by_region: BTreeMap<String, usize>,
}

pub struct ReportLogic;

impl ReportLogic {
    pub fn filter(records: &[VisitRecord], filter: &VisitFilter) -> Vec<VisitRecord> {
        records
            .iter()
            .filter(|r| {
                if let Some((from, to)) = filter.bounds {
                    let d = r.opened_date();
                    if d < from || d > to {
                        return false;
                    }
                }
                if let Some(name) = &filter.name
                    && !r.name.to_lowercase().contains(&name.to_lowercase())
                {
                    return false;
                }
                if let Some(region) = &filter.region
                    && !r.region.eq_ignore_ascii_case(region)
                {
                    return false;
                }
                if let Some(site) = &filter.site
                    && !r.site_id.eq_ignore_ascii_case(site)
                {
                    return false;
                }
                if filter.open_only && !r.is_open() {
                    return false;
                }
                true
            })
            .cloned()
            .collect()
    }

    pub fn summary(records: &[VisitRecord]) -> VisitSummary {
        let open = records.iter().filter(|r| r.is_open()).count();
        let closed = records.len() - open;

        let dwell_total: i64 = records
            .iter()
            .filter_map(|r| r.dwell())
            .map(|d| d.num_minutes())
            .sum();
        let average_dwell_minutes = if closed > 0 {
            dwell_total / closed as i64
        } else {
            0
        };

        let mut by_region: BTreeMap<String, usize> = BTreeMap::new();
        for record in records {
            let region = if record.region.is_empty() {
                "-".to_string()
            } else {
                record.region.clone()
            };
            *by_region.entry(region).or_insert(0) += 1;
        }

        VisitSummary {
            total: records.len(),
            open,
            closed,
            average_dwell_minutes,
            by_region,
        }
    }
}
