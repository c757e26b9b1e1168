//! Period expressions: resolve `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and
//! colon-separated ranges of those shapes into inclusive date bounds.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, _) = parse_single(start_raw.trim())?;
        let (_, end) = parse_single(end_raw.trim())?;
        if end < start {
            return Err(AppError::InvalidDate(format!(
                "period end precedes start: {p}"
            )));
        }
        return Ok((start, end));
    }

    parse_single(p.trim())
}

fn parse_single(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        // YYYY
        4 => {
            let year: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            Ok((first, month_last_day(first)))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn month_last_day(first: NaiveDate) -> NaiveDate {
    let (year, month) = (first.year(), first.month());
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    // First day of the month is always valid, so both fallbacks are unreachable.
    next_month_first
        .and_then(|d| d.pred_opt())
        .unwrap_or(first)
}
