// src/core/period.rs

use crate::errors::{AppError, AppResult};
use crate::models::Ride;
use crate::ui::i18n::{Lang, Msg};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Inclusive date interval used to select rides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    All,
    Range { start: NaiveDate, end: NaiveDate },
}

impl Period {
    /// Parse a period expression.
    ///
    /// Supports:
    /// - all
    /// - year / month (relative to `today`)
    /// - YYYY
    /// - YYYY-MM
    /// - YYYY-MM-DD
    /// - YYYY:YYYY
    /// - YYYY-MM:YYYY-MM
    /// - YYYY-MM-DD:YYYY-MM-DD
    pub fn parse(expr: &str, today: NaiveDate) -> AppResult<Self> {
        let expr = expr.trim();

        match expr.to_ascii_lowercase().as_str() {
            "all" => return Ok(Period::All),
            "year" => return Period::year(today.year()),
            "month" => return Period::month(today.year(), today.month()),
            _ => {}
        }

        if let Some((start_raw, end_raw)) = expr.split_once(':') {
            let start_raw = start_raw.trim();
            let end_raw = end_raw.trim();

            if start_raw.len() != end_raw.len() {
                return Err(AppError::InvalidPeriod(format!(
                    "'{expr}': start and end must have the same format"
                )));
            }

            let (start, _) = bounds(start_raw)?;
            let (_, end) = bounds(end_raw)?;

            if start > end {
                return Err(AppError::InvalidPeriod(format!(
                    "'{expr}': start is after end"
                )));
            }

            return Ok(Period::Range { start, end });
        }

        let (start, end) = bounds(expr)?;
        Ok(Period::Range { start, end })
    }

    pub fn year(year: i32) -> AppResult<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| AppError::InvalidPeriod(format!("invalid year {year}")))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| AppError::InvalidPeriod(format!("invalid year {year}")))?;
        Ok(Period::Range { start, end })
    }

    pub fn month(year: i32, month: u32) -> AppResult<Self> {
        let invalid = || AppError::InvalidPeriod(format!("invalid month {year}-{month:02}"));
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let end = month_end(start).ok_or_else(invalid)?;
        Ok(Period::Range { start, end })
    }

    pub fn contains(&self, ts: &NaiveDateTime) -> bool {
        match self {
            Period::All => true,
            Period::Range { start, end } => {
                let d = ts.date();
                *start <= d && d <= *end
            }
        }
    }

    /// Human readable description, e.g. "2012", "June 2012", "all rides".
    pub fn label(&self, lang: Lang) -> String {
        match self {
            Period::All => lang.tr(Msg::AllRides).to_string(),
            Period::Range { start, end } => {
                let full_year = start.year() == end.year()
                    && (start.month(), start.day()) == (1, 1)
                    && (end.month(), end.day()) == (12, 31);
                let full_month = start.year() == end.year()
                    && start.month() == end.month()
                    && start.day() == 1
                    && month_end(*end) == Some(*end);

                if full_year {
                    start.year().to_string()
                } else if full_month {
                    format!("{} {}", lang.month_name(start.month()), start.year())
                } else if start == end {
                    start.format("%d-%m-%Y").to_string()
                } else {
                    format!(
                        "{} {} {}",
                        start.format("%d-%m-%Y"),
                        lang.tr(Msg::RangeTo),
                        end.format("%d-%m-%Y")
                    )
                }
            }
        }
    }
}

/// Build the set of periods requested on the command line.
///
/// Explicit years and `--period` are combined; when neither is given the
/// configured default expression is used.
pub fn resolve(
    years: &[i32],
    period: Option<&str>,
    default: &str,
    today: NaiveDate,
) -> AppResult<Vec<Period>> {
    let mut periods = years
        .iter()
        .map(|y| Period::year(*y))
        .collect::<AppResult<Vec<_>>>()?;

    if let Some(p) = period {
        periods.push(Period::parse(p, today)?);
    }

    if periods.is_empty() {
        periods.push(Period::parse(default, today)?);
    }

    Ok(periods)
}

pub fn matches_any(periods: &[Period], ts: &NaiveDateTime) -> bool {
    periods.iter().any(|p| p.contains(ts))
}

/// Rides falling in any of `periods`, paired with their 1-based id.
pub fn select<'a>(rides: &'a [Ride], periods: &[Period]) -> Vec<(usize, &'a Ride)> {
    rides
        .iter()
        .enumerate()
        .filter(|(_, r)| matches_any(periods, &r.timestamp))
        .map(|(idx, r)| (idx + 1, r))
        .collect()
}

pub fn describe(periods: &[Period], lang: Lang) -> String {
    periods
        .iter()
        .map(|p| p.label(lang))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD` → first and last day covered.
fn bounds(raw: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(format!("'{raw}' (expected YYYY, YYYY-MM or YYYY-MM-DD)"));

    match raw.len() {
        4 => {
            let y: i32 = raw.parse().map_err(|_| invalid())?;
            match Period::year(y)? {
                Period::Range { start, end } => Ok((start, end)),
                Period::All => Err(invalid()),
            }
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            match Period::month(first.year(), first.month())? {
                Period::Range { start, end } => Ok((start, end)),
                Period::All => Err(invalid()),
            }
        }
        10 => {
            let d = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

/// Last day of the month containing `date`.
fn month_end(date: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = match date.month() {
        12 => (date.year().checked_add(1)?, 1),
        m => (date.year(), m + 1),
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}
