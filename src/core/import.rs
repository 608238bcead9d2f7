//! Import a ride from a Wahoo fitness CSV export.
//!
//! Only three columns are used: `Timestamp` (epoch milliseconds),
//! `TotalDistance` (metres) and `WorkoutActive`. The ride spans the first
//! and the last active sample.

use crate::core::clock::FixedClock;
use crate::core::repository::RideRepository;
use crate::errors::{AppError, AppResult};
use crate::models::Ride;
use chrono::{DateTime, Local, NaiveDateTime, SubsecRound};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_COMMENT: &str = "Imported from Wahoo";

const REQUIRED_COLUMNS: [&str; 3] = ["Timestamp", "TotalDistance", "WorkoutActive"];
const METRES_PER_KM: f64 = 1000.0;
const MS_PER_HOUR: f64 = 3_600_000.0;

#[derive(Debug, Deserialize)]
struct WahooSample {
    #[serde(rename = "Timestamp", default)]
    timestamp: Option<f64>,
    #[serde(rename = "TotalDistance", default)]
    total_distance: Option<f64>,
    #[serde(rename = "WorkoutActive", default)]
    workout_active: Option<String>,
}

impl WahooSample {
    fn is_active(&self) -> bool {
        self.workout_active
            .as_deref()
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false)
    }
}

/// Ride values extracted from a Wahoo export.
#[derive(Debug, Clone, PartialEq)]
pub struct WahooRide {
    pub timestamp: NaiveDateTime,
    pub distance_km: f64,
    pub duration_hours: f64,
}

pub fn read_wahoo_csv(path: &Path) -> AppResult<WahooRide> {
    let file = File::open(path).map_err(|e| AppError::file_access(path, e))?;
    parse_wahoo(file)
}

pub fn parse_wahoo<R: Read>(reader: R) -> AppResult<WahooRide> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::Import(format!("missing column '{column}'")));
        }
    }

    let mut first: Option<(f64, f64)> = None;
    let mut last: Option<(f64, f64)> = None;
    let mut samples = 0usize;

    for result in rdr.deserialize::<WahooSample>() {
        let sample = result?;
        if !sample.is_active() {
            continue;
        }
        let (Some(ts), Some(dist)) = (sample.timestamp, sample.total_distance) else {
            continue;
        };

        samples += 1;
        if first.is_none() {
            first = Some((ts, dist));
        }
        last = Some((ts, dist));
    }

    debug!(samples, "active Wahoo samples read");

    let (Some((t0, d0)), Some((t1, d1))) = (first, last) else {
        return Err(AppError::Import("no active workout samples".into()));
    };
    if t1 <= t0 {
        return Err(AppError::Import(
            "workout is too short: need at least two active samples".into(),
        ));
    }

    let timestamp = DateTime::from_timestamp_millis(t1 as i64)
        .ok_or_else(|| AppError::Import(format!("invalid timestamp {t1}")))?
        .with_timezone(&Local)
        .naive_local()
        .trunc_subsecs(0);

    Ok(WahooRide {
        timestamp,
        distance_km: (d1 - d0) / METRES_PER_KM,
        duration_hours: (t1 - t0) / MS_PER_HOUR,
    })
}

/// High-level business logic for the `import` command.
pub struct ImportLogic;

impl ImportLogic {
    /// Read `source` and append the ride to the rides file at `rides_path`.
    pub fn apply(rides_path: &Path, source: &Path, comment: Option<&str>) -> AppResult<Ride> {
        let wahoo = read_wahoo_csv(source)?;
        let comment = comment
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COMMENT);

        let mut repo = RideRepository::open_with_clock(rides_path, FixedClock(wahoo.timestamp))?;
        let ride = repo.add(wahoo.distance_km, wahoo.duration_hours, comment, "")?;

        info!(source = %source.display(), distance_km = ride.distance_km, "Wahoo ride imported");
        Ok(ride)
    }
}
