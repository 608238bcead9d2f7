use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, SubsecRound};
use serde::Serialize;

/// One bicycle ride, as stored on a single line of the rides file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ride {
    pub timestamp: NaiveDateTime, // ⇔ column 1 "DD-MM-YYYY HH:MM:SS"
    pub distance_km: f64,         // ⇔ column 2
    pub duration_hours: f64,      // ⇔ column 3
    pub comment: String,          // ⇔ column 4 (quoted when needed)
    pub url: String,              // ⇔ column 5 (may be empty)
}

impl Ride {
    /// Build a validated ride.
    ///
    /// - `distance_km` must be finite and `>= 0`
    /// - `duration_hours` must be finite and `> 0`
    /// - `comment` and `url` must fit on one line
    ///
    /// The file keeps whole seconds, so sub-second precision is dropped.
    pub fn new(
        timestamp: NaiveDateTime,
        distance_km: f64,
        duration_hours: f64,
        comment: impl Into<String>,
        url: impl Into<String>,
    ) -> AppResult<Self> {
        let ride = Self {
            timestamp: timestamp.trunc_subsecs(0),
            distance_km,
            duration_hours,
            comment: comment.into(),
            url: url.into(),
        };
        ride.validate()?;
        Ok(ride)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "distance must be a non-negative number of km, got {}",
                self.distance_km
            )));
        }

        if !self.duration_hours.is_finite() || self.duration_hours <= 0.0 {
            return Err(AppError::InvalidInput(format!(
                "duration must be a positive number of hours, got {}",
                self.duration_hours
            )));
        }

        self.check_single_line()
    }

    /// `comment` and `url` must not contain line breaks.
    pub fn check_single_line(&self) -> AppResult<()> {
        for (name, value) in [("comment", &self.comment), ("url", &self.url)] {
            if value.contains(['\n', '\r']) {
                return Err(AppError::InvalidInput(format!(
                    "{name} must not contain line breaks"
                )));
            }
        }

        Ok(())
    }

    /// Average speed of this ride in km/h.
    pub fn speed_kmh(&self) -> Option<f64> {
        if self.duration_hours > 0.0 {
            Some(self.distance_km / self.duration_hours)
        } else {
            None
        }
    }

    pub fn has_url(&self) -> bool {
        !self.url.trim().is_empty()
    }
}
