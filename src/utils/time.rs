//! Time utilities: parsing ride durations, formatting hours.

use crate::errors::{AppError, AppResult};
use regex::Regex;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Parse a ride duration into hours.
///
/// Accepted formats: decimal hours (`1.5`), `HH:MM`, `HHhMM`, `HHh`, `HH:`.
pub fn parse_duration(input: &str) -> AppResult<f64> {
    let s = input.trim();
    let invalid = || {
        AppError::InvalidDuration(format!(
            "'{s}' (use decimal hours, HH:MM, HHhMM or HHh)"
        ))
    };

    if let Ok(hours) = s.parse::<f64>() {
        return if hours.is_finite() {
            Ok(hours)
        } else {
            Err(invalid())
        };
    }

    let re = Regex::new(r"^(\d+)\s*[:hH]\s*(\d{0,2})$")
        .map_err(|e| AppError::Other(e.to_string()))?;
    let caps = re.captures(s).ok_or_else(invalid)?;

    let hours: f64 = caps[1].parse().map_err(|_| invalid())?;
    let minutes: f64 = match &caps[2] {
        "" => 0.0,
        m => m.parse().map_err(|_| invalid())?,
    };
    if minutes >= MINUTES_PER_HOUR {
        return Err(invalid());
    }

    Ok(hours + minutes / MINUTES_PER_HOUR)
}

/// Parse a distance in km.
pub fn parse_distance(input: &str) -> AppResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite())
        .ok_or_else(|| AppError::InvalidInput(format!("invalid distance '{}'", input.trim())))
}

/// 5.85 → "05h 51m"
pub fn hours2readable(hours: f64) -> String {
    let total_minutes = (hours * MINUTES_PER_HOUR).round() as i64;
    format!("{:02}h {:02}m", total_minutes / 60, total_minutes % 60)
}
