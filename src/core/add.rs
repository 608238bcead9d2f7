use crate::core::repository::RideRepository;
use crate::errors::AppResult;
use crate::models::Ride;
use std::path::Path;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Load the rides file, then append one ride stamped with the current time.
    pub fn apply(
        rides_path: &Path,
        distance_km: f64,
        duration_hours: f64,
        comment: &str,
        url: &str,
    ) -> AppResult<Ride> {
        let mut repo = RideRepository::open(rides_path)?;
        repo.add(distance_km, duration_hours, comment, url)
    }
}
