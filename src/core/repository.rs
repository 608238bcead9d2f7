use crate::core::clock::{Clock, LocalClock};
use crate::errors::{AppError, AppResult};
use crate::models::Ride;
use crate::store;
use std::path::{Path, PathBuf};
use tracing::debug;

/// In-memory collection of rides for one program run.
///
/// Rides are kept in file order (oldest first). New rides are written to
/// the rides file before they are added to the collection.
#[derive(Debug)]
pub struct RideRepository<C: Clock = LocalClock> {
    path: PathBuf,
    rides: Vec<Ride>,
    clock: C,
}

impl RideRepository<LocalClock> {
    pub fn open(path: &Path) -> AppResult<Self> {
        Self::open_with_clock(path, LocalClock)
    }
}

impl<C: Clock> RideRepository<C> {
    /// Load the rides file. A missing file gives an empty repository.
    pub fn open_with_clock(path: &Path, clock: C) -> AppResult<Self> {
        let rides = if path.exists() {
            store::load(path)?
        } else {
            debug!(path = %path.display(), "rides file not found, starting empty");
            Vec::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            rides,
            clock,
        })
    }

    /// Record a new ride stamped with the current time. `comment` and `url`
    /// are stored as given.
    ///
    /// Invalid values are rejected before the file is touched.
    pub fn add(
        &mut self,
        distance_km: f64,
        duration_hours: f64,
        comment: &str,
        url: &str,
    ) -> AppResult<Ride> {
        let ride = Ride::new(
            self.clock.now(),
            distance_km,
            duration_hours,
            comment,
            url,
        )?;

        store::append(&self.path, &ride)?;
        self.rides.push(ride.clone());

        Ok(ride)
    }

    pub fn all(&self) -> &[Ride] {
        &self.rides
    }

    /// Look up a ride by its 1-based position in the file.
    pub fn get(&self, id: usize) -> Option<&Ride> {
        id.checked_sub(1).and_then(|idx| self.rides.get(idx))
    }

    pub fn require(&self, id: usize) -> AppResult<&Ride> {
        self.get(id).ok_or(AppError::NoSuchRide(id))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}
