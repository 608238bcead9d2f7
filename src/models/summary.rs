use serde::Serialize;

/// Aggregate values computed over a set of rides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub total_distance_km: f64,
    pub total_duration_hours: f64,
    /// `None` when the total duration is zero (e.g. no rides).
    pub average_speed_kmh: Option<f64>,
    pub average_distance_km: Option<f64>,
    pub longest_distance_km: Option<f64>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
