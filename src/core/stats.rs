use crate::core::period::{Period, matches_any};
use crate::models::{Ride, Summary};

/// Fold a sequence of rides into a [`Summary`].
pub fn summarize<'a, I>(rides: I) -> Summary
where
    I: IntoIterator<Item = &'a Ride>,
{
    let mut summary = Summary::default();

    for ride in rides {
        summary.count += 1;
        summary.total_distance_km += ride.distance_km;
        summary.total_duration_hours += ride.duration_hours;
        summary.longest_distance_km = Some(
            summary
                .longest_distance_km
                .map_or(ride.distance_km, |l| l.max(ride.distance_km)),
        );
    }

    if summary.total_duration_hours > 0.0 {
        summary.average_speed_kmh = Some(summary.total_distance_km / summary.total_duration_hours);
    }
    if summary.count > 0 {
        summary.average_distance_km = Some(summary.total_distance_km / summary.count as f64);
    }

    summary
}

/// Same as [`summarize`] restricted to rides inside any of `periods`.
pub fn summarize_filtered(rides: &[Ride], periods: &[Period]) -> Summary {
    summarize(
        rides
            .iter()
            .filter(|r| matches_any(periods, &r.timestamp)),
    )
}
