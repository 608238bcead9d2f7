//! Property-based tests for the rides file codec and the aggregator.

use proptest::prelude::*;

use bike::core::stats::summarize;
use bike::models::Ride;
use bike::store::{decode, encode};
use chrono::{NaiveDate, NaiveDateTime};

fn timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (
        1970i32..2100,
        1u32..=12,
        1u32..=28,
        0u32..24,
        0u32..60,
        0u32..60,
        0u32..1000,
    )
        .prop_map(|(y, mo, d, h, mi, s, ms)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .and_then(|date| date.and_hms_milli_opt(h, mi, s, ms))
                .expect("generated date is valid")
        })
}

fn ride() -> impl Strategy<Value = Ride> {
    (
        timestamp(),
        0.0f64..10_000.0,
        0.001f64..100.0,
        "[^\r\n]{0,40}",
        "[a-z0-9:/.,\"?=&]{0,30}",
    )
        .prop_map(|(timestamp, distance_km, duration_hours, comment, url)| {
            Ride::new(timestamp, distance_km, duration_hours, comment, url)
                .expect("generated ride is valid")
        })
}

proptest! {
    /// Any valid ride survives encode → decode unchanged, whatever the
    /// comment contains (delimiters, quotes, spaces).
    #[test]
    fn encode_decode_round_trip(r in ride()) {
        let line = encode(&r).expect("encode");
        prop_assert!(!line.contains('\n'), "encoded line spans lines: {line:?}");
        let back = decode(&line, 1).expect("decode");
        prop_assert_eq!(back, r);
    }

    /// Total distance is the sum of the distances, independent of order.
    #[test]
    fn total_distance_is_order_independent(
        rides in prop::collection::vec(ride(), 1..20),
    ) {
        let expected: f64 = rides.iter().map(|r| r.distance_km).sum();
        let forward = summarize(&rides);

        let mut reversed = rides.clone();
        reversed.reverse();
        let backward = summarize(&reversed);

        prop_assert_eq!(forward.count, rides.len());
        prop_assert!((forward.total_distance_km - expected).abs() <= 1e-6 * expected.max(1.0));
        prop_assert!(
            (forward.total_distance_km - backward.total_distance_km).abs()
                <= 1e-6 * expected.max(1.0)
        );
        prop_assert!(forward.average_speed_kmh.is_some());
    }
}
