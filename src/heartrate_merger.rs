use itertools::Itertools;

use crate::error::Result;
use crate::festina_data::{HeartrateSample, LocationSample};
use crate::utils;

/// A location fix carrying the heart rate that was current at that time.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedPoint {
    /// ISO-8601 UTC with millisecond precision.
    pub time: String,
    pub heartrate: u32,
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
    pub accuracy: f64,
}

/// Pairs every location sample with the latest heart rate sample taken at or
/// before it. Location samples with no such heart rate sample are dropped.
/// The output keeps the order of `locations`. When several heart rate
/// samples share a timestamp, the one listed last in `heartrates` wins.
pub fn merge_heartrate(
    locations: &[LocationSample],
    heartrates: &[HeartrateSample],
) -> Result<Vec<EnrichedPoint>> {
    // `sorted_by_key` is a stable sort, equal timestamps keep their input order.
    let heartrates = heartrates
        .iter()
        .sorted_by_key(|sample| sample.timestamp_ms)
        .collect_vec();

    if let (Some(first), Some(last)) = (heartrates.first(), heartrates.last()) {
        debug!(
            "heart rate samples span {}..={} ms",
            first.timestamp_ms, last.timestamp_ms
        );
    }

    let mut points = Vec::with_capacity(locations.len());
    for location in locations {
        let preceding =
            heartrates.partition_point(|sample| sample.timestamp_ms <= location.timestamp_ms);
        if preceding == 0 {
            continue;
        }
        let heartrate = heartrates[preceding - 1];
        points.push(EnrichedPoint {
            time: utils::iso_time_of_timestamp_ms(location.timestamp_ms)?,
            heartrate: heartrate.heartrate,
            longitude: location.longitude,
            latitude: location.latitude,
            altitude: location.altitude,
            accuracy: location.accuracy,
        });
    }

    let dropped = locations.len() - points.len();
    if dropped > 0 {
        warn!("dropped {dropped} location samples taken before the first heart rate sample");
    }
    info!("merged heart rate into {} track points", points.len());
    Ok(points)
}
