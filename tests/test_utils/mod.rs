#![allow(dead_code)]

use festina2gpx::festina_data::{FestinaExport, HeartrateSample, LocationSample};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;

pub const SAMPLE_EXPORT_PATH: &str = "./tests/data/festina_sample.json";

pub fn load_sample_export() -> FestinaExport {
    let json = fs::read_to_string(SAMPLE_EXPORT_PATH).unwrap();
    FestinaExport::from_json_str(&json).unwrap()
}

/// The obvious quadratic join: filter, keep input order, take the last
/// sample with the greatest timestamp.
pub fn reference_heartrate_for(
    location: &LocationSample,
    heartrates: &[HeartrateSample],
) -> Option<u32> {
    let mut best: Option<&HeartrateSample> = None;
    for sample in heartrates
        .iter()
        .filter(|sample| sample.timestamp_ms <= location.timestamp_ms)
    {
        match best {
            Some(current) if current.timestamp_ms > sample.timestamp_ms => {}
            _ => best = Some(sample),
        }
    }
    best.map(|sample| sample.heartrate)
}

/// Random unsorted series with plenty of duplicate timestamps.
pub fn random_series(
    seed: u64,
    location_count: usize,
    heartrate_count: usize,
) -> (Vec<LocationSample>, Vec<HeartrateSample>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let locations = (0..location_count)
        .map(|i| LocationSample {
            timestamp_ms: 1690891200000 + rng.random_range(0..200) * 250,
            longitude: 121.47 + i as f64 * 0.0001,
            latitude: 31.23 - i as f64 * 0.0001,
            altitude: rng.random_range(0..500) as f64 / 10.0,
            accuracy: rng.random_range(1..20) as f64,
        })
        .collect();
    let heartrates = (0..heartrate_count)
        .map(|_| HeartrateSample {
            timestamp_ms: 1690891200000 + rng.random_range(10..200) * 250,
            heartrate: rng.random_range(50..190),
        })
        .collect();
    (locations, heartrates)
}
