pub mod test_utils;

use festina2gpx::festina_data::{HeartrateSample, LocationSample};
use festina2gpx::heartrate_merger::merge_heartrate;
use festina2gpx::utils;
use itertools::Itertools;

#[test]
fn matches_reference_join() {
    for seed in 0..20 {
        let (locations, heartrates) = test_utils::random_series(seed, 300, 80);
        let points = merge_heartrate(&locations, &heartrates).unwrap();

        let expected = locations
            .iter()
            .filter_map(|location| {
                test_utils::reference_heartrate_for(location, &heartrates).map(|heartrate| {
                    (
                        utils::iso_time_of_timestamp_ms(location.timestamp_ms).unwrap(),
                        heartrate,
                        location.latitude,
                        location.longitude,
                    )
                })
            })
            .collect_vec();
        let actual = points
            .iter()
            .map(|p| (p.time.clone(), p.heartrate, p.latitude, p.longitude))
            .collect_vec();
        assert_eq!(actual, expected, "seed {seed}");
    }
}

#[test]
fn order_follows_locations_not_heartrates() {
    let (locations, mut heartrates) = test_utils::random_series(42, 100, 100);
    let points = merge_heartrate(&locations, &heartrates).unwrap();

    // Reversing the heart rate series only changes which duplicate wins.
    heartrates.sort_by_key(|sample| sample.timestamp_ms);
    heartrates.dedup_by_key(|sample| sample.timestamp_ms);
    heartrates.reverse();
    let points_reversed = merge_heartrate(&locations, &heartrates).unwrap();

    let times = |points: &[festina2gpx::heartrate_merger::EnrichedPoint]| {
        points.iter().map(|p| p.time.clone()).collect_vec()
    };
    assert_eq!(times(&points), times(&points_reversed));

    let expected_order = locations
        .iter()
        .filter(|location| test_utils::reference_heartrate_for(location, &heartrates).is_some())
        .map(|location| location.latitude)
        .collect_vec();
    assert_eq!(
        points.iter().map(|p| p.latitude).collect_vec(),
        expected_order
    );
}

#[test]
fn no_heartrate_drops_everything() {
    let (locations, _) = test_utils::random_series(7, 50, 0);
    assert!(merge_heartrate(&locations, &[]).unwrap().is_empty());
}

#[test]
fn equal_timestamp_counts_as_preceding() {
    let location = LocationSample {
        timestamp_ms: 1690891200000,
        longitude: 6.1432,
        latitude: 46.2044,
        altitude: 375.0,
        accuracy: 3.0,
    };
    let heartrates = [
        HeartrateSample {
            timestamp_ms: 1690891200001,
            heartrate: 180,
        },
        HeartrateSample {
            timestamp_ms: 1690891200000,
            heartrate: 91,
        },
    ];
    let points = merge_heartrate(&[location], &heartrates).unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].heartrate, 91);
    assert_eq!(points[0].time, "2023-08-01T12:00:00.000Z");
}
