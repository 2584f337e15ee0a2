//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{GeoLocation, PostalCode, TrainJourney, round_km};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_err());
        }

        #[test]
        fn lon_lat_has_longitude_first(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon).unwrap();
            let formatted = loc.to_lon_lat();
            let (first, second) = formatted.split_once(',').unwrap();
            prop_assert_eq!(first.parse::<f64>().unwrap(), lon);
            prop_assert_eq!(second.parse::<f64>().unwrap(), lat);
        }
    }
}

// ============================================================================
// PostalCode Property Tests
// ============================================================================

mod postal_code_tests {
    use super::*;

    proptest! {
        #[test]
        fn never_contains_whitespace(raw in "[ \t]{0,3}[A-Za-z0-9]{1,4}[ \t\n]{0,3}[A-Za-z0-9]{0,3}[ \t]{0,3}") {
            let code = PostalCode::new(&raw).unwrap();
            prop_assert!(!code.as_str().chars().any(char::is_whitespace));
            prop_assert!(!code.as_str().contains(' '));
        }

        #[test]
        fn keeps_every_non_whitespace_character(raw in "[A-Z0-9]{1,4} [A-Z0-9]{3}") {
            let code = PostalCode::new(&raw).unwrap();
            prop_assert_eq!(code.as_str(), raw.replace(' ', ""));
        }

        #[test]
        fn whitespace_only_rejected(raw in "[ \t\n]{0,8}") {
            prop_assert!(PostalCode::new(&raw).is_err());
        }
    }
}

// ============================================================================
// Journey Metric Property Tests
// ============================================================================

mod journey_metric_tests {
    use super::*;

    proptest! {
        #[test]
        fn rounded_km_within_half_a_decameter(meters in 0.0f64..2_000_000.0f64) {
            let km = round_km(meters);
            prop_assert!((km - meters / 1000.0).abs() <= 0.005 + 1e-9);
        }

        #[test]
        fn fare_display_matches_pence(pence in 0u32..1_000_000u32) {
            let display = TrainJourney::new(Some(1), Some(pence)).fare_display();
            let amount: f64 = display.trim_start_matches('£').parse().unwrap();
            prop_assert!((amount * 100.0 - f64::from(pence)).abs() < 0.5);
        }

        #[test]
        fn resolved_journey_always_labelled(minutes in 0u32..10_000u32, fare in proptest::option::of(0u32..100_000u32)) {
            let label = TrainJourney::new(Some(minutes), fare).label().unwrap();
            let expected = format!("{minutes} min");
            prop_assert!(label.contains(&expected));
            prop_assert!(label.contains('£'));
        }
    }
}
