//! Per-mode journey metrics and their tooltip labels

use serde::{Deserialize, Serialize};

/// Convert a distance in meters to kilometers rounded to two decimals
#[must_use]
pub fn round_km(meters: f64) -> f64 {
    (meters / 1000.0 * 100.0).round() / 100.0
}

/// Tooltip label for a driving route
#[must_use]
pub fn car_label(distance_km: f64) -> String {
    format!("Car: {distance_km} km")
}

/// Result of a train journey lookup
///
/// Both fields are optional: the journey planner may omit the fare, and
/// a failed lookup yields [`TrainJourney::absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrainJourney {
    /// Journey duration in minutes
    pub duration_minutes: Option<u32>,
    /// Total fare in pence
    pub fare_pence: Option<u32>,
}

impl TrainJourney {
    /// Create a journey result
    #[must_use]
    pub const fn new(duration_minutes: Option<u32>, fare_pence: Option<u32>) -> Self {
        Self {
            duration_minutes,
            fare_pence,
        }
    }

    /// The (absent, absent) result of a failed lookup
    #[must_use]
    pub const fn absent() -> Self {
        Self::new(None, None)
    }

    /// Whether the journey can be drawn
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.duration_minutes.is_some()
    }

    /// Fare in pounds, e.g. `£3.50`, or `£?` when unknown
    #[must_use]
    pub fn fare_display(&self) -> String {
        self.fare_pence.map_or_else(
            || "£?".to_string(),
            |pence| format!("£{}.{:02}", pence / 100, pence % 100),
        )
    }

    /// Tooltip label, or `None` when no duration was returned
    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.duration_minutes
            .map(|minutes| format!("Train: {minutes} min, {}", self.fare_display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_km_of_500_meters() {
        assert!((round_km(500.0) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn round_km_rounds_to_two_decimals() {
        assert!((round_km(12_345.6) - 12.35).abs() < 1e-9);
        assert!((round_km(1_004.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn car_label_format() {
        assert_eq!(car_label(0.5), "Car: 0.5 km");
        assert_eq!(car_label(12.35), "Car: 12.35 km");
    }

    #[test]
    fn fare_in_pounds() {
        let journey = TrainJourney::new(Some(45), Some(350));
        assert_eq!(journey.fare_display(), "£3.50");
        assert_eq!(journey.duration_minutes, Some(45));
    }

    #[test]
    fn fare_pads_pence() {
        assert_eq!(TrainJourney::new(Some(10), Some(1205)).fare_display(), "£12.05");
        assert_eq!(TrainJourney::new(Some(10), Some(7)).fare_display(), "£0.07");
    }

    #[test]
    fn missing_fare_renders_question_mark() {
        let journey = TrainJourney::new(Some(45), None);
        assert_eq!(journey.fare_display(), "£?");
        assert_eq!(journey.label().as_deref(), Some("Train: 45 min, £?"));
    }

    #[test]
    fn label_with_fare() {
        let journey = TrainJourney::new(Some(45), Some(350));
        assert_eq!(journey.label().as_deref(), Some("Train: 45 min, £3.50"));
    }

    #[test]
    fn absent_journey_has_no_label() {
        let journey = TrainJourney::absent();
        assert!(!journey.is_resolved());
        assert!(journey.label().is_none());
    }

    #[test]
    fn fare_without_duration_is_not_drawable() {
        let journey = TrainJourney::new(None, Some(350));
        assert!(journey.label().is_none());
    }
}
