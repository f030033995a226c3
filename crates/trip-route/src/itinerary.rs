//! Provider response shapes.
//!
//! These mirror what a directions service returns for one request: zero or
//! more itineraries, each with legs, each leg with ordered steps.  Distances
//! are metres and durations seconds throughout.

use trip_core::GeoPoint;

/// One step of a leg as reported by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub distance_m:        f64,
    pub duration_s:        f64,
    /// Instruction text with the provider's inline HTML markup.
    pub html_instructions: String,
    pub start_location:    GeoPoint,
}

/// A leg between two waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub distance_m:            f64,
    pub duration_s:            f64,
    /// Traffic-aware duration, present only for depart-now driving requests.
    pub duration_in_traffic_s: Option<f64>,
    pub start_address:         String,
    pub end_address:           String,
    pub start_location:        GeoPoint,
    pub end_location:          GeoPoint,
    pub steps:                 Vec<Step>,
}

impl Leg {
    /// Build a leg whose totals are the sums of `steps`.
    ///
    /// The leg starts at the first step's start location (or `end_location`
    /// when there are no steps).
    pub fn from_steps(
        start_address: impl Into<String>,
        end_address:   impl Into<String>,
        end_location:  GeoPoint,
        steps:         Vec<Step>,
    ) -> Self {
        let distance_m = steps.iter().map(|s| s.distance_m).sum();
        let duration_s = steps.iter().map(|s| s.duration_s).sum();
        let start_location = steps.first().map_or(end_location, |s| s.start_location);
        Self {
            distance_m,
            duration_s,
            duration_in_traffic_s: None,
            start_address: start_address.into(),
            end_address: end_address.into(),
            start_location,
            end_location,
            steps,
        }
    }
}

/// One candidate route returned by the provider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Itinerary {
    pub legs: Vec<Leg>,
}

impl Itinerary {
    pub fn single_leg(leg: Leg) -> Self {
        Self { legs: vec![leg] }
    }

    /// Duration of the first leg in minutes, if there is one.
    pub fn first_leg_minutes(&self) -> Option<f64> {
        self.legs.first().map(|l| l.duration_s / 60.0)
    }
}
