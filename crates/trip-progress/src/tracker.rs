//! One tick of simulated progress.

use log::debug;

use trip_core::{GeoPoint, Tick, TripConfig};

use crate::{DriftEvent, RouteState};

/// Everything one tick produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub tick:           Tick,
    pub elapsed_secs:   u64,
    /// `elapsed / total_duration`; may exceed 1.0 on the overshooting tick.
    pub fraction:       f64,
    pub remaining_m:    f64,
    pub segment_index:  usize,
    pub location:       GeoPoint,
    pub location_label: String,
    pub eta_min:        f64,
    pub drift:          DriftEvent,
    pub arrived:        bool,
}

impl TickReport {
    /// `[Update] Location: <label>, Remaining Distance: <km> km`
    pub fn progress_line(&self) -> String {
        format!(
            "[Update] Location: {}, Remaining Distance: {:.2} km",
            self.location_label,
            self.remaining_m / 1_000.0
        )
    }

    /// `Updated ETA: <min> minutes`
    pub fn eta_line(&self) -> String {
        format!("Updated ETA: {:.2} minutes", self.eta_min)
    }
}

/// Advances a [`RouteState`] one tick at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressTracker {
    pub drift_threshold_min: f64,
    pub arrival_threshold_m: f64,
}

impl ProgressTracker {
    pub fn new(drift_threshold_min: f64, arrival_threshold_m: f64) -> Self {
        Self { drift_threshold_min, arrival_threshold_m }
    }

    pub fn from_config(config: &TripConfig) -> Self {
        Self::new(config.drift_threshold_min, config.arrival_threshold_m)
    }

    /// Advance `state` by one tick of simulated time.
    pub fn tick(&self, state: &mut RouteState<'_>) -> TickReport {
        let route = state.route;

        state.clock.advance();
        let elapsed = state.clock.elapsed_secs();

        let total = route.total_distance_m;
        let fraction = elapsed as f64 / route.total_duration_s;
        state.remaining_m = (total - fraction * total).max(0.0);

        let segments = &route.segments;
        while state.segment_index < segments.len()
            && state.remaining_m < state.segment_budget_m - segments[state.segment_index].distance_m
        {
            state.segment_budget_m -= segments[state.segment_index].distance_m;
            state.segment_index += 1;
        }

        let previous_eta = state.last_eta_min;
        let eta = if state.segment_budget_m > 0.0 {
            state.remaining_m / state.segment_budget_m * previous_eta
        } else {
            0.0
        };
        let drift = DriftEvent::evaluate(previous_eta, eta, self.drift_threshold_min);
        state.last_eta_min = eta;

        debug!(
            "{}: fraction={fraction:.3} remaining={:.1}m segment={}/{} budget={:.1}m",
            state.clock,
            state.remaining_m,
            state.segment_index,
            segments.len(),
            state.segment_budget_m,
        );

        TickReport {
            tick:           state.clock.current_tick,
            elapsed_secs:   elapsed,
            fraction,
            remaining_m:    state.remaining_m,
            segment_index:  state.segment_index,
            location:       state.current_location(),
            location_label: state.location_label(),
            eta_min:        eta,
            drift,
            arrived:        state.remaining_m <= self.arrival_threshold_m,
        }
    }
}
