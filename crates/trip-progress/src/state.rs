//! Live trip state.

use trip_core::{GeoPoint, SimClock};
use trip_route::{Route, Segment};

/// Progress of one simulated trip over a borrowed [`Route`].
///
/// Mutated only by [`ProgressTracker::tick`][crate::ProgressTracker::tick].
/// Invariants held across ticks:
///
/// - `clock.elapsed_secs()` grows by exactly `clock.sim_secs_per_tick`.
/// - `0 <= remaining_m <= route.total_distance_m`, never increasing.
/// - `0 <= segment_index <= route.segments.len()`, never decreasing.
#[derive(Debug, Clone)]
pub struct RouteState<'r> {
    pub route: &'r Route,

    /// Accelerated trip clock; its elapsed time is the simulated time.
    pub clock: SimClock,

    /// Distance left to the destination, metres.
    pub remaining_m: f64,

    /// Index of the active segment; equals `segments.len()` once exhausted.
    pub segment_index: usize,

    /// Running total the segment pointer is advanced against.  Starts at the
    /// route's total distance and is decremented by each consumed segment's
    /// distance; it is not recomputed from `remaining_m`.
    pub segment_budget_m: f64,

    /// ETA reported by the previous tick (or the initial ETA), minutes.
    pub last_eta_min: f64,
}

impl<'r> RouteState<'r> {
    /// Fresh state at the start of `route`.
    pub fn new(route: &'r Route, clock: SimClock) -> Self {
        Self {
            route,
            clock,
            remaining_m:      route.total_distance_m,
            segment_index:    0,
            segment_budget_m: route.total_distance_m,
            last_eta_min:     route.initial_eta_min(),
        }
    }

    /// Simulated seconds since the trip started.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.clock.elapsed_secs()
    }

    /// The active segment, or `None` once the pointer has run off the end.
    pub fn current_segment(&self) -> Option<&'r Segment> {
        self.route.segments.get(self.segment_index)
    }

    /// Current position: the active segment's start, or the route end.
    pub fn current_location(&self) -> GeoPoint {
        self.current_segment()
            .map_or(self.route.end_location, |s| s.start_location)
    }

    /// Display label for the current position.
    pub fn location_label(&self) -> String {
        self.current_segment()
            .map_or_else(|| self.route.end_address.clone(), Segment::instruction)
    }
}
