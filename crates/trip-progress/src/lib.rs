//! `trip-progress` — simulated position and ETA along a fixed route.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`state`]   | `RouteState` — live per-trip progress over a borrowed `Route`   |
//! | [`tracker`] | `ProgressTracker` — one tick of progress, `TickReport`          |
//! | [`drift`]   | `DriftEvent` — ETA change between consecutive ticks             |
//!
//! # Movement model
//!
//! Progress is a linear function of simulated time:
//!
//! 1. `elapsed += sim_secs_per_tick` (via the trip's `SimClock`).
//! 2. `remaining = total_distance × (1 − elapsed / total_duration)`,
//!    clamped to `[0, total_distance]`.
//! 3. Segments are consumed front to back against a separate *segment
//!    budget* that starts at the total distance and is only ever decremented.
//! 4. `eta = remaining / budget × previous_eta` — a geometric-decay
//!    recurrence on the previous ETA, not a fresh duration estimate.
//!
//! Arrival is signalled once `remaining` drops to the configured tolerance
//! band (100 m by default); exact zero is reachable only when elapsed time
//! overshoots the route duration.

pub mod drift;
pub mod state;
pub mod tracker;

#[cfg(test)]
mod tests;

pub use drift::DriftEvent;
pub use state::RouteState;
pub use tracker::{ProgressTracker, TickReport};
