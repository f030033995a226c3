//! `trip-sim` — tick loop orchestrator for the drive-sim trip simulator.
//!
//! # Tick loop
//!
//! ```text
//! geocode origin + destination        (GeocodeFailure aborts)
//! request depart-now driving route    (RouteUnavailable aborts, no retry)
//! build Route, RouteState
//! loop:
//!   ① Pause   — sleep config.tick_interval_ms (wall clock only)
//!   ② Tick    — ProgressTracker::tick → TickReport, progress lines
//!   ③ Drift   — on breach, run the intent dialogue:
//!                 Switch   → RecommendationSelector (oracle-phrased)
//!                 NoSwitch → stay-on-route message
//!                 Relaxed  → relaxed message
//!   ④ Arrival — stop once remaining <= arrival threshold
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use trip_core::TripConfig;
//! use trip_intent::{NoopOracle, ScriptedPrompter};
//! use trip_route::StaticProvider;
//! use trip_sim::{LogObserver, TripBuilder};
//!
//! let mut sim = TripBuilder::new(TripConfig::default(), provider, NoopOracle, prompter)
//!     .origin("367 Addison Avenue, Palo Alto, CA")
//!     .destination("Golden Gate Bridge, San Francisco, CA")
//!     .build()?;
//! let outcome = sim.run(&mut LogObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::TripBuilder;
pub use error::{SimError, SimResult};
pub use observer::{LogObserver, NoopObserver, TripObserver};
pub use sim::{TripOutcome, TripSim};
