//! Trip observer trait and the log-backed console transcript.

use log::{error, info};

use trip_intent::DialogueLine;
use trip_progress::{DriftEvent, TickReport};
use trip_route::Route;

use crate::SimError;

/// Callbacks invoked by [`TripSim::run`][crate::TripSim::run] as the trip
/// unfolds.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait TripObserver {
    /// The route has been built; the first tick has not happened yet.
    fn on_trip_start(&mut self, _route: &Route) {}

    /// Called after every tick, before any dialogue.
    fn on_tick(&mut self, _report: &TickReport) {}

    /// Called for every tick whose drift breached the threshold.
    fn on_drift(&mut self, _drift: &DriftEvent) {}

    /// One prompt, answer, or recalled answer from the intent dialogue.
    fn on_dialogue(&mut self, _line: &DialogueLine) {}

    /// A message reported to the driver after a dialogue resolves.
    fn on_message(&mut self, _message: &str) {}

    /// The tick that reached the arrival band.
    fn on_arrival(&mut self, _report: &TickReport) {}

    /// The run is about to return `error`.
    fn on_failure(&mut self, _error: &SimError) {}
}

/// A [`TripObserver`] that does nothing.
pub struct NoopObserver;

impl TripObserver for NoopObserver {}

/// Writes the trip transcript through the `log` facade.
///
/// With `env_logger` initialised by the binary, every line carries a
/// timestamp.
pub struct LogObserver;

impl TripObserver for LogObserver {
    fn on_trip_start(&mut self, route: &Route) {
        info!("Simulation started from {} to {}", route.start_address, route.end_address);
        info!("Initial ETA: {:.2} minutes", route.initial_eta_min());
    }

    fn on_tick(&mut self, report: &TickReport) {
        info!("{}", report.progress_line());
        info!("{}", report.eta_line());
    }

    fn on_drift(&mut self, drift: &DriftEvent) {
        info!(
            "ETA changed by {:.2} minutes ({:.2} -> {:.2})",
            drift.magnitude_min, drift.previous_eta_min, drift.new_eta_min
        );
    }

    fn on_dialogue(&mut self, line: &DialogueLine) {
        match line {
            DialogueLine::Prompt(q)  => info!("Assistant: {q}"),
            DialogueLine::Answer(a)  => info!("User: {a}"),
            DialogueLine::Recalled { key, answer } => {
                info!("Using earlier answer for {key}: {answer}")
            }
        }
    }

    fn on_message(&mut self, message: &str) {
        info!("Assistant: {message}");
    }

    fn on_arrival(&mut self, _report: &TickReport) {
        info!("Arrived at your destination!");
    }

    fn on_failure(&mut self, e: &SimError) {
        error!("Simulation aborted: {e}");
    }
}
