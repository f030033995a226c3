//! The `TripSim` struct and its tick loop.

use std::thread;

use log::{debug, warn};

use trip_core::{GeoPoint, TravelMode, TripConfig};
use trip_intent::dialogue::{RELAXED_MESSAGE, STAY_ON_ROUTE_MESSAGE};
use trip_intent::{
    Dialogue, IntentMemory, Prompter, RecommendationSelector, Resolution, SuggestionOracle,
};
use trip_progress::{ProgressTracker, RouteState, TickReport};
use trip_route::{DirectionsRequest, Route, RouteError, RouteProvider, Waypoint};

use crate::{SimResult, TripObserver};

/// Summary of a completed trip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripOutcome {
    /// Ticks simulated, including the arrival tick.
    pub ticks:         u64,
    /// Ticks whose drift breached the threshold.
    pub breaches:      u64,
    /// One entry per breach, in order.
    pub resolutions:   Vec<Resolution>,
    /// Messages reported after each dialogue, in order.
    pub messages:      Vec<String>,
    pub final_eta_min: f64,
}

/// One simulated trip.
///
/// Owns its collaborators and the run's [`IntentMemory`]; nothing is shared
/// with other trips in the same process.  Create via
/// [`TripBuilder`][crate::TripBuilder].
pub struct TripSim<P, O, Q> {
    pub config:      TripConfig,
    pub provider:    P,
    pub oracle:      O,
    pub prompter:    Q,
    pub origin:      String,
    pub destination: String,
    /// Dialogue answers captured so far in this run.
    pub memory:      IntentMemory,
}

impl<P, O, Q> TripSim<P, O, Q>
where
    P: RouteProvider,
    O: SuggestionOracle,
    Q: Prompter,
{
    /// Geocode both ends, request the driving route, and tick until arrival.
    ///
    /// Any failure before the first tick aborts the run; nothing is retried.
    pub fn run<B: TripObserver>(&mut self, observer: &mut B) -> SimResult<TripOutcome> {
        let result = self.run_inner(observer);
        if let Err(e) = &result {
            observer.on_failure(e);
        }
        result
    }

    /// Geocode and fetch the depart-now driving route without simulating.
    pub fn plan_route(&self) -> SimResult<Route> {
        let origin = self.resolve(&self.origin)?;
        let destination = self.resolve(&self.destination)?;
        let request = DirectionsRequest::depart_now(
            Waypoint::Coords(origin),
            Waypoint::Coords(destination),
            TravelMode::Driving,
        );
        let itineraries = self.provider.directions(&request)?;
        Ok(Route::build(&itineraries)?)
    }

    fn run_inner<B: TripObserver>(&mut self, observer: &mut B) -> SimResult<TripOutcome> {
        let route = self.plan_route()?;
        observer.on_trip_start(&route);

        let tracker = ProgressTracker::from_config(&self.config);
        let mut state = RouteState::new(&route, self.config.make_clock());
        let mut outcome = TripOutcome::default();

        loop {
            if self.config.tick_interval_ms > 0 {
                thread::sleep(self.config.tick_interval());
            }

            let report = tracker.tick(&mut state);
            observer.on_tick(&report);
            outcome.ticks += 1;

            if report.drift.breached {
                observer.on_drift(&report.drift);
                outcome.breaches += 1;
                let (resolution, message) = self.handle_breach(&report, observer)?;
                outcome.resolutions.push(resolution);
                outcome.messages.push(message);
            }

            if report.arrived {
                observer.on_arrival(&report);
                outcome.final_eta_min = report.eta_min;
                return Ok(outcome);
            }
        }
    }

    fn handle_breach<B: TripObserver>(
        &mut self,
        report:   &TickReport,
        observer: &mut B,
    ) -> SimResult<(Resolution, String)> {
        let dialogue = Dialogue.run(&mut self.memory, &mut self.prompter, |line| {
            observer.on_dialogue(line)
        })?;

        let message = match dialogue.resolution {
            Resolution::Switch => {
                RecommendationSelector
                    .select(&self.provider, &self.oracle, &self.destination, report.eta_min)
                    .text
            }
            Resolution::NoSwitch => STAY_ON_ROUTE_MESSAGE.to_string(),
            Resolution::Relaxed  => RELAXED_MESSAGE.to_string(),
        };
        observer.on_message(&message);
        Ok((dialogue.resolution, message))
    }

    fn resolve(&self, address: &str) -> SimResult<GeoPoint> {
        match self.provider.geocode(address) {
            Ok(Some(point)) => {
                debug!("geocoded {address:?} to {point}");
                Ok(point)
            }
            Ok(None) => Err(RouteError::GeocodeFailure(address.to_string()).into()),
            Err(e) => {
                warn!("geocoding {address:?} failed: {e}");
                Err(e.into())
            }
        }
    }
}
