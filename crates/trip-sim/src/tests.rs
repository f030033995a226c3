//! Integration tests for trip-sim.

use std::cell::Cell;

use trip_core::{GeoPoint, TravelMode, TripConfig};
use trip_intent::{
    DialogueLine, NoopOracle, OracleError, Prompter, ScriptedPrompter, SuggestionOracle,
};
use trip_progress::{DriftEvent, TickReport};
use trip_route::{Itinerary, Leg, Route, StaticProvider, Step};

use crate::{SimError, TripBuilder, TripObserver, TripSim};

// ── Helpers ───────────────────────────────────────────────────────────────────

const HOME: &str = "367 Addison Avenue, Palo Alto, CA";
const WORK: &str = "Golden Gate Bridge, San Francisco, CA";

fn test_config() -> TripConfig {
    TripConfig { tick_interval_ms: 0, ..TripConfig::default() }
}

fn step(distance_m: f64, duration_s: f64, html: &str) -> Step {
    Step {
        distance_m,
        duration_s,
        html_instructions: html.to_string(),
        start_location: GeoPoint::new(37.5, -122.2),
    }
}

/// 10 km / 1000 s: arrives on tick 4, one breach on tick 2.
fn short_drive() -> Itinerary {
    Itinerary::single_leg(Leg::from_steps(
        HOME,
        WORK,
        GeoPoint::new(37.8199, -122.4783),
        vec![
            step(2_000.0, 200.0, "Head <b>north</b>"),
            step(5_000.0, 500.0, "Merge onto <b>US-101 N</b>"),
            step(3_000.0, 300.0, "Take exit <b>439</b>"),
        ],
    ))
}

/// 50 km / 3000 s: ten ticks, several breaches.
fn long_drive() -> Itinerary {
    Itinerary::single_leg(Leg::from_steps(
        HOME,
        WORK,
        GeoPoint::new(37.8199, -122.4783),
        vec![
            step(8_000.0, 480.0, "A"),
            step(12_000.0, 720.0, "B"),
            step(10_000.0, 600.0, "C"),
            step(20_000.0, 1_200.0, "D"),
        ],
    ))
}

fn alternative(minutes: f64, start: &str) -> Itinerary {
    Itinerary::single_leg(Leg::from_steps(start, WORK, GeoPoint::new(0.0, 0.0), vec![
        step(1_000.0, minutes * 60.0, "Ride"),
    ]))
}

fn provider(drive: Itinerary) -> StaticProvider {
    StaticProvider::new()
        .with_place(HOME, GeoPoint::new(37.4443, -122.1598))
        .with_place(WORK, GeoPoint::new(37.8199, -122.4783))
        .with_itineraries(TravelMode::Driving, vec![drive])
        .with_itineraries(TravelMode::Transit, vec![alternative(1.0, "Transit Center")])
        .with_itineraries(TravelMode::Bicycling, vec![alternative(2.0, "12 Scooter Way")])
}

fn sim<O: SuggestionOracle>(
    provider: StaticProvider,
    oracle:   O,
    answers:  &[&str],
) -> TripSim<StaticProvider, O, ScriptedPrompter> {
    TripBuilder::new(test_config(), provider, oracle, ScriptedPrompter::new(answers.iter().copied()))
        .origin(HOME)
        .destination(WORK)
        .build()
        .unwrap()
}

/// Records every observer callback.
#[derive(Default)]
struct Recorder {
    started:  usize,
    ticks:    Vec<TickReport>,
    drifts:   Vec<DriftEvent>,
    dialogue: Vec<DialogueLine>,
    messages: Vec<String>,
    arrivals: usize,
    failures: Vec<String>,
}

impl TripObserver for Recorder {
    fn on_trip_start(&mut self, _route: &Route) {
        self.started += 1;
    }
    fn on_tick(&mut self, report: &TickReport) {
        self.ticks.push(report.clone());
    }
    fn on_drift(&mut self, drift: &DriftEvent) {
        self.drifts.push(*drift);
    }
    fn on_dialogue(&mut self, line: &DialogueLine) {
        self.dialogue.push(line.clone());
    }
    fn on_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
    fn on_arrival(&mut self, _report: &TickReport) {
        self.arrivals += 1;
    }
    fn on_failure(&mut self, error: &SimError) {
        self.failures.push(error.to_string());
    }
}

/// Replays `answers`, then fails as if stdin were closed.
struct ClosingPrompter {
    answers: Vec<&'static str>,
}

impl Prompter for ClosingPrompter {
    fn ask(&mut self, _question: &str) -> std::io::Result<String> {
        if self.answers.is_empty() {
            return Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(self.answers.remove(0).to_string())
    }
}

struct CountingOracle(Cell<usize>);

impl SuggestionOracle for CountingOracle {
    fn suggest(&self, _prompt: &str) -> Result<String, OracleError> {
        self.0.set(self.0.get() + 1);
        Err(OracleError::Request("connection reset".into()))
    }
}

// ── TripBuilder validation ────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_fresh_memory() {
        let s = sim(provider(short_drive()), NoopOracle, &[]);
        assert_eq!(s.origin, HOME);
        assert_eq!(s.memory, trip_intent::IntentMemory::new());
    }

    #[test]
    fn missing_destination_errors() {
        let result = TripBuilder::new(test_config(), provider(short_drive()), NoopOracle, ScriptedPrompter::default())
            .origin(HOME)
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn blank_origin_errors() {
        let result = TripBuilder::new(test_config(), provider(short_drive()), NoopOracle, ScriptedPrompter::default())
            .origin("   ")
            .destination(WORK)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn invalid_config_errors() {
        let config = TripConfig { sim_secs_per_tick: 0, ..test_config() };
        let result = TripBuilder::new(config, provider(short_drive()), NoopOracle, ScriptedPrompter::default())
            .origin(HOME)
            .destination(WORK)
            .build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }
}

// ── Run loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;
    use trip_intent::Resolution;
    use trip_intent::dialogue::{RELAXED_MESSAGE, STAY_ON_ROUTE_MESSAGE, SWITCH_QUESTION, URGENCY_QUESTION};
    use trip_route::Waypoint;

    #[test]
    fn runs_to_arrival() {
        let mut s = sim(provider(short_drive()), NoopOracle, &["no", "no"]);
        let mut obs = Recorder::default();
        let outcome = s.run(&mut obs).unwrap();
        assert_eq!(outcome.ticks, 4);
        assert_eq!(obs.started, 1);
        assert_eq!(obs.ticks.len(), 4);
        assert_eq!(obs.arrivals, 1);
        assert!(obs.ticks.last().unwrap().arrived);
        assert_eq!(outcome.final_eta_min, 0.0);
        assert!(obs.failures.is_empty());
    }

    #[test]
    fn driving_request_uses_geocoded_coords_and_depart_now() {
        let mut s = sim(provider(short_drive()), NoopOracle, &["no", "no"]);
        s.run(&mut Recorder::default()).unwrap();
        let first = &s.provider.requests()[0];
        assert_eq!(first.mode, TravelMode::Driving);
        assert!(first.depart_now);
        assert_eq!(first.origin, Waypoint::Coords(GeoPoint::new(37.4443, -122.1598)));
    }

    #[test]
    fn elapsed_and_remaining_are_monotone() {
        let mut s = sim(provider(long_drive()), NoopOracle, &["no", "no"]);
        let mut obs = Recorder::default();
        s.run(&mut obs).unwrap();
        let mut last_remaining = f64::INFINITY;
        let mut last_index = 0;
        for (i, r) in obs.ticks.iter().enumerate() {
            assert_eq!(r.elapsed_secs, 300 * (i as u64 + 1));
            assert!(r.remaining_m <= last_remaining);
            assert!(r.remaining_m >= 0.0 && r.remaining_m <= 50_000.0);
            assert!(r.segment_index >= last_index);
            last_remaining = r.remaining_m;
            last_index = r.segment_index;
        }
    }

    #[test]
    fn only_breaches_open_the_dialogue() {
        let mut s = sim(provider(short_drive()), NoopOracle, &["not at all", "no"]);
        let mut obs = Recorder::default();
        let outcome = s.run(&mut obs).unwrap();
        assert_eq!(outcome.breaches, 1);
        assert_eq!(obs.drifts.len(), 1);
        assert!(obs.drifts[0].breached);
        assert_eq!(outcome.resolutions, vec![Resolution::Relaxed]);
        assert_eq!(obs.messages, vec![RELAXED_MESSAGE.to_string()]);
    }

    #[test]
    fn declining_switch_never_queries_alternatives() {
        let mut s = sim(provider(short_drive()), NoopOracle, &["Yes, very", "no thanks"]);
        let mut obs = Recorder::default();
        let outcome = s.run(&mut obs).unwrap();
        assert_eq!(outcome.resolutions, vec![Resolution::NoSwitch]);
        assert_eq!(outcome.messages, vec![STAY_ON_ROUTE_MESSAGE.to_string()]);
        assert_eq!(s.provider.calls_for(TravelMode::Transit), 0);
        assert_eq!(s.provider.calls_for(TravelMode::Bicycling), 0);
    }

    #[test]
    fn switching_reports_transit_first() {
        let mut s = sim(provider(short_drive()), NoopOracle, &["very", "yes"]);
        let mut obs = Recorder::default();
        let outcome = s.run(&mut obs).unwrap();
        assert_eq!(outcome.resolutions, vec![Resolution::Switch]);
        assert!(outcome.messages[0].starts_with("There's public transport nearby"));
        assert_eq!(s.provider.calls_for(TravelMode::Transit), 1);
    }

    #[test]
    fn oracle_failure_does_not_abort() {
        let oracle = CountingOracle(Cell::new(0));
        let mut s = sim(provider(short_drive()), oracle, &["very", "yes"]);
        let outcome = s.run(&mut Recorder::default()).unwrap();
        assert_eq!(s.oracle.0.get(), 1);
        assert!(outcome.messages[0].starts_with("There's public transport nearby"));
    }

    #[test]
    fn each_question_asked_at_most_once_per_run() {
        let mut s = sim(provider(long_drive()), NoopOracle, &["yes", "no", "extra", "extra"]);
        let mut obs = Recorder::default();
        let outcome = s.run(&mut obs).unwrap();
        assert!(outcome.breaches >= 2, "got {} breaches", outcome.breaches);
        assert_eq!(s.prompter.asked(), [URGENCY_QUESTION, SWITCH_QUESTION]);
        assert!(outcome.resolutions.iter().all(|r| *r == Resolution::NoSwitch));
        let recalled = obs
            .dialogue
            .iter()
            .filter(|l| matches!(l, DialogueLine::Recalled { .. }))
            .count();
        assert_eq!(recalled as u64, 2 * (outcome.breaches - 1));
    }

    #[test]
    fn blank_answers_are_not_asked_again() {
        let mut s = sim(provider(long_drive()), NoopOracle, &[]);
        let outcome = s.run(&mut Recorder::default()).unwrap();
        assert!(outcome.breaches >= 2, "got {} breaches", outcome.breaches);
        let urgency_asks = s.prompter.asked().iter().filter(|q| *q == URGENCY_QUESTION).count();
        assert_eq!(urgency_asks, 1);
        assert!(outcome.resolutions.iter().all(|r| *r == Resolution::Relaxed));
        assert_eq!(s.prompter.asked().len() as u64, 1 + outcome.breaches);
    }

    #[test]
    fn separate_runs_do_not_share_answers() {
        let mut first = sim(provider(short_drive()), NoopOracle, &["yes", "no"]);
        first.run(&mut Recorder::default()).unwrap();
        let mut second = sim(provider(short_drive()), NoopOracle, &["nope"]);
        let outcome = second.run(&mut Recorder::default()).unwrap();
        assert_eq!(outcome.resolutions, vec![Resolution::Relaxed]);
    }
}

// ── Failures ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod failure_tests {
    use super::*;
    use trip_intent::IntentKey;
    use trip_intent::dialogue::{SWITCH_QUESTION, URGENCY_QUESTION};
    use trip_route::RouteError;

    #[test]
    fn unknown_destination_is_geocode_failure() {
        let p = StaticProvider::new()
            .with_place(HOME, GeoPoint::new(1.0, 1.0))
            .with_itineraries(TravelMode::Driving, vec![short_drive()]);
        let mut s = sim(p, NoopOracle, &[]);
        let mut obs = Recorder::default();
        let err = s.run(&mut obs).unwrap_err();
        assert!(matches!(err, SimError::Route(RouteError::GeocodeFailure(ref a)) if a == WORK));
        assert_eq!(s.provider.calls_for(TravelMode::Driving), 0);
        assert_eq!(obs.failures.len(), 1);
        assert!(obs.ticks.is_empty());
    }

    #[test]
    fn empty_directions_is_route_unavailable() {
        let p = StaticProvider::new()
            .with_place(HOME, GeoPoint::new(1.0, 1.0))
            .with_place(WORK, GeoPoint::new(2.0, 2.0));
        let mut s = sim(p, NoopOracle, &[]);
        let err = s.run(&mut Recorder::default()).unwrap_err();
        assert!(matches!(err, SimError::Route(RouteError::RouteUnavailable(_))));
    }

    #[test]
    fn provider_error_aborts_without_retry() {
        let p = provider(short_drive()).failing(TravelMode::Driving);
        let mut s = sim(p, NoopOracle, &[]);
        let err = s.run(&mut Recorder::default()).unwrap_err();
        assert!(matches!(err, SimError::Route(RouteError::Provider(_))));
        assert_eq!(s.provider.calls_for(TravelMode::Driving), 1);
    }

    #[test]
    fn prompter_failure_still_reports_earlier_lines() {
        let mut s = TripBuilder::new(
            test_config(),
            provider(short_drive()),
            NoopOracle,
            ClosingPrompter { answers: vec!["yes"] },
        )
        .origin(HOME)
        .destination(WORK)
        .build()
        .unwrap();
        let mut obs = Recorder::default();
        let err = s.run(&mut obs).unwrap_err();
        assert!(matches!(err, SimError::Dialogue(_)));
        assert_eq!(
            obs.dialogue,
            vec![
                DialogueLine::Prompt(URGENCY_QUESTION.into()),
                DialogueLine::Answer("yes".into()),
                DialogueLine::Prompt(SWITCH_QUESTION.into()),
            ]
        );
        assert_eq!(obs.failures.len(), 1);
        assert_eq!(s.memory.get(IntentKey::IsLate), Some("yes"));
    }

    #[test]
    fn plan_route_without_running() {
        let s = sim(provider(short_drive()), NoopOracle, &[]);
        let route = s.plan_route().unwrap();
        assert_eq!(route.segments.len(), 3);
        assert_eq!(route.end_address, WORK);
    }
}
