//! Unit tests for trip-progress.

use trip_core::{GeoPoint, SimClock, Tick};
use trip_route::{Itinerary, Leg, Route, Step};

use crate::{DriftEvent, ProgressTracker, RouteState, TickReport};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn step(distance_m: f64, duration_s: f64, html: &str, lat: f64) -> Step {
    Step {
        distance_m,
        duration_s,
        html_instructions: html.to_string(),
        start_location: GeoPoint::new(lat, 0.0),
    }
}

/// 10 km / 1000 s in three segments: 2 km, 5 km, 3 km.
fn ten_km_route() -> Route {
    let leg = Leg::from_steps(
        "Origin",
        "Destination",
        GeoPoint::new(9.0, 9.0),
        vec![
            step(2_000.0, 200.0, "Head <b>north</b>", 1.0),
            step(5_000.0, 500.0, "Merge onto <b>US-101 N</b>", 2.0),
            step(3_000.0, 300.0, "Take exit <b>439</b>", 3.0),
        ],
    );
    Route::build(&[Itinerary::single_leg(leg)]).unwrap()
}

fn tracker() -> ProgressTracker {
    ProgressTracker::new(5.0, 100.0)
}

fn run_to_arrival(route: &Route) -> Vec<TickReport> {
    let mut state = RouteState::new(route, SimClock::new(300));
    let t = tracker();
    let mut reports = Vec::new();
    loop {
        let r = t.tick(&mut state);
        let arrived = r.arrived;
        reports.push(r);
        if arrived || reports.len() > 1_000 {
            return reports;
        }
    }
}

#[cfg(test)]
mod route_state {
    use super::*;

    #[test]
    fn starts_at_first_segment() {
        let route = ten_km_route();
        let state = RouteState::new(&route, SimClock::new(300));
        assert_eq!(state.elapsed_secs(), 0);
        assert_eq!(state.segment_index, 0);
        assert_eq!(state.remaining_m, 10_000.0);
        assert_eq!(state.segment_budget_m, 10_000.0);
        assert!((state.last_eta_min - 1_000.0 / 60.0).abs() < 1e-9);
        assert_eq!(state.current_location(), GeoPoint::new(1.0, 0.0));
        assert_eq!(state.location_label(), "Head north");
    }
}

#[cfg(test)]
mod tracker_tests {
    use super::*;

    #[test]
    fn elapsed_advances_by_exactly_one_step() {
        let route = ten_km_route();
        let reports = run_to_arrival(&route);
        for (i, r) in reports.iter().enumerate() {
            assert_eq!(r.elapsed_secs, 300 * (i as u64 + 1));
            assert_eq!(r.tick, Tick(i as u64 + 1));
        }
    }

    #[test]
    fn remaining_follows_linear_fraction() {
        let route = ten_km_route();
        let reports = run_to_arrival(&route);
        let remaining: Vec<f64> = reports.iter().map(|r| r.remaining_m.round()).collect();
        assert_eq!(remaining, vec![7_000.0, 4_000.0, 1_000.0, 0.0]);
        assert!((reports[0].fraction - 0.3).abs() < 1e-12);
        assert!((reports[3].fraction - 1.2).abs() < 1e-12);
    }

    #[test]
    fn arrival_on_fourth_tick() {
        let route = ten_km_route();
        let reports = run_to_arrival(&route);
        assert_eq!(reports.len(), 4);
        assert!(reports[..3].iter().all(|r| !r.arrived));
        assert!(reports[3].arrived);
        assert_eq!(reports[3].remaining_m, 0.0);
    }

    #[test]
    fn remaining_stays_in_bounds_and_never_increases() {
        let route = ten_km_route();
        let reports = run_to_arrival(&route);
        let mut last = route.total_distance_m;
        for r in &reports {
            assert!(r.remaining_m >= 0.0 && r.remaining_m <= route.total_distance_m);
            assert!(r.remaining_m <= last);
            last = r.remaining_m;
        }
    }

    #[test]
    fn segment_pointer_consumes_against_budget() {
        let route = ten_km_route();
        let reports = run_to_arrival(&route);
        let idx: Vec<usize> = reports.iter().map(|r| r.segment_index).collect();
        // Monotone, and the pointer stays on the last segment at remaining = 0
        // because the budget test is strict.
        assert_eq!(idx, vec![1, 1, 2, 2]);
        assert_eq!(reports[0].location_label, "Merge onto US-101 N");
        assert_eq!(reports[0].location, GeoPoint::new(2.0, 0.0));
    }

    #[test]
    fn eta_decays_from_previous_eta() {
        let route = ten_km_route();
        let reports = run_to_arrival(&route);
        let eta0 = 1_000.0 / 60.0;
        let eta1 = 7_000.0 / 8_000.0 * eta0;
        let eta2 = 4_000.0 / 8_000.0 * eta1;
        let eta3 = 1_000.0 / 3_000.0 * eta2;
        assert!((reports[0].eta_min - eta1).abs() < 1e-9);
        assert!((reports[1].eta_min - eta2).abs() < 1e-9);
        assert!((reports[2].eta_min - eta3).abs() < 1e-9);
        assert_eq!(reports[3].eta_min, 0.0);
    }

    #[test]
    fn drift_compares_against_previous_tick() {
        let route = ten_km_route();
        let reports = run_to_arrival(&route);
        let breached: Vec<bool> = reports.iter().map(|r| r.drift.breached).collect();
        // 16.67 → 14.58 → 7.29 → 2.43 → 0.00
        assert_eq!(breached, vec![false, true, false, false]);
        assert_eq!(reports[1].drift.previous_eta_min, reports[0].eta_min);
    }

    #[test]
    fn exhausted_pointer_reports_route_end() {
        // Segments cover only 1 km of a 10 km leg.
        let mut leg = Leg::from_steps(
            "Origin",
            "The End",
            GeoPoint::new(5.0, 5.0),
            vec![step(1_000.0, 100.0, "Go", 1.0)],
        );
        leg.distance_m = 10_000.0;
        leg.duration_s = 1_000.0;
        let route = Route::build(&[Itinerary::single_leg(leg)]).unwrap();
        let mut state = RouteState::new(&route, SimClock::new(300));
        let r = tracker().tick(&mut state);
        assert_eq!(r.segment_index, 1);
        assert_eq!(r.location_label, "The End");
        assert_eq!(r.location, GeoPoint::new(5.0, 5.0));
        assert_eq!(state.segment_budget_m, 9_000.0);
    }

    #[test]
    fn zero_distance_route_arrives_immediately() {
        let mut leg = Leg::from_steps("A", "B", GeoPoint::new(0.0, 0.0), vec![]);
        leg.duration_s = 60.0;
        let route = Route::build(&[Itinerary::single_leg(leg)]).unwrap();
        let mut state = RouteState::new(&route, SimClock::new(300));
        let r = tracker().tick(&mut state);
        assert!(r.arrived);
        assert_eq!(r.eta_min, 0.0);
    }

    #[test]
    fn arrival_band_is_inclusive() {
        // 400 m over 4 s; 3 s per tick → exactly 100 m left after one tick.
        let mut leg = Leg::from_steps("A", "B", GeoPoint::new(0.0, 0.0), vec![]);
        leg.distance_m = 400.0;
        leg.duration_s = 4.0;
        let route = Route::build(&[Itinerary::single_leg(leg)]).unwrap();
        let mut state = RouteState::new(&route, SimClock::new(3));
        let r = tracker().tick(&mut state);
        assert_eq!(r.remaining_m, 100.0);
        assert!(r.arrived);
    }

    #[test]
    fn report_lines() {
        let route = ten_km_route();
        let mut state = RouteState::new(&route, SimClock::new(300));
        let r = tracker().tick(&mut state);
        assert_eq!(
            r.progress_line(),
            "[Update] Location: Merge onto US-101 N, Remaining Distance: 7.00 km"
        );
        assert_eq!(r.eta_line(), "Updated ETA: 14.58 minutes");
    }
}

#[cfg(test)]
mod drift_tests {
    use super::*;

    #[test]
    fn exactly_threshold_does_not_breach() {
        let d = DriftEvent::evaluate(20.0, 15.0, 5.0);
        assert_eq!(d.magnitude_min, 5.0);
        assert!(!d.breached);
    }

    #[test]
    fn just_over_threshold_breaches() {
        let d = DriftEvent::evaluate(20.0, 14.99, 5.0);
        assert!(d.breached);
    }

    #[test]
    fn magnitude_is_absolute() {
        let d = DriftEvent::evaluate(10.0, 16.5, 5.0);
        assert!((d.magnitude_min - 6.5).abs() < 1e-12);
        assert!(d.breached);
    }
}
