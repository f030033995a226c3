//! Canned Palo Alto → San Francisco drive for running without API keys.
//!
//! Whatever addresses the user types are mapped onto the same two points, so
//! the offline run always follows this route.

use trip_core::{GeoPoint, TravelMode};
use trip_route::{Itinerary, Leg, StaticProvider, Step};

const PALO_ALTO:   GeoPoint = GeoPoint { lat: 37.4443, lng: -122.1598 };
const GOLDEN_GATE: GeoPoint = GeoPoint { lat: 37.8199, lng: -122.4783 };

fn step(distance_m: f64, duration_s: f64, html: &str, lat: f64, lng: f64) -> Step {
    Step {
        distance_m,
        duration_s,
        html_instructions: html.to_string(),
        start_location:    GeoPoint::new(lat, lng),
    }
}

/// The driving route: 55 km, 42 minutes without traffic.
fn drive(origin: &str, destination: &str) -> Itinerary {
    let mut leg = Leg::from_steps(origin, destination, GOLDEN_GATE, vec![
        step(300.0,    60.0,    "Head <b>northwest</b> on <b>Addison Ave</b>",       37.4443, -122.1598),
        step(1_900.0,  240.0,   "Turn <b>right</b> onto <b>Embarcadero Rd</b>",       37.4461, -122.1621),
        step(41_200.0, 1_500.0, "Merge onto <b>US-101 N</b>",                          37.4530, -122.1410),
        step(6_100.0,  420.0,   "Take exit <b>434B</b> toward <b>Golden Gate Br</b>", 37.7650, -122.4050),
        step(5_600.0,  300.0,   "Continue onto <b>Doyle Dr</b><div>Toll road</div>",  37.8030, -122.4490),
    ]);
    leg.start_location = PALO_ALTO;
    leg.duration_in_traffic_s = Some(3_060.0);
    Itinerary::single_leg(leg)
}

fn alternative(start: &str, destination: &str, minutes: f64) -> Itinerary {
    Itinerary::single_leg(Leg::from_steps(start, destination, GOLDEN_GATE, vec![
        step(1_000.0, minutes * 60.0, "Depart", 37.7765, -122.3943),
    ]))
}

/// A [`StaticProvider`] that resolves `origin` and `destination` and serves
/// the canned drive plus transit and bicycling alternatives.
pub fn provider(origin: &str, destination: &str) -> StaticProvider {
    StaticProvider::new()
        .with_place(origin, PALO_ALTO)
        .with_place(destination, GOLDEN_GATE)
        .with_itineraries(TravelMode::Driving, vec![drive(origin, destination)])
        .with_itineraries(TravelMode::Transit, vec![alternative("4th St & King St", destination, 6.0)])
        .with_itineraries(TravelMode::Bicycling, vec![alternative("Crissy Field", destination, 4.0)])
}
