//! The `RouteProvider` trait — the seam to a mapping service.
//!
//! # Pluggability
//!
//! `trip-sim` and the recommendation selector only ever talk to a provider
//! through this trait, so the engine runs unchanged against the live HTTP
//! client (`trip-http`) or the in-memory [`StaticProvider`][crate::StaticProvider].
//!
//! Implementations are called from the single simulation thread; no `Send`
//! or `Sync` bound is required.

use std::fmt;

use trip_core::{GeoPoint, TravelMode};

use crate::{Itinerary, RouteResult};

/// An origin or destination as understood by a provider.
#[derive(Debug, Clone, PartialEq)]
pub enum Waypoint {
    /// Free-text address, resolved by the provider.
    Address(String),
    /// Already-geocoded coordinates.
    Coords(GeoPoint),
}

impl Waypoint {
    /// The query-string form of this waypoint.
    pub fn to_query(&self) -> String {
        match self {
            Waypoint::Address(a) => a.clone(),
            Waypoint::Coords(p)  => p.as_query(),
        }
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Waypoint::Address(a) => f.write_str(a),
            Waypoint::Coords(p)  => write!(f, "{p}"),
        }
    }
}

/// A single directions query.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    pub origin:      Waypoint,
    pub destination: Waypoint,
    pub mode:        TravelMode,
    /// Ask for real-time ("depart now") estimates.
    pub depart_now:  bool,
}

impl DirectionsRequest {
    /// A depart-now request for `mode`.
    pub fn depart_now(origin: Waypoint, destination: Waypoint, mode: TravelMode) -> Self {
        Self { origin, destination, mode, depart_now: true }
    }
}

/// Pluggable mapping service.
pub trait RouteProvider {
    /// Resolve a free-text address to coordinates.
    ///
    /// `Ok(None)` means the provider answered but found nothing; `Err` is
    /// reserved for transport or decoding failures.
    fn geocode(&self, address: &str) -> RouteResult<Option<GeoPoint>>;

    /// Compute zero or more itineraries for `request`.
    fn directions(&self, request: &DirectionsRequest) -> RouteResult<Vec<Itinerary>>;
}

impl<P: RouteProvider + ?Sized> RouteProvider for &P {
    fn geocode(&self, address: &str) -> RouteResult<Option<GeoPoint>> {
        (**self).geocode(address)
    }

    fn directions(&self, request: &DirectionsRequest) -> RouteResult<Vec<Itinerary>> {
        (**self).directions(request)
    }
}

impl<P: RouteProvider + ?Sized> RouteProvider for Box<P> {
    fn geocode(&self, address: &str) -> RouteResult<Option<GeoPoint>> {
        (**self).geocode(address)
    }

    fn directions(&self, request: &DirectionsRequest) -> RouteResult<Vec<Itinerary>> {
        (**self).directions(request)
    }
}
