//! An in-memory route provider.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use trip_core::{GeoPoint, TravelMode};

use crate::{DirectionsRequest, Itinerary, RouteError, RouteProvider, RouteResult};

/// A [`RouteProvider`] that answers from fixed tables.
///
/// Unknown addresses geocode to `None`; modes without itineraries return an
/// empty list.  Every directions request is recorded so callers can check
/// which modes were queried and how often.
#[derive(Debug, Default)]
pub struct StaticProvider {
    places:      HashMap<String, GeoPoint>,
    itineraries: HashMap<TravelMode, Vec<Itinerary>>,
    failing:     HashSet<TravelMode>,
    requests:    RefCell<Vec<DirectionsRequest>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `address` geocode to `point`.
    pub fn with_place(mut self, address: impl Into<String>, point: GeoPoint) -> Self {
        self.places.insert(address.into(), point);
        self
    }

    /// Answer `mode` requests with `itineraries`.
    pub fn with_itineraries(mut self, mode: TravelMode, itineraries: Vec<Itinerary>) -> Self {
        self.itineraries.insert(mode, itineraries);
        self
    }

    /// Make every `mode` request fail with [`RouteError::Provider`].
    pub fn failing(mut self, mode: TravelMode) -> Self {
        self.failing.insert(mode);
        self
    }

    /// Number of directions requests made for `mode` so far.
    pub fn calls_for(&self, mode: TravelMode) -> usize {
        self.requests.borrow().iter().filter(|r| r.mode == mode).count()
    }

    /// Every directions request made so far, in order.
    pub fn requests(&self) -> Vec<DirectionsRequest> {
        self.requests.borrow().clone()
    }
}

impl RouteProvider for StaticProvider {
    fn geocode(&self, address: &str) -> RouteResult<Option<GeoPoint>> {
        Ok(self.places.get(address).copied())
    }

    fn directions(&self, request: &DirectionsRequest) -> RouteResult<Vec<Itinerary>> {
        self.requests.borrow_mut().push(request.clone());
        if self.failing.contains(&request.mode) {
            return Err(RouteError::Provider(format!("{} directions unavailable", request.mode)));
        }
        Ok(self.itineraries.get(&request.mode).cloned().unwrap_or_default())
    }
}
