//! Google Geocoding and Directions over HTTPS.

use log::debug;
use serde::Deserialize;

use trip_core::{GeoPoint, TripConfig};
use trip_route::{
    DirectionsRequest, Itinerary, Leg, RouteError, RouteProvider, RouteResult, Step,
};

use crate::agent::{build_agent, describe, read_json};

pub const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// [`RouteProvider`] backed by the Google Maps web services.
pub struct GoogleMapsProvider {
    agent:   ureq::Agent,
    api_key: String,
}

impl GoogleMapsProvider {
    pub fn new(api_key: impl Into<String>, config: &TripConfig) -> Self {
        Self {
            agent:   build_agent(config.request_timeout()),
            api_key: api_key.into(),
        }
    }
}

impl RouteProvider for GoogleMapsProvider {
    fn geocode(&self, address: &str) -> RouteResult<Option<GeoPoint>> {
        debug!("geocoding {address:?}");
        let response = self
            .agent
            .get(GEOCODE_URL)
            .set("Accept", "application/json")
            .query("address", address)
            .query("key", &self.api_key)
            .call()
            .map_err(|e| RouteError::Provider(describe("geocoding", e)))?;
        let reply: GeocodeReply = read_json(response.into_reader())
            .map_err(|e| RouteError::Provider(format!("geocoding reply: {e}")))?;
        reply.into_point()
    }

    fn directions(&self, request: &DirectionsRequest) -> RouteResult<Vec<Itinerary>> {
        debug!("{} directions {} -> {}", request.mode, request.origin, request.destination);
        let mut call = self
            .agent
            .get(DIRECTIONS_URL)
            .set("Accept", "application/json")
            .query("origin", &request.origin.to_query())
            .query("destination", &request.destination.to_query())
            .query("mode", request.mode.as_str())
            .query("key", &self.api_key);
        if request.depart_now {
            call = call.query("departure_time", "now");
        }
        let response = call
            .call()
            .map_err(|e| RouteError::Provider(describe("directions", e)))?;
        let reply: DirectionsReply = read_json(response.into_reader())
            .map_err(|e| RouteError::Provider(format!("directions reply: {e}")))?;
        reply.into_itineraries()
    }
}

// ── Wire format ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<LatLng> for GeoPoint {
    fn from(p: LatLng) -> Self {
        GeoPoint::new(p.lat, p.lng)
    }
}

/// `{ "value": 1234, "text": "1.2 km" }`; only the value is used.
#[derive(Debug, Deserialize)]
pub(crate) struct Quantity {
    value: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeReply {
    status:        String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results:       Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsReply {
    status:        String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes:        Vec<WireRoute>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireRoute {
    #[serde(default)]
    legs: Vec<WireLeg>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireLeg {
    distance:            Quantity,
    duration:            Quantity,
    #[serde(default)]
    duration_in_traffic: Option<Quantity>,
    #[serde(default)]
    start_address:       String,
    #[serde(default)]
    end_address:         String,
    start_location:      LatLng,
    end_location:        LatLng,
    #[serde(default)]
    steps:               Vec<WireStep>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireStep {
    distance:          Quantity,
    duration:          Quantity,
    #[serde(default)]
    html_instructions: String,
    start_location:    LatLng,
}

fn status_error(service: &str, status: &str, message: Option<String>) -> RouteError {
    match message {
        Some(m) => RouteError::Provider(format!("{service} status {status}: {m}")),
        None => RouteError::Provider(format!("{service} status {status}")),
    }
}

impl GeocodeReply {
    /// First result's location; `None` for `ZERO_RESULTS`.
    pub(crate) fn into_point(self) -> RouteResult<Option<GeoPoint>> {
        match self.status.as_str() {
            "OK" => Ok(self.results.into_iter().next().map(|r| r.geometry.location.into())),
            "ZERO_RESULTS" => Ok(None),
            other => Err(status_error("geocoding", other, self.error_message)),
        }
    }
}

impl DirectionsReply {
    /// Every route as an [`Itinerary`]; empty for `ZERO_RESULTS`.
    pub(crate) fn into_itineraries(self) -> RouteResult<Vec<Itinerary>> {
        match self.status.as_str() {
            "OK" => Ok(self.routes.into_iter().map(WireRoute::into_itinerary).collect()),
            "ZERO_RESULTS" => Ok(Vec::new()),
            other => Err(status_error("directions", other, self.error_message)),
        }
    }
}

impl WireRoute {
    fn into_itinerary(self) -> Itinerary {
        Itinerary { legs: self.legs.into_iter().map(WireLeg::into_leg).collect() }
    }
}

impl WireLeg {
    fn into_leg(self) -> Leg {
        Leg {
            distance_m:            self.distance.value,
            duration_s:            self.duration.value,
            duration_in_traffic_s: self.duration_in_traffic.map(|q| q.value),
            start_address:         self.start_address,
            end_address:           self.end_address,
            start_location:        self.start_location.into(),
            end_location:          self.end_location.into(),
            steps:                 self.steps.into_iter().map(WireStep::into_step).collect(),
        }
    }
}

impl WireStep {
    fn into_step(self) -> Step {
        Step {
            distance_m:        self.distance.value,
            duration_s:        self.duration.value,
            html_instructions: self.html_instructions,
            start_location:    self.start_location.into(),
        }
    }
}
