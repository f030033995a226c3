//! Alternative-transport recommendation.
//!
//! Alternatives are looked up as destination → destination itineraries, a
//! stand-in for "nearby faster options" rather than a real route from the
//! vehicle's current position.

use log::{debug, warn};

use trip_core::TravelMode;
use trip_route::{DirectionsRequest, Itinerary, RouteProvider, Waypoint};

use crate::{OracleError, SuggestionOracle};

/// What the selector settled on.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    Transit { minutes: f64 },
    Bicycle { minutes: f64, start_address: String },
    NoFasterAlternative,
}

impl Recommendation {
    /// Pick the first alternative strictly faster than `remaining_min`,
    /// checking transit before bicycling.
    pub fn choose(
        transit:       Option<&Itinerary>,
        bicycle:       Option<&Itinerary>,
        remaining_min: f64,
    ) -> Self {
        if let Some(minutes) = transit.and_then(Itinerary::first_leg_minutes) {
            if minutes < remaining_min {
                return Recommendation::Transit { minutes };
            }
        }
        if let Some(it) = bicycle {
            if let (Some(minutes), Some(leg)) = (it.first_leg_minutes(), it.legs.first()) {
                if minutes < remaining_min {
                    return Recommendation::Bicycle {
                        minutes,
                        start_address: leg.start_address.clone(),
                    };
                }
            }
        }
        Recommendation::NoFasterAlternative
    }

    /// The static text reported when the oracle cannot phrase it.
    pub fn fallback_text(&self) -> String {
        match self {
            Recommendation::Transit { .. } => "There's public transport nearby that will help you \
                 save time. Switch now to reach your destination faster."
                .to_string(),
            Recommendation::Bicycle { start_address, .. } => format!(
                "There's a scooter nearby that can speed up your trip. Head to {start_address}."
            ),
            Recommendation::NoFasterAlternative => "Unfortunately, no faster alternatives are \
                 available. Let me know if you'd like to contact someone about the delay."
                .to_string(),
        }
    }
}

/// The selector's answer: the choice and the text to report.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub recommendation: Recommendation,
    pub text:           String,
    /// `true` if `text` came from the oracle rather than the fallback.
    pub phrased:        bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationSelector;

impl RecommendationSelector {
    /// Query transit and bicycling alternatives to `destination` and compare
    /// them against `remaining_min`.
    ///
    /// A failed or empty alternative query counts as "no alternative".
    pub fn select<P, O>(
        &self,
        provider:      &P,
        oracle:        &O,
        destination:   &str,
        remaining_min: f64,
    ) -> Selection
    where
        P: RouteProvider + ?Sized,
        O: SuggestionOracle + ?Sized,
    {
        let transit = alternative(provider, destination, TravelMode::Transit);
        let bicycle = alternative(provider, destination, TravelMode::Bicycling);
        let recommendation = Recommendation::choose(transit.as_ref(), bicycle.as_ref(), remaining_min);
        debug!("recommendation for {remaining_min:.2} min remaining: {recommendation:?}");

        let fallback = recommendation.fallback_text();
        let prompt = format!(
            "You are driving to {destination}. Your ETA is {remaining_min:.2} minutes. \
             Suggested action: {fallback} Rephrase this as one short suggestion for the driver."
        );
        match oracle.suggest(&prompt) {
            Ok(text) if !text.trim().is_empty() => Selection {
                recommendation,
                text: text.trim().to_string(),
                phrased: true,
            },
            Ok(_) => {
                warn!("{}; using fallback text", OracleError::EmptyReply);
                Selection { recommendation, text: fallback, phrased: false }
            }
            Err(OracleError::Disabled) => Selection { recommendation, text: fallback, phrased: false },
            Err(e) => {
                warn!("{e}; using fallback text");
                Selection { recommendation, text: fallback, phrased: false }
            }
        }
    }
}

fn alternative<P: RouteProvider + ?Sized>(
    provider:    &P,
    destination: &str,
    mode:        TravelMode,
) -> Option<Itinerary> {
    let request = DirectionsRequest::depart_now(
        Waypoint::Address(destination.to_string()),
        Waypoint::Address(destination.to_string()),
        mode,
    );
    match provider.directions(&request) {
        Ok(mut itineraries) if !itineraries.is_empty() => Some(itineraries.swap_remove(0)),
        Ok(_) => {
            debug!("no {mode} alternative to {destination}");
            None
        }
        Err(e) => {
            warn!("{mode} alternative lookup failed: {e}");
            None
        }
    }
}
