//! The route model: a provider itinerary normalized into segments.
//!
//! A [`Route`] is built once at trip start and never mutated.  The progress
//! tracker borrows it for the whole run.

use trip_core::GeoPoint;

use crate::{Itinerary, RouteError, RouteResult, strip_markup};

// ── Segment ───────────────────────────────────────────────────────────────────

/// One ordered step of the route.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub distance_m:            f64,
    pub duration_s:            f64,
    /// Instruction text with provider markup, display-only.
    pub instruction_html:      String,
    pub start_location:        GeoPoint,
    /// Distance from the route start to the end of this segment.
    pub cumulative_distance_m: f64,
    /// Duration from the route start to the end of this segment.
    pub cumulative_duration_s: f64,
}

impl Segment {
    /// Instruction with markup removed.
    pub fn instruction(&self) -> String {
        strip_markup(&self.instruction_html)
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The driving route a trip is simulated on.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub segments:              Vec<Segment>,
    /// Leg distance in metres.  Not necessarily the sum of segment distances.
    pub total_distance_m:      f64,
    /// Leg duration in seconds.  Always > 0.
    pub total_duration_s:      f64,
    pub traffic_duration_s:    Option<f64>,
    pub start_address:         String,
    pub end_address:           String,
    pub end_location:          GeoPoint,
}

impl Route {
    /// Normalize the first leg of the first itinerary.
    ///
    /// # Errors
    ///
    /// [`RouteError::RouteUnavailable`] when there is no itinerary, the
    /// itinerary has no legs, the leg duration is zero (it later divides
    /// elapsed time), or any distance/duration is negative or not finite.
    pub fn build(itineraries: &[Itinerary]) -> RouteResult<Route> {
        let itinerary = itineraries
            .first()
            .ok_or(RouteError::RouteUnavailable("provider returned no itinerary"))?;
        let leg = itinerary
            .legs
            .first()
            .ok_or(RouteError::RouteUnavailable("itinerary has no legs"))?;

        if !leg.duration_s.is_finite() || leg.duration_s <= 0.0 {
            return Err(RouteError::RouteUnavailable("leg has zero duration"));
        }
        if !valid_quantity(leg.distance_m) {
            return Err(RouteError::RouteUnavailable("leg distance is malformed"));
        }

        let mut segments = Vec::with_capacity(leg.steps.len());
        let (mut dist, mut dur) = (0.0, 0.0);
        for step in &leg.steps {
            if !valid_quantity(step.distance_m) || !valid_quantity(step.duration_s) {
                return Err(RouteError::RouteUnavailable("step distance or duration is malformed"));
            }
            dist += step.distance_m;
            dur += step.duration_s;
            segments.push(Segment {
                distance_m:            step.distance_m,
                duration_s:            step.duration_s,
                instruction_html:      step.html_instructions.clone(),
                start_location:        step.start_location,
                cumulative_distance_m: dist,
                cumulative_duration_s: dur,
            });
        }

        Ok(Route {
            segments,
            total_distance_m:   leg.distance_m,
            total_duration_s:   leg.duration_s,
            traffic_duration_s: leg.duration_in_traffic_s,
            start_address:      leg.start_address.clone(),
            end_address:        leg.end_address.clone(),
            end_location:       leg.end_location,
        })
    }

    /// The ETA reported before the first tick, in minutes.
    #[inline]
    pub fn initial_eta_min(&self) -> f64 {
        self.total_duration_s / 60.0
    }

    /// Human-readable route printout: endpoints, totals, then one line per
    /// step.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Starting at: {}", self.start_address),
            format!("Ending at: {}", self.end_address),
            format!("Total Distance: {}", format_distance(self.total_distance_m)),
            format!("Estimated Time: {}", format_minutes(self.total_duration_s)),
            format!(
                "Travel time considering traffic: {}",
                self.traffic_duration_s.map_or_else(|| "N/A".to_string(), format_minutes)
            ),
            String::new(),
            "Step-by-step directions:".to_string(),
        ];
        lines.extend(
            self.segments
                .iter()
                .map(|s| format!("- {} for {}", s.instruction(), format_distance(s.distance_m))),
        );
        lines
    }
}

fn valid_quantity(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

/// `"850 m"` below one kilometre, `"12.3 km"` otherwise.
pub fn format_distance(metres: f64) -> String {
    if metres < 1_000.0 {
        format!("{} m", metres.round() as u64)
    } else {
        format!("{:.1} km", metres / 1_000.0)
    }
}

fn format_minutes(secs: f64) -> String {
    let mins = (secs / 60.0).round() as u64;
    if mins >= 60 {
        format!("{} hour {} mins", mins / 60, mins % 60)
    } else {
        format!("{mins} mins")
    }
}
