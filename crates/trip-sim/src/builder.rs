//! Fluent builder for constructing a [`TripSim`].

use trip_core::TripConfig;
use trip_intent::{IntentMemory, Prompter, SuggestionOracle};
use trip_route::RouteProvider;

use crate::{SimError, SimResult, TripSim};

/// Fluent builder for [`TripSim<P, O, Q>`].
///
/// # Required inputs
///
/// - [`TripConfig`] — thresholds, per-tick simulated seconds, pacing
/// - `P: RouteProvider` — directions and geocoding
/// - `O: SuggestionOracle` — phrasing of recommendations
/// - `Q: Prompter` — where dialogue answers come from
/// - `.origin(..)` and `.destination(..)` — free-text addresses
pub struct TripBuilder<P, O, Q> {
    config:      TripConfig,
    provider:    P,
    oracle:      O,
    prompter:    Q,
    origin:      Option<String>,
    destination: Option<String>,
}

impl<P, O, Q> TripBuilder<P, O, Q>
where
    P: RouteProvider,
    O: SuggestionOracle,
    Q: Prompter,
{
    pub fn new(config: TripConfig, provider: P, oracle: O, prompter: Q) -> Self {
        Self {
            config,
            provider,
            oracle,
            prompter,
            origin:      None,
            destination: None,
        }
    }

    pub fn origin(mut self, address: impl Into<String>) -> Self {
        self.origin = Some(address.into());
        self
    }

    pub fn destination(mut self, address: impl Into<String>) -> Self {
        self.destination = Some(address.into());
        self
    }

    /// Validate inputs and return a ready-to-run [`TripSim`] with an empty
    /// [`IntentMemory`].
    pub fn build(self) -> SimResult<TripSim<P, O, Q>> {
        self.config.validate()?;
        let origin = required(self.origin, "origin")?;
        let destination = required(self.destination, "destination")?;

        Ok(TripSim {
            config:   self.config,
            provider: self.provider,
            oracle:   self.oracle,
            prompter: self.prompter,
            origin,
            destination,
            memory:   IntentMemory::new(),
        })
    }
}

fn required(value: Option<String>, what: &str) -> SimResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(SimError::Config(format!("{what} address is required"))),
    }
}
