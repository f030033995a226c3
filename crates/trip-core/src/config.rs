//! Trip simulation configuration.
//!
//! Every threshold the tick loop consults is named here with its default, so
//! nothing has to be discovered empirically from the loop itself.  The demo
//! binary loads overrides from a JSON file (feature `serde`); absent fields
//! keep their defaults.

use crate::{CoreError, CoreResult, SimClock};

/// Simulated seconds per tick (5 minutes).
pub const DEFAULT_SIM_SECS_PER_TICK: u32 = 300;
/// Wall-clock pause between ticks.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 3_000;
/// ETA drift (minutes) that must be strictly exceeded to open the dialogue.
pub const DEFAULT_DRIFT_THRESHOLD_MIN: f64 = 5.0;
/// Remaining distance (metres) at or below which the vehicle has arrived.
pub const DEFAULT_ARRIVAL_THRESHOLD_M: f64 = 100.0;
/// Upper bound on any single provider or oracle request.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Top-level trip configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TripConfig {
    /// Simulated seconds added to elapsed time on every tick.
    pub sim_secs_per_tick: u32,

    /// Wall-clock pause before each tick.  Paces the loop only; simulated
    /// time advances by `sim_secs_per_tick` regardless.  Tests use 0.
    pub tick_interval_ms: u64,

    /// Drift (minutes) between consecutive ETAs that counts as a breach.
    /// Comparison is strict: a drift equal to the threshold does not breach.
    pub drift_threshold_min: f64,

    /// Arrival tolerance band in metres.
    pub arrival_threshold_m: f64,

    /// Timeout applied to each network request made by live collaborators.
    pub request_timeout_ms: u64,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            sim_secs_per_tick:   DEFAULT_SIM_SECS_PER_TICK,
            tick_interval_ms:    DEFAULT_TICK_INTERVAL_MS,
            drift_threshold_min: DEFAULT_DRIFT_THRESHOLD_MIN,
            arrival_threshold_m: DEFAULT_ARRIVAL_THRESHOLD_M,
            request_timeout_ms:  DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl TripConfig {
    /// Reject values the tick loop cannot make progress with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.sim_secs_per_tick == 0 {
            return Err(CoreError::Config("sim_secs_per_tick must be > 0".into()));
        }
        if !self.drift_threshold_min.is_finite() || self.drift_threshold_min < 0.0 {
            return Err(CoreError::Config(format!(
                "drift_threshold_min must be a non-negative number, got {}",
                self.drift_threshold_min
            )));
        }
        if !self.arrival_threshold_m.is_finite() || self.arrival_threshold_m < 0.0 {
            return Err(CoreError::Config(format!(
                "arrival_threshold_m must be a non-negative number, got {}",
                self.arrival_threshold_m
            )));
        }
        if self.request_timeout_ms == 0 {
            return Err(CoreError::Config("request_timeout_ms must be > 0".into()));
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.sim_secs_per_tick)
    }

    #[inline]
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }

    #[inline]
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_timeout_ms)
    }
}
