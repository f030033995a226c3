//! ETA drift between consecutive ticks.

/// The change in ETA produced by one tick.  Not persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftEvent {
    pub previous_eta_min: f64,
    pub new_eta_min:      f64,
    /// `|new − previous|`, minutes.
    pub magnitude_min:    f64,
    /// `magnitude > threshold` (strict).
    pub breached:         bool,
}

impl DriftEvent {
    /// Compare two ETAs against `threshold_min`.
    pub fn evaluate(previous_eta_min: f64, new_eta_min: f64, threshold_min: f64) -> Self {
        let magnitude_min = (new_eta_min - previous_eta_min).abs();
        Self {
            previous_eta_min,
            new_eta_min,
            magnitude_min,
            breached: magnitude_min > threshold_min,
        }
    }
}
