//! Travel mode enum shared by the route provider and the recommendation
//! selector.

/// The means of travel requested from a route provider.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// Private vehicle.  The simulated trip always uses this mode.
    #[default]
    Driving,
    /// Scheduled public transit (bus, rail, ferry…).
    Transit,
    /// Bicycle or scooter.
    Bicycling,
}

impl TravelMode {
    /// Lowercase label, also the value of the `mode` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Driving   => "driving",
            TravelMode::Transit   => "transit",
            TravelMode::Bicycling => "bicycling",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
