//! Route-subsystem error type.

use thiserror::Error;

/// Errors produced while resolving places or building a route.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The origin or destination could not be resolved to coordinates.
    #[error("could not geocode {0:?}")]
    GeocodeFailure(String),

    /// The provider answered, but with nothing a trip can be simulated on.
    #[error("route unavailable: {0}")]
    RouteUnavailable(&'static str),

    /// Transport, status, or decoding failure talking to the provider.
    #[error("route provider request failed: {0}")]
    Provider(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
