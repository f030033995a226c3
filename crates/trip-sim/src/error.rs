use thiserror::Error;
use trip_core::CoreError;
use trip_intent::IntentError;
use trip_route::RouteError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("dialogue failed: {0}")]
    Dialogue(#[from] IntentError),
}

pub type SimResult<T> = Result<T, SimError>;
