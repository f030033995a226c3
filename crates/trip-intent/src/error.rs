use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntentError {
    #[error("could not read answer: {0}")]
    Prompt(#[from] std::io::Error),
}

pub type IntentResult<T> = Result<T, IntentError>;

/// Failure of a [`SuggestionOracle`][crate::SuggestionOracle] call.  Always
/// recovered by the caller with a static fallback text.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("suggestion oracle is disabled")]
    Disabled,

    #[error("suggestion oracle request failed: {0}")]
    Request(String),

    #[error("suggestion oracle returned an empty reply")]
    EmptyReply,
}
