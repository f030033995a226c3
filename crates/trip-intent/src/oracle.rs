//! The `SuggestionOracle` trait — opaque text generation.

use crate::OracleError;

/// A text-completion capability consulted for phrasing suggestions.
///
/// The engine never depends on what the oracle says: every call site has a
/// static fallback for when it fails.
pub trait SuggestionOracle {
    /// Return a short natural-language reply to `prompt`.
    fn suggest(&self, prompt: &str) -> Result<String, OracleError>;
}

impl<O: SuggestionOracle + ?Sized> SuggestionOracle for &O {
    fn suggest(&self, prompt: &str) -> Result<String, OracleError> {
        (**self).suggest(prompt)
    }
}

impl<O: SuggestionOracle + ?Sized> SuggestionOracle for Box<O> {
    fn suggest(&self, prompt: &str) -> Result<String, OracleError> {
        (**self).suggest(prompt)
    }
}

/// A [`SuggestionOracle`] that is always disabled, so callers always use
/// their static text.
pub struct NoopOracle;

impl SuggestionOracle for NoopOracle {
    fn suggest(&self, _prompt: &str) -> Result<String, OracleError> {
        Err(OracleError::Disabled)
    }
}
