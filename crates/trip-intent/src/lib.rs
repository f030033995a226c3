//! `trip-intent` — what to do once the ETA drifts.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`memory`]   | `IntentMemory` — the two cached answers, `is_affirmative`        |
//! | [`prompt`]   | `Prompter` trait, `ScriptedPrompter`                             |
//! | [`dialogue`] | `Dialogue` state machine, `DialogueState`, `Resolution`          |
//! | [`oracle`]   | `SuggestionOracle` trait, `NoopOracle`                           |
//! | [`select`]   | `RecommendationSelector`, `Recommendation`, `Selection`          |
//! | [`error`]    | `IntentError`, `OracleError`                                     |
//!
//! # Flow
//!
//! ```text
//! AskUrgency ──affirmative──▶ AskSwitch ──affirmative──▶ Resolved(Switch)
//!     │                           └──────otherwise─────▶ Resolved(NoSwitch)
//!     └──────otherwise──────▶ Resolved(Relaxed)
//! ```
//!
//! Answers are cached in an [`IntentMemory`] owned by the trip, so each
//! question is put to the user at most once per run however many drift
//! breaches occur.  Only `Resolved(Switch)` consults the selector.

pub mod dialogue;
pub mod error;
pub mod memory;
pub mod oracle;
pub mod prompt;
pub mod select;


pub use dialogue::{Dialogue, DialogueLine, DialogueOutcome, DialogueState, Resolution};
pub use error::{IntentError, IntentResult, OracleError};
pub use memory::{IntentKey, IntentMemory, is_affirmative};
pub use oracle::{NoopOracle, SuggestionOracle};
pub use prompt::{Prompter, ScriptedPrompter};
pub use select::{Recommendation, RecommendationSelector, Selection};
