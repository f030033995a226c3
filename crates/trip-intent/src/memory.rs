//! Cached dialogue answers.

use std::fmt;

/// The two questions whose answers are remembered for a whole run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum IntentKey {
    IsLate,
    SwitchTransport,
}

impl IntentKey {
    pub fn as_str(self) -> &'static str {
        match self {
            IntentKey::IsLate          => "is_late",
            IntentKey::SwitchTransport => "switch_transport",
        }
    }
}

impl fmt::Display for IntentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answers captured so far in one simulation run.
///
/// Each key is written at most once: the first answer sticks and is kept
/// verbatim, even when blank.  A fresh memory per run is the only way to
/// reset it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentMemory {
    is_late:          Option<String>,
    switch_transport: Option<String>,
}

impl IntentMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: IntentKey) -> Option<&str> {
        self.slot(key).as_deref()
    }

    pub fn is_answered(&self, key: IntentKey) -> bool {
        self.slot(key).is_some()
    }

    /// Store `answer` for `key` unless the key already holds an answer.
    /// Returns `true` if the answer was stored.
    pub fn record(&mut self, key: IntentKey, answer: &str) -> bool {
        let slot = match key {
            IntentKey::IsLate          => &mut self.is_late,
            IntentKey::SwitchTransport => &mut self.switch_transport,
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(answer.to_string());
        true
    }

    fn slot(&self, key: IntentKey) -> &Option<String> {
        match key {
            IntentKey::IsLate          => &self.is_late,
            IntentKey::SwitchTransport => &self.switch_transport,
        }
    }
}

/// `true` if `answer` contains `"yes"` or `"very"`, ignoring case.
///
/// Plain substring matching: `"eyes"` counts, `"yep"` does not.
pub fn is_affirmative(answer: &str) -> bool {
    let lower = answer.to_lowercase();
    lower.contains("yes") || lower.contains("very")
}
