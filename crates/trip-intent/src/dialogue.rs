//! The two-question intent dialogue.

use log::debug;

use crate::{IntentKey, IntentMemory, IntentResult, Prompter, is_affirmative};

pub const URGENCY_QUESTION: &str =
    "You're running late. How important is it for you to arrive on time?";
pub const SWITCH_QUESTION: &str =
    "Would you like to switch to a faster mode of transport like a scooter or public transport?";
/// Asked, and then reported, on the relaxed path.
pub const RELAXED_MESSAGE: &str = "No worries! Let's take it easy and enjoy the drive. \
     Would you like me to help find some parking along the way?";
pub const STAY_ON_ROUTE_MESSAGE: &str =
    "You chose to stay on your current route. Let's keep going!";

/// How a dialogue ended.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Resolution {
    /// Urgent and willing to switch: consult the recommendation selector.
    Switch,
    /// Urgent but staying on the current route.
    NoSwitch,
    /// Not urgent.
    Relaxed,
}

/// Dialogue state machine.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DialogueState {
    AskUrgency,
    AskSwitch,
    Resolved(Resolution),
}

/// One line of the dialogue transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueLine {
    /// A question put to the user.
    Prompt(String),
    /// What the user typed.
    Answer(String),
    /// A cached answer reused instead of asking again.
    Recalled { key: IntentKey, answer: String },
}

/// Result of one pass through the dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueOutcome {
    pub resolution: Resolution,
    pub transcript: Vec<DialogueLine>,
}

/// Drives the dialogue over a caller-owned [`IntentMemory`] and [`Prompter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Dialogue;

impl Dialogue {
    /// Run from `AskUrgency` to a resolution.
    ///
    /// Questions whose answers are already in `memory` are not asked again.
    /// The relaxed path always puts the parking offer to the user; that
    /// answer is transcribed but not cached.
    ///
    /// Each transcript line is passed to `on_line` as soon as it happens, so
    /// a prompter failure still leaves the lines before it reported.
    pub fn run<P, F>(
        &self,
        memory:      &mut IntentMemory,
        prompter:    &mut P,
        mut on_line: F,
    ) -> IntentResult<DialogueOutcome>
    where
        P: Prompter + ?Sized,
        F: FnMut(&DialogueLine),
    {
        let mut transcript = Vec::new();
        let mut emit = |line: DialogueLine| {
            on_line(&line);
            transcript.push(line);
        };

        let mut state = DialogueState::AskUrgency;
        let resolution = loop {
            state = match state {
                DialogueState::Resolved(r) => break r,
                s => self.step(s, memory, prompter, &mut emit)?,
            };
        };

        if resolution == Resolution::Relaxed {
            emit(DialogueLine::Prompt(RELAXED_MESSAGE.to_string()));
            let answer = prompter.ask(RELAXED_MESSAGE)?;
            emit(DialogueLine::Answer(answer));
        }

        debug!("dialogue resolved: {resolution:?}");
        Ok(DialogueOutcome { resolution, transcript })
    }

    /// Perform a single transition.  Resolved states are returned unchanged.
    pub fn step<P: Prompter + ?Sized>(
        &self,
        state:      DialogueState,
        memory:     &mut IntentMemory,
        prompter:   &mut P,
        emit:       &mut dyn FnMut(DialogueLine),
    ) -> IntentResult<DialogueState> {
        Ok(match state {
            DialogueState::AskUrgency => {
                let answer = recall_or_ask(IntentKey::IsLate, URGENCY_QUESTION, memory, prompter, emit)?;
                if is_affirmative(&answer) {
                    DialogueState::AskSwitch
                } else {
                    DialogueState::Resolved(Resolution::Relaxed)
                }
            }
            DialogueState::AskSwitch => {
                let answer = recall_or_ask(IntentKey::SwitchTransport, SWITCH_QUESTION, memory, prompter, emit)?;
                if is_affirmative(&answer) {
                    DialogueState::Resolved(Resolution::Switch)
                } else {
                    DialogueState::Resolved(Resolution::NoSwitch)
                }
            }
            resolved @ DialogueState::Resolved(_) => resolved,
        })
    }
}

fn recall_or_ask<P: Prompter + ?Sized>(
    key:        IntentKey,
    question:   &str,
    memory:     &mut IntentMemory,
    prompter:   &mut P,
    emit:       &mut dyn FnMut(DialogueLine),
) -> IntentResult<String> {
    if let Some(cached) = memory.get(key) {
        emit(DialogueLine::Recalled { key, answer: cached.to_string() });
        return Ok(cached.to_string());
    }
    emit(DialogueLine::Prompt(question.to_string()));
    let answer = prompter.ask(question)?;
    emit(DialogueLine::Answer(answer.clone()));
    memory.record(key, &answer);
    Ok(answer)
}
