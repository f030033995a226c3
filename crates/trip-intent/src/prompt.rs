//! The `Prompter` trait — where dialogue answers come from.

use std::collections::VecDeque;
use std::io;

/// Source of free-text answers.
///
/// The console implementation blocks on one line of terminal input.
pub trait Prompter {
    /// Put `question` to the user and return their answer line, without the
    /// trailing newline.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        (**self).ask(question)
    }
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        (**self).ask(question)
    }
}

/// A [`Prompter`] that replays canned answers in order.
///
/// Every question asked is recorded.  Once the script runs out it answers
/// with an empty line.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked:   Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked:   Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}
