//! Terminal input.

use std::io::{self, BufRead, Write};

use trip_intent::Prompter;

/// Reads one line of stdin per question.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        print!("{question} ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Ask `question`, returning `default` for an empty reply.
pub fn ask_or(prompter: &mut StdinPrompter, question: &str, default: &str) -> io::Result<String> {
    let answer = prompter.ask(&format!("{question} [{default}]:"))?;
    Ok(if answer.is_empty() { default.to_string() } else { answer })
}
