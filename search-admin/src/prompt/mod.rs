//! Line-oriented interactive prompts.
//!
//! Prompting sits behind the `Prompter` trait so session tests can script
//! their input instead of reading stdin.

use std::io::{self, Write};

/// Source of interactive answers for the admin session.
pub trait Prompter {
    /// Ask a yes/no question. Only a trimmed, case-insensitive "yes" is
    /// affirmative.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;

    /// Print a prompt and read one line of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Prompter backed by stdin/stdout.
pub struct StdinPrompter;

impl StdinPrompter {
    /// Create a new stdin-backed prompter.
    pub fn new() -> Self {
        Self
    }

    fn ask(&self, prompt: &str) -> io::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input)
    }
}

impl Default for StdinPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for StdinPrompter {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let input = self.ask(question)?;
        Ok(input.trim().eq_ignore_ascii_case("yes"))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.ask(prompt)
    }
}
