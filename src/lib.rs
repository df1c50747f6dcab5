//! # greeter
//!
//! Asks for a name on the command line and greets the user.
//!
//! Blank answers are asked again, `quit` in any letter case leaves without a
//! greeting. All console I/O goes through [`BufRead`] and [`Write`] handles,
//! the binary passes in stdin and stdout.

use log::debug;
use std::io::{BufRead, Write};

mod error;

pub use error::GreeterError;

const PROMPT: &str = "Enter your name (or 'quit' to exit): ";
const QUIT_KEYWORD: &str = "quit";
const FAREWELL: &str = "Exiting program. Goodbye!";

/// Texts used while talking to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub quit_keyword: String,
    pub farewell: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            prompt: PROMPT.to_string(),
            quit_keyword: QUIT_KEYWORD.to_string(),
            farewell: FAREWELL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Name(String),
    Quit,
}

/// Decides what a single answer means.
///
/// Returns `None` for blank answers, which should be asked again. An accepted
/// name is returned exactly as typed, surrounding spaces included.
pub fn classify(line: &str, config: &Config) -> Option<Outcome> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.to_lowercase() == config.quit_keyword.to_lowercase() {
        Some(Outcome::Quit)
    } else {
        Some(Outcome::Name(line.to_string()))
    }
}

fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => line,
    }
}

/// Prompts until the user enters a name or the quit keyword.
///
/// The prompt stays on the same line as the answer, so the output is flushed
/// before every read. On quit the farewell line is written to `output`.
///
/// # Errors
///
/// Returns [`GreeterError::UnexpectedEof`] when the input runs out first and
/// [`GreeterError::Io`] when reading or writing fails.
pub fn read_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
) -> Result<Outcome, GreeterError> {
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(GreeterError::UnexpectedEof);
        }

        match classify(strip_line_ending(&line), config) {
            Some(Outcome::Quit) => {
                writeln!(output, "{}", config.farewell)?;
                debug!("User asked to quit.");
                return Ok(Outcome::Quit);
            }
            Some(outcome) => {
                debug!("Accepted {outcome:?}.");
                return Ok(outcome);
            }
            None => debug!("Blank answer, asking again."),
        }
    }
}

pub fn greeting(name: &str) -> String {
    format!("Hello {name}!")
}

/// Writes the greeting line for an accepted name, nothing after quit.
pub fn greet<W: Write>(outcome: &Outcome, output: &mut W) -> Result<(), GreeterError> {
    if let Outcome::Name(name) = outcome {
        writeln!(output, "{}", greeting(name))?;
        output.flush()?;
    }
    Ok(())
}

/// Asks for a name and greets it.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
) -> Result<Outcome, GreeterError> {
    let outcome = read_name(input, output, config)?;
    greet(&outcome, output)?;
    Ok(outcome)
}
