//! Line-oriented operator console.
//!
//! Every interactive prompt goes through [`Console`], which reads one line
//! at a time and recognises `main` as a request to abandon the current
//! operation and return to the menu.
//!
//! Only the exact lowercase word cancels. A passenger named Main is entered
//! as `Main` (or `MAIN`); the name validator title-cases it either way.

use crate::error::CliError;
use magnolia::validation::{FieldKind, FieldValue, Validator};
use std::io::{self, BufRead, Write};

/// Typed at any prompt to return to the main menu. Matched exactly.
pub const RETURN_TO_MENU: &str = "main";

/// Outcome of an interactive step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// The step produced a value.
    Done(T),
    /// The operator asked to return to the main menu.
    Cancelled,
}

/// Unwraps a [`Step`], returning `Ok(Step::Cancelled)` from the enclosing
/// function when the operator cancelled.
#[macro_export]
macro_rules! step {
    ($e:expr) => {
        match $e? {
            $crate::console::Step::Done(value) => value,
            $crate::console::Step::Cancelled => {
                return Ok($crate::console::Step::Cancelled);
            }
        }
    };
}

/// Reads operator input from `R` and writes prompts and reports to `W`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// A console on the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output stream, for bulk rendering.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the console and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<(), CliError> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Reads one trimmed line, or `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks for one line of input.
    ///
    /// # Errors
    ///
    /// End of input is reported as an I/O error, since an operation cannot
    /// finish without its answers.
    pub fn ask(&mut self, prompt: &str) -> Result<Step<String>, CliError> {
        match self.read_line(prompt)? {
            None => Err(CliError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before the operation finished",
            ))),
            Some(line) if line == RETURN_TO_MENU => Ok(Step::Cancelled),
            Some(line) => Ok(Step::Done(line)),
        }
    }

    /// Asks for a field until the validator accepts the answer.
    pub fn ask_field(
        &mut self,
        validator: &Validator,
        kind: FieldKind,
    ) -> Result<Step<FieldValue>, CliError> {
        loop {
            let raw = crate::step!(self.ask(kind.prompt()));
            match validator.validate(kind, &raw) {
                Ok(value) => return Ok(Step::Done(value)),
                Err(rejection) => {
                    self.say(format!("{rejection}. Please try again."))?;
                }
            }
        }
    }

    /// Asks a yes/no question until the answer is one or the other.
    pub fn confirm(&mut self, question: &str) -> Result<Step<bool>, CliError> {
        loop {
            let answer = crate::step!(self.ask(&format!("{question} (y/n)")));
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Step::Done(true)),
                "n" | "no" => return Ok(Step::Done(false)),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }
}
