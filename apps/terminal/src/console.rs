//! # Console
//!
//! Prompting and printing over any `BufRead` + `Write` pair. The binary
//! wires it to stdin/stdout; tests feed it a scripted `Cursor`.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{AppError, AppResult};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes a rendered block (menu, cart, invoice) after a blank line.
    pub fn show(&mut self, block: &str) -> AppResult<()> {
        writeln!(self.output)?;
        self.output.write_all(block.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints the prompt and returns the trimmed answer.
    ///
    /// Returns [`AppError::InputClosed`] at end of input.
    fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until a whole number within the bounds is entered.
    pub fn read_int(&mut self, prompt: &str, min: Option<i64>, max: Option<i64>) -> AppResult<i64> {
        loop {
            let raw = self.ask(prompt)?;
            let value: i64 = match raw.parse() {
                Ok(v) => v,
                Err(_) => {
                    self.say("Invalid input. Please enter a whole number.")?;
                    continue;
                }
            };

            if let Some(min) = min.filter(|m| value < *m) {
                self.say(format!("Please enter a number >= {}.", min))?;
                continue;
            }
            if let Some(max) = max.filter(|m| value > *m) {
                self.say(format!("Please enter a number <= {}.", max))?;
                continue;
            }

            return Ok(value);
        }
    }

    /// Asks until the answer is y/yes or n/no (any case).
    pub fn read_yes_no(&mut self, prompt: &str) -> AppResult<bool> {
        loop {
            match self.ask(prompt)?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please type Y/Yes or N/No.")?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
