//! Line-based prompting
//!
//! Every prompt returns `Ok(None)` once input is exhausted so the menu can
//! wind down cleanly when stdin is closed.

use std::io::{BufRead, Write};

use crate::error::{StockError, StockResult};

/// Reads answers from `input` and writes prompts and messages to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hand back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a message followed by a newline
    pub fn say(&mut self, message: &str) -> StockResult<()> {
        writeln!(self.output, "{}", message).map_err(|e| StockError::Io(e.to_string()))
    }

    /// Print a prompt and read one trimmed line
    pub fn ask(&mut self, prompt: &str) -> StockResult<Option<String>> {
        write!(self.output, "{}", prompt).map_err(|e| StockError::Io(e.to_string()))?;
        self.output
            .flush()
            .map_err(|e| StockError::Io(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| StockError::Io(e.to_string()))?;

        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Ask until a non-empty answer is given
    pub fn ask_non_empty(&mut self, prompt: &str, complaint: &str) -> StockResult<Option<String>> {
        loop {
            match self.ask(prompt)? {
                None => return Ok(None),
                Some(answer) if answer.is_empty() => self.say(complaint)?,
                Some(answer) => return Ok(Some(answer)),
            }
        }
    }

    /// Ask until an integer is given
    pub fn ask_integer(&mut self, prompt: &str, complaint: &str) -> StockResult<Option<i64>> {
        loop {
            match self.ask(prompt)? {
                None => return Ok(None),
                Some(answer) => match answer.parse::<i64>() {
                    Ok(n) => return Ok(Some(n)),
                    Err(_) => self.say(complaint)?,
                },
            }
        }
    }

    /// Ask a yes/no question; only `y` and `yes` count as yes
    pub fn confirm(&mut self, prompt: &str) -> StockResult<Option<bool>> {
        Ok(self
            .ask(prompt)?
            .map(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes")))
    }

    /// Wait for enter
    pub fn pause(&mut self, prompt: &str) -> StockResult<Option<()>> {
        Ok(self.ask(prompt)?.map(|_| ()))
    }
}
