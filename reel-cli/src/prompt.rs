//! Line-oriented prompts for the interactive menu.
//!
//! Every helper repeats the question until it gets a usable answer. End of
//! input surfaces as [`io::ErrorKind::UnexpectedEof`].

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

pub(crate) struct Prompt<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub(crate) fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Print one line.
    pub(crate) fn say(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "{msg}")
    }

    /// Print a warning line and keep going.
    pub(crate) fn complain(&mut self, msg: impl Display) -> io::Result<()> {
        let msg = msg.to_string();
        writeln!(self.out, "{}", msg.if_supports_color(Stdout, |t| t.yellow()))
    }

    /// Ask once and return the trimmed answer (possibly empty).
    pub(crate) fn line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(input.trim().to_string())
    }

    pub(crate) fn non_empty(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            let answer = self.line(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.complain("Input must not be empty. Please try again.")?;
        }
    }

    /// Ask until the answer parses as `T`.
    pub(crate) fn parsed<T: FromStr>(&mut self, prompt: &str) -> io::Result<T> {
        loop {
            match self.line(prompt)?.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.complain("Invalid number. Please try again.")?,
            }
        }
    }

    /// Ask until the answer is a finite rating.
    pub(crate) fn rating(&mut self, prompt: &str) -> io::Result<f64> {
        loop {
            match reel_lib::parse_rating(&self.line(prompt)?) {
                Ok(rating) => return Ok(rating),
                Err(e) => self.complain(format!("{e}. Please try again."))?,
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "tests/prompt_tests.rs"]
mod tests;
