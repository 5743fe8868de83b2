//! Interactive questions for values missing from the command line.

use std::io::{self, BufRead, Write};

use log::warn;

use boxcut::{
    BoxcutError,
    dimension::{Dimension, parse_dimension},
};

/// Asks questions on `output` and reads one-line answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and returns the trimmed answer.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::UnexpectedEof`] if the input is closed.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no answer given for `{question}`"),
            ));
        }

        Ok(line.trim().to_string())
    }

    /// Asks for a required dimension.
    ///
    /// # Errors
    ///
    /// Returns [`BoxcutError::Dimension`] if the answer does not parse.
    pub fn dimension(&mut self, question: &str) -> Result<Dimension, BoxcutError> {
        let answer = self.ask(question)?;
        parse_dimension(&answer).map_err(|err| BoxcutError::new_dimension_error(err, answer))
    }

    /// Asks for an optional length in millimeters.
    ///
    /// An empty answer keeps `default_mm`; so does an answer that does not
    /// parse, after a warning.
    pub fn length_or_default(&mut self, question: &str, default_mm: f64) -> io::Result<f64> {
        let answer = self.ask(&format!("{question} [{default_mm}mm]"))?;
        if answer.is_empty() {
            return Ok(default_mm);
        }

        match parse_dimension(&answer) {
            Ok(dimension) => Ok(dimension.value_mm()),
            Err(err) => {
                warn!(answer, err:err; "Ignoring invalid value, keeping default");
                Ok(default_mm)
            }
        }
    }
}
