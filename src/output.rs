use std::io::Write;

use crate::domain::{Error, Outcome, Reporter};

/// Prints outcomes and rejection messages as plain lines.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, outcome: &Outcome) -> Result<(), Error> {
        writeln!(self.out, "{}", outcome)?;
        Ok(())
    }

    fn reject(&mut self, error: &Error) -> Result<(), Error> {
        writeln!(self.out, "{}", error)?;
        Ok(())
    }
}
