//! Destinations for accepted observations

use std::convert::Infallible;
use std::io::{self, Write};

/// Receives accepted observations one at a time, in the order they were accepted
pub trait Sink {
    /// Error raised when a value cannot be delivered
    type Error;

    /// Delivers one accepted observation
    fn emit(&mut self, value: f64) -> Result<(), Self::Error>;
}

impl Sink for Vec<f64> {
    type Error = Infallible;

    fn emit(&mut self, value: f64) -> Result<(), Self::Error> {
        self.push(value);
        Ok(())
    }
}

/// Writes each accepted observation on its own line
///
/// Values are formatted with [`f64`]'s `Display`, which round-trips exactly.
#[derive(Debug)]
pub struct LineSink<W: Write> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    /// Wraps `writer`
    ///
    /// Nothing is buffered here, so wrap slow writers in a [`std::io::BufWriter`] first.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flushes the underlying writer
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Returns the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for LineSink<W> {
    type Error = io::Error;

    fn emit(&mut self, value: f64) -> Result<(), Self::Error> {
        writeln!(self.writer, "{value}")
    }
}
