use crate::args;
use crate::error::{IoErr, Result, SerializeErr};
use nu_ansi_term::Color::{Blue, Green, Red, Yellow};
use serde::Serialize;
use snafu::prelude::*;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome<'a> {
    Count { count: usize },
    Filtered { text: &'a str },
    Scanned { text: &'a str, count: usize },
    Toggled { enabled: bool },
}

pub trait Reporter {
    fn report(&mut self, outcome: &Outcome<'_>) -> Result<()>;
}

pub fn reporter(kind: args::Reporter) -> Box<dyn Reporter> {
    match kind {
        args::Reporter::Ansi => Box::new(AnsiReporter::new(io::stdout())),
        args::Reporter::Json => Box::new(JsonReporter::new(io::stdout())),
    }
}

pub struct AnsiReporter<W> {
    out: W,
}

impl<W: Write> AnsiReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_count(&mut self, count: usize) -> Result<()> {
        let color = if count == 0 { Green } else { Red };
        writeln!(
            self.out,
            "Total number of negative words: {}",
            color.paint(count.to_string())
        )
        .context(IoErr { path: "stdout" })
    }
}

impl<W: Write> Reporter for AnsiReporter<W> {
    fn report(&mut self, outcome: &Outcome<'_>) -> Result<()> {
        match outcome {
            Outcome::Count { count } => self.write_count(*count),
            Outcome::Filtered { text } => {
                writeln!(self.out, "{text}").context(IoErr { path: "stdout" })
            }
            Outcome::Scanned { text, count } => {
                writeln!(self.out, "{}", Blue.paint("Scanned the text:"))
                    .context(IoErr { path: "stdout" })?;
                writeln!(self.out, "{text}").context(IoErr { path: "stdout" })?;
                self.write_count(*count)
            }
            Outcome::Toggled { enabled } => {
                let status = if *enabled {
                    Green.paint("Filtering enabled")
                } else {
                    Yellow.paint("Filtering disabled")
                };
                writeln!(self.out, "{status}").context(IoErr { path: "stdout" })
            }
        }
    }
}

/// Prints every outcome as one JSON object per line.
pub struct JsonReporter<W> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, outcome: &Outcome<'_>) -> Result<()> {
        let serialized = serde_json::to_string(outcome).context(SerializeErr)?;
        writeln!(self.out, "{serialized}").context(IoErr { path: "stdout" })
    }
}
