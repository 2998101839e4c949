use super::{input_text, Engine};
use crate::error::{FilterErr, Result};
use crate::ui::{Outcome, Reporter};
use snafu::prelude::*;

/// Report the masked text together with the number of negative words in it.
pub fn scan_text(engine: &Engine, text: &str, reporter: &mut dyn Reporter) -> Result<()> {
    let filtered = engine.filter(text).context(FilterErr)?;
    let count = engine.count(text).context(FilterErr)?;

    reporter.report(&Outcome::Scanned {
        text: &filtered,
        count,
    })
}

pub async fn scan(
    engine: &Engine,
    text: Option<String>,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let text = input_text(text).await?;
    scan_text(engine, text.as_str(), reporter)
}
