use super::{input_text, Engine};
use crate::error::{FilterErr, Result};
use crate::ui::{Outcome, Reporter};
use snafu::prelude::*;

pub async fn filter(
    engine: &Engine,
    text: Option<String>,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let text = input_text(text).await?;
    let filtered = engine.filter(text.as_str()).context(FilterErr)?;

    reporter.report(&Outcome::Filtered { text: &filtered })
}
