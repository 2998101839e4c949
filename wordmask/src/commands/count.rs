use super::{input_text, Engine};
use crate::error::{FilterErr, Result};
use crate::ui::{Outcome, Reporter};
use snafu::prelude::*;

pub async fn count(
    engine: &Engine,
    text: Option<String>,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let text = input_text(text).await?;
    let count = engine.count(text.as_str()).context(FilterErr)?;

    reporter.report(&Outcome::Count { count })
}
