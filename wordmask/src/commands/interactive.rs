use super::scan::scan_text;
use super::Engine;
use crate::error::{IoErr, Result};
use crate::ui::{Outcome, Reporter};
use log::debug;
use snafu::prelude::*;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use word_filter::WordSource;

const MENU: &str = "Press
1 to scan the sample text
2 to disable filtering
3 to enable filtering
anything else to exit.";

/// Menu loop reading one choice per line from `input`. The menu itself goes to
/// stderr so stdout only carries reports.
pub async fn interactive<R>(
    engine: &Engine,
    sample: &str,
    input: R,
    reporter: &mut dyn Reporter,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    loop {
        eprintln!("{MENU}");

        let line = lines.next_line().await.context(IoErr { path: "stdin" })?;
        let Some(line) = line else {
            debug!("Input closed, leaving interactive mode");
            break;
        };

        match line.trim() {
            "1" => scan_text(engine, sample, reporter)?,
            "2" => {
                engine.turn_off_filter();
                reporter.report(&Outcome::Toggled {
                    enabled: engine.source().is_filtering_enabled(),
                })?;
            }
            "3" => {
                engine.turn_on_filter();
                reporter.report(&Outcome::Toggled {
                    enabled: engine.source().is_filtering_enabled(),
                })?;
            }
            _ => break,
        }
    }

    Ok(())
}
