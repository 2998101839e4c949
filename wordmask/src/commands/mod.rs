mod count;
mod filter;
mod interactive;
mod scan;

pub use count::count;
pub use filter::filter;
pub use interactive::interactive;
pub use scan::scan;

use crate::error::{IoErr, Result};
use snafu::prelude::*;
use tokio::io::{stdin, AsyncReadExt};
use word_filter::{FilterEngine, InMemorySource};

pub type Engine = FilterEngine<InMemorySource>;

/// The text given on the command line, or all of stdin when there is none.
async fn input_text(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            stdin()
                .read_to_string(&mut buf)
                .await
                .context(IoErr { path: "stdin" })?;
            Ok(buf)
        }
    }
}
