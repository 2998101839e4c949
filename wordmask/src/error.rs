use snafu::prelude::*;
use std::{io, path::PathBuf};

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("I/O error on {}", path.display()))]
    Io { path: PathBuf, source: io::Error },

    #[snafu(display("Unable to read config file"))]
    ConfigRead { source: toml::de::Error },

    #[snafu(display("Invalid mask '{mask}', expected exactly one character"))]
    InvalidMask { mask: String },

    #[snafu(display("Unable to apply the word filter"))]
    Filter { source: word_filter::Error },

    #[snafu(display("Unable to serialize report"))]
    Serialize { source: serde_json::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
