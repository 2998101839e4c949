use crate::error::{ConfigReadErr, Error, InvalidMaskErr, Result};
use log::info;
use serde::Deserialize;
use snafu::prelude::*;
use std::{io::ErrorKind, path::Path};
use tokio::fs::read_to_string;
use toml::from_str;
use word_filter::{DEFAULT_PATTERNS, MASK};

const SAMPLE_TEXT: &str = "The weather in Manchester in winter is bad. It rains all the time - it must be horrible for people visiting.";

/// Load the config at `path`. A missing file is not an error; the built-in
/// defaults are used instead.
pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let s = match read_to_string(path).await {
        Ok(s) => s,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    parse(s.as_str())
}

pub fn parse(s: &str) -> Result<Config> {
    from_str(s).context(ConfigReadErr {})
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    filter: FilterConfig,
    #[serde(default)]
    sample: SampleConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    words: Vec<String>,
    enabled: bool,
    mask: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            words: DEFAULT_PATTERNS.iter().map(|w| w.to_string()).collect(),
            enabled: true,
            mask: MASK.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    text: String,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            text: SAMPLE_TEXT.to_string(),
        }
    }
}

impl Config {
    pub fn words(&self) -> &[String] {
        self.filter.words.as_slice()
    }

    pub fn enabled(&self) -> bool {
        self.filter.enabled
    }

    pub fn mask(&self) -> Result<char> {
        let mut chars = self.filter.mask.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => InvalidMaskErr {
                mask: self.filter.mask.as_str(),
            }
            .fail(),
        }
    }

    pub fn sample_text(&self) -> &str {
        self.sample.text.as_str()
    }
}
