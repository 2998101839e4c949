use crate::error::{IoErr, Result};
use clap::{Parser, Subcommand, ValueEnum};
use snafu::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Count or mask negative words in text")]
pub struct Args {
    /// The directory to use as the working directory when looking for the
    /// config file
    #[clap(short, long)]
    cwd: Option<String>,

    /// The path (relative to the current working directory) where a
    /// wordmask.toml config file is located
    #[clap(long, default_value = "wordmask.toml")]
    pub config_path: String,

    /// How results are printed
    #[clap(short, long, value_enum, default_value_t = Reporter::Ansi)]
    pub reporter: Reporter,

    /// Start with filtering turned off, regardless of the config file
    #[clap(long, default_value_t = false)]
    pub disable: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Reporter {
    Ansi,
    Json,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Print how many negative words the text contains
    Count(TextArgs),

    /// Print the text with every negative word masked
    Filter(TextArgs),

    /// Print both the masked text and the number of negative words
    Scan(TextArgs),

    /// Menu driven session for toggling the filter and scanning sample text
    Interactive,
}

#[derive(Clone, Debug, clap::Args)]
pub struct TextArgs {
    /// The text to check. Read from stdin when omitted.
    pub text: Option<String>,
}

impl Args {
    pub fn cwd(&self) -> Result<PathBuf> {
        match self.cwd.as_ref() {
            Some(c) => Ok(Path::new(c.as_str()).to_path_buf()),
            None => std::env::current_dir().context(IoErr { path: "." }),
        }
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        Ok(self.cwd()?.join(self.config_path.as_str()))
    }
}
