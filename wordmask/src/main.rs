mod args;
mod commands;
mod config;
mod error;
mod ui;

use args::{Args, Command};
use clap::Parser;
use commands::{count, filter, interactive, scan};
use error::Result;
use log::{debug, warn};
use nu_ansi_term::Color::Red;
use snafu::Report;
use tokio::io::{stdin, BufReader};
use word_filter::{FilterEngine, InMemorySource};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args).await {
        eprintln!("{}", Red.paint(Report::from_error(err).to_string()));
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = config::from_path(args.config_path()?).await?;

    if config.words().is_empty() {
        warn!("No words configured, nothing will be filtered");
    }

    let enabled = config.enabled() && !args.disable;
    debug!(
        "Loaded {} words, filtering {}",
        config.words().len(),
        if enabled { "on" } else { "off" }
    );

    let source = InMemorySource::new(config.words().iter().cloned(), enabled);
    let engine = FilterEngine::new(source).with_mask(config.mask()?);
    let mut reporter = ui::reporter(args.reporter);
    let reporter = reporter.as_mut();

    match args.command {
        Command::Count(text) => count(&engine, text.text, reporter).await,
        Command::Filter(text) => filter(&engine, text.text, reporter).await,
        Command::Scan(text) => scan(&engine, text.text, reporter).await,
        Command::Interactive => {
            let input = BufReader::new(stdin());
            interactive(&engine, config.sample_text(), input, reporter).await
        }
    }
}
