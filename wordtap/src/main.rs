//! WordTap - look up English words from the terminal
//!
//! # Usage
//!
//! ```bash
//! # Interactive: type a word, press Enter
//! wordtap
//!
//! # Look a word up straight away
//! wordtap serendipity
//!
//! # Point at another dictionary server
//! wordtap --endpoint http://localhost:8080/api/v2/entries/en
//! ```

use anyhow::Result;
use clap::Parser;
use config::Config;
use dictionary::Dictionary;
use tokio::io::BufReader;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod app;
mod config;
mod render;
mod utilities;
mod widget;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config.log_level)?;

    let dict = Dictionary::with_endpoint(&config.endpoint)?;
    tracing::debug!(endpoint = dict.endpoint(), "dictionary ready");

    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    app::run(&dict, input, &mut output, config.word).await?;
    Ok(())
}

/// Logs go to stderr so they never mix with the rendered widget.
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("warn"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}
