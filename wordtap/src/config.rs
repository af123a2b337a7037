use clap::Parser;
use dictionary::DEFAULT_ENDPOINT;

/// WordTap - words worth knowing
///
/// Type a word and press Enter to look it up. `:q` quits.
#[derive(Parser, Debug)]
#[command(name = "wordtap")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Word to look up right away
    pub word: Option<String>,

    /// Dictionary API endpoint, the word is appended as the last path segment
    #[arg(long, env = "WORDTAP_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "WORDTAP_LOG", default_value = "warn")]
    pub log_level: String,
}
