use std::path::PathBuf;

use clap::Parser;

/// tessel: a tabbed, split-pane web browser shell.
#[derive(Parser, Debug)]
#[command(name = "tessel", version, about)]
pub struct Args {
    /// URL for the first tab. Defaults to `[layout].default_url`.
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
