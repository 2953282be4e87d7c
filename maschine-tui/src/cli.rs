use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "maschine-tui")]
#[command(about = "Terminal UI for searching Farcaster users")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the search UI against the configured maschine-api (default)
    Run {
        /// Override the configured API URL for this run
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}
