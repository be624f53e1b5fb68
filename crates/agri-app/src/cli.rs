use std::path::PathBuf;

use clap::Parser;

/// Agri-Cult: a console advisor backed by your agricultural knowledge service.
#[derive(Parser, Debug)]
#[command(name = "agri-cult", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Knowledge service base URL, e.g. http://localhost:8000.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Skip the weather, market and news fetch at startup.
    #[arg(long)]
    pub no_dashboard: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
