//! CLI interface for nav-gap
//!
//! Provides subcommands for:
//! - `run`: unattended scan loop with daily briefing/summary
//! - `scan`: one scan, then exit
//! - `config`: show resolved configuration

mod run;
mod scan;

pub use run::RunArgs;
pub use scan::ScanArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "nav-gap")]
#[command(about = "ETF premium/discount alert bot for NSE-listed ETFs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the unattended scan loop
    Run(RunArgs),
    /// Run a single scan and exit
    Scan(ScanArgs),
    /// Show resolved configuration
    Config,
}
