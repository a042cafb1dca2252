use clap::Parser;
use nav_gap::cli::{Cli, Commands};
use nav_gap::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Secrets (Telegram credentials) come from the environment; honor .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    nav_gap::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Run(args) => {
            tracing::info!("Starting scheduled scanning");
            args.execute(&config).await?;
        }
        Commands::Scan(args) => {
            tracing::info!("Running single scan");
            args.execute(&config).await?;
        }
        Commands::Config => {
            let names: Vec<&str> = config.instruments.iter().map(|i| i.name.as_str()).collect();
            println!("Current configuration:");
            println!("  Instruments: {}", names.join(", "));
            println!("  Alert threshold: {}%", config.alert.threshold_pct);
            println!(
                "  Scan: every {}s ({})",
                config.schedule.scan_interval_secs, config.schedule.timezone
            );
            println!(
                "  Briefing: {} at {}",
                if config.schedule.briefing_enabled {
                    "enabled"
                } else {
                    "disabled"
                },
                config.schedule.briefing_time
            );
            println!(
                "  Summary: {} at {}",
                if config.schedule.summary_enabled {
                    "enabled"
                } else {
                    "disabled"
                },
                config.schedule.summary_time
            );
        }
    }

    Ok(())
}
