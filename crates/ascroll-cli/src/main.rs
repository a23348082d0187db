use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ascroll_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "ascroll")]
#[command(author, version, about = "Drive the ascroll motion engine from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded gesture script (JSON or TOML) through a scroll surface
    Simulate {
        /// Path to the gesture script
        script: PathBuf,
        /// Print the offset after every frame
        #[arg(long)]
        frames: bool,
        /// Pace frames and event gaps in wall-clock time
        #[arg(long)]
        realtime: bool,
    },
    /// Run a single fling on the configured view
    Fling {
        /// Release velocity along X (units/s)
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        vx: f32,
        /// Release velocity along Y (units/s)
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        vy: f32,
        /// Start X, defaults to the bound
        #[arg(long, allow_hyphen_values = true)]
        x: Option<f32>,
        /// Start Y, defaults to the bound
        #[arg(long, allow_hyphen_values = true)]
        y: Option<f32>,
    },
    /// Show the effective configuration
    Config {
        /// Write the default configuration to the config path
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Simulate {
            script,
            frames,
            realtime,
        } => commands::simulate::run(&config, &script, frames, realtime).await,
        Commands::Fling { vx, vy, x, y } => commands::fling::run(&config, vx, vy, x, y),
        Commands::Config { init } => commands::config::run(&config, init),
    }
}
