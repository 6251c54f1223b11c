use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use danmaku_core::{AppConfig, LaneStrategy};

use commands::feed::CommentSource;

mod commands;

#[derive(Parser)]
#[command(name = "danmaku")]
#[command(author, version, about = "Bullet comments scrolling across your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of horizontal lanes
    #[arg(short = 'l', long, global = true)]
    lanes: Option<usize>,

    /// Scroll speed in cells per millisecond
    #[arg(short = 'v', long, global = true)]
    velocity: Option<f32>,

    /// Lane selection policy (sequential, random)
    #[arg(short = 's', long, global = true)]
    strategy: Option<LaneStrategy>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play built-in sample comments (default)
    Run {
        /// Milliseconds between sample comments (defaults to ui.send_interval_ms)
        #[arg(short = 'i', long)]
        interval_ms: Option<u64>,
    },
    /// Play comments read line by line from a file, or `-` for stdin
    Play {
        source: PathBuf,
        /// Milliseconds between comments
        #[arg(short = 'i', long, default_value_t = 500)]
        interval_ms: u64,
    },
    /// Show the resolved configuration
    Config {
        /// Write the default configuration if no file exists yet
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(lanes) = cli.lanes {
        config.danmaku.max_lanes = lanes;
    }
    if let Some(velocity) = cli.velocity {
        config.danmaku.velocity = velocity;
    }
    if let Some(strategy) = cli.strategy {
        config.danmaku.strategy = strategy;
    }
    config.danmaku.validate()?;

    match cli.command {
        Some(Commands::Config { init }) => commands::config::run(&config, init),
        Some(Commands::Run { interval_ms }) => {
            init_logging(&config)?;
            let interval = interval_ms.unwrap_or(config.ui.send_interval_ms);
            commands::run::run(config, CommentSource::Samples, interval_from_ms(interval)).await
        }
        None => {
            init_logging(&config)?;
            let interval = interval_from_ms(config.ui.send_interval_ms);
            commands::run::run(config, CommentSource::Samples, interval).await
        }
        Some(Commands::Play {
            source,
            interval_ms,
        }) => {
            init_logging(&config)?;
            let source = if source.as_os_str() == "-" {
                CommentSource::Stdin
            } else {
                CommentSource::File(source)
            };
            commands::run::run(config, source, interval_from_ms(interval_ms)).await
        }
    }
}

/// tokio intervals reject a zero period
fn interval_from_ms(ms: u64) -> Duration {
    Duration::from_millis(ms.max(1))
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(config: &AppConfig) -> Result<()> {
    let log_path = config.log_path();
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
