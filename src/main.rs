//! skill-input - replay controller events through the skill input classifier
//!
//! Reads a script of button and stick events and prints the skill inputs
//! they classify to, one record per line.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skill_input::config::AppConfig;
use skill_input::replay::{self, OutputFormat, Script};

/// Replay controller events and print the classified skill inputs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the event script (YAML)
    script: String,

    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long, env = "SKILL_INPUT_CONFIG")]
    config: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_logging(&args.log_level)?;

    let config = match &args.config {
        Some(path) => {
            info!("Configuration file: {}", path);
            AppConfig::load(path).await?
        }
        None => {
            info!("No configuration file, using defaults");
            AppConfig::default()
        }
    };

    let script = Script::load(&args.script).await?;
    info!("Loaded script {} ({} events)", args.script, script.events.len());

    let out = BufWriter::new(io::stdout());
    replay::run(config, &script, args.format, out).await?;

    Ok(())
}

/// Logs go to stderr; stdout carries the classified records
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .try_init()?;

    Ok(())
}
