//! Command-line interface for telemax-datagen
//!
//! # Usage Examples
//!
//! ```bash
//! # Send 10 records, one per second, to the default stream
//! telemax-datagen
//!
//! # Send 100 records quickly to a named stream
//! telemax-datagen --stream-name my-stream --record-count 100 --delay 200ms
//!
//! # Against LocalStack
//! telemax-datagen --endpoint-url http://localhost:4566
//!
//! # Print payloads instead of sending them
//! telemax-datagen --dry-run --record-count 3 --delay 0
//!
//! # Read settings from a file
//! telemax-datagen --config telemax.toml
//! ```
//!
//! AWS credentials and region come from the standard AWS environment
//! (env vars, profiles, instance metadata).

use anyhow::Context;
use clap::Parser;
use telemax_datagen::{generate_and_publish, RunArgs, RunConfig};

#[derive(Parser)]
#[command(name = "telemax-datagen")]
#[command(about = "Generate simulated network-link telemetry and publish it to AWS Kinesis")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: RunArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = RunConfig::resolve(&cli.args).context("Invalid run configuration")?;
    tracing::debug!("Resolved configuration: {config:?}");

    generate_and_publish(&config).await;

    Ok(())
}
