//! telemax-datagen: synthetic network-link telemetry for Kinesis.
//!
//! The binary wires three pieces together:
//! - `telemetry_generator::TelemetryGenerator` fabricates records
//! - `kinesis_publisher::StreamPublisher` submits them one at a time
//! - [`driver::run`] loops a fixed number of times with a pause between sends

pub mod config;
pub mod driver;

pub use config::{RunArgs, RunConfig};
pub use driver::RunSummary;

use kinesis_publisher::{DryRunStreamClient, KinesisStreamClient, StreamClient, StreamPublisher};
use telemetry_generator::TelemetryGenerator;
use tracing::info;

/// Execute a full run for the given configuration.
///
/// The stream client is created once for the whole run. Submission failures
/// are logged by the publisher and do not end the run early.
pub async fn generate_and_publish(config: &RunConfig) -> RunSummary {
    if config.dry_run {
        info!("Dry run: payloads are logged, nothing is sent");
        drive(config, DryRunStreamClient::new()).await
    } else {
        let client = KinesisStreamClient::from_env(config.endpoint_url.as_deref()).await;
        drive(config, client).await
    }
}

async fn drive<C: StreamClient>(config: &RunConfig, client: C) -> RunSummary {
    let publisher = StreamPublisher::new(client, config.stream_name.clone());

    match config.seed {
        Some(seed) => {
            let mut generator = TelemetryGenerator::with_seed(config.region_tag.clone(), seed);
            driver::run(&mut generator, &publisher, config.record_count, config.delay).await
        }
        None => {
            let mut generator = TelemetryGenerator::new(config.region_tag.clone());
            driver::run(&mut generator, &publisher, config.record_count, config.delay).await
        }
    }
}
