//! Driver loop: generate, publish, pause; a fixed number of times.

use kinesis_publisher::{PublishOutcome, StreamClient, StreamPublisher};
use rand::Rng;
use std::time::Duration;
use telemetry_generator::TelemetryGenerator;
use tracing::{debug, info};

/// Counts from a completed run. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: u64,
    pub delivered: u64,
    pub failed: u64,
}

impl RunSummary {
    fn record(&mut self, outcome: &PublishOutcome) {
        self.attempted += 1;
        if outcome.is_delivered() {
            self.delivered += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Run `record_count` iterations of generate, publish, then sleep `delay`.
///
/// A failed submission never aborts the run or changes the iteration
/// count; the pause follows every submission, including the last.
pub async fn run<R, C>(
    generator: &mut TelemetryGenerator<R>,
    publisher: &StreamPublisher<C>,
    record_count: u64,
    delay: Duration,
) -> RunSummary
where
    R: Rng,
    C: StreamClient,
{
    info!(
        "Starting data generation for stream: {}",
        publisher.stream_name()
    );
    info!("Generating {record_count} records with a {delay:?} delay...");

    let mut summary = RunSummary::default();

    for index in 0..record_count {
        let record = generator.next_record();
        debug!(
            "Generated record {}/{}: linkId={}",
            index + 1,
            record_count,
            record.link_id
        );

        let outcome = publisher.publish(&record).await;
        summary.record(&outcome);

        tokio::time::sleep(delay).await;
    }

    info!(
        "Data generation complete: {} sent, {} failed",
        summary.delivered, summary.failed
    );

    summary
}
