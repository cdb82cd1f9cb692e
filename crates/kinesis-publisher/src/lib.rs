//! Stream publisher for telemax-datagen.
//!
//! This crate serializes `TelemetryRecord`s to JSON and submits them, one
//! per call, to a named stream through a `StreamClient`. The Kinesis client
//! is the production implementation; tests substitute their own.
//!
//! # Architecture
//!
//! ```text
//!   TelemetryRecord
//!          │
//!          ▼
//!   ┌─────────────────┐
//!   │   encoder.rs    │  JSON payload
//!   └────────┬────────┘
//!            ▼
//!   ┌─────────────────┐
//!   │ StreamPublisher │  partition key = linkId
//!   └────────┬────────┘
//!            ▼
//!   ┌─────────────────┐
//!   │  StreamClient   │  Kinesis PutRecord / dry run
//!   └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use kinesis_publisher::{KinesisStreamClient, StreamPublisher};
//! use telemetry_generator::TelemetryGenerator;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = KinesisStreamClient::from_env(None).await;
//!     let publisher = StreamPublisher::new(client, "telemax-network-data-stream");
//!
//!     let mut generator = TelemetryGenerator::new("eu-west-2");
//!     let outcome = publisher.publish(&generator.next_record()).await;
//!     println!("{outcome:?}");
//! }
//! ```

pub mod client;
pub mod encoder;
pub mod error;
pub mod publisher;

// Re-exports for convenience
pub use client::{DryRunStreamClient, KinesisStreamClient, StreamClient};
pub use encoder::encode_payload;
pub use error::SubmissionError;
pub use publisher::{PublishOutcome, StreamPublisher};
