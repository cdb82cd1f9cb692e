//! Synthetic telemetry generator for telemax-datagen.
//!
//! This crate provides the `TelemetryGenerator` which fabricates simulated
//! network-link measurements. Each call produces one `TelemetryRecord` with
//! freshly randomized metrics, a new link id and the current local time.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  TelemetryGenerator  │
//! │                      │
//! │  - region            │
//! │  - rng (StdRng)      │
//! │  - last_timestamp    │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!   TelemetryRecord { linkId, speedMbps, latencyMs,
//!                     packetLossRate, timestamp, region }
//! ```
//!
//! # Example
//!
//! ```rust
//! use telemetry_generator::TelemetryGenerator;
//!
//! let mut generator = TelemetryGenerator::with_seed("eu-west-2", 42);
//! let record = generator.next_record();
//! assert!((100.0..=1000.0).contains(&record.speed_mbps));
//! ```
//!
//! # Value ranges
//!
//! - `speedMbps` - uniform in [100, 1000], 2 decimal places
//! - `latencyMs` - uniform in [5, 150], 2 decimal places
//! - `packetLossRate` - uniform in [0, 0.05], 4 decimal places

pub mod generator;
pub mod generators;
pub mod record;

// Re-exports for convenience
pub use generator::{RecordIterator, TelemetryGenerator};
pub use record::{MetricRange, TelemetryRecord, LATENCY_MS, PACKET_LOSS_RATE, SPEED_MBPS};
