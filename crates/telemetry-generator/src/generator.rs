//! Record generator producing one telemetry record per call.

use crate::generators::{generate_rounded_range, generate_uuid_v4, local_timestamp_now};
use crate::record::{MetricRange, TelemetryRecord, LATENCY_MS, PACKET_LOSS_RATE, SPEED_MBPS};
use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generator of simulated network-link telemetry.
///
/// Generation cannot fail. Metric values and link ids come from the
/// generator's RNG; timestamps come from the local wall clock and never go
/// backwards within one generator, even if the clock does.
pub struct TelemetryGenerator<R = StdRng> {
    /// Region tag stamped on every record
    region: String,
    rng: R,
    /// Timestamp of the previously generated record
    last_timestamp: Option<NaiveDateTime>,
}

impl TelemetryGenerator<StdRng> {
    /// Create a generator seeded from OS entropy.
    pub fn new(region: impl Into<String>) -> Self {
        Self::with_rng(region, StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed.
    ///
    /// The same seed yields the same metric values and link ids; timestamps
    /// still follow the clock.
    pub fn with_seed(region: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(region, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TelemetryGenerator<R> {
    /// Create a generator drawing from the given RNG.
    pub fn with_rng(region: impl Into<String>, rng: R) -> Self {
        Self {
            region: region.into(),
            rng,
            last_timestamp: None,
        }
    }

    /// The region tag stamped on generated records.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Generate the next record.
    pub fn next_record(&mut self) -> TelemetryRecord {
        let link_id = generate_uuid_v4(&mut self.rng);
        let speed_mbps = self.sample(SPEED_MBPS);
        let latency_ms = self.sample(LATENCY_MS);
        let packet_loss_rate = self.sample(PACKET_LOSS_RATE);
        let timestamp = self.next_timestamp(local_timestamp_now());

        TelemetryRecord {
            link_id,
            speed_mbps,
            latency_ms,
            packet_loss_rate,
            timestamp,
            region: self.region.clone(),
        }
    }

    /// Generate `count` records lazily.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_, R> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }

    fn sample(&mut self, range: MetricRange) -> f64 {
        generate_rounded_range(&mut self.rng, range.min, range.max, range.places)
    }

    fn next_timestamp(&mut self, now: NaiveDateTime) -> NaiveDateTime {
        let timestamp = match self.last_timestamp {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_timestamp = Some(timestamp);
        timestamp
    }
}

/// Iterator over generated records.
pub struct RecordIterator<'a, R> {
    generator: &'a mut TelemetryGenerator<R>,
    remaining: u64,
}

impl<R: Rng> Iterator for RecordIterator<'_, R> {
    type Item = TelemetryRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}
