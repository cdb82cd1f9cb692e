//! The telemetry record and the ranges its metrics are drawn from.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inclusive range a metric is sampled from, plus its rounding precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
    /// Number of decimal places kept after rounding
    pub places: u32,
}

impl MetricRange {
    /// Check whether `value` lies within the range.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Simulated link speed.
pub const SPEED_MBPS: MetricRange = MetricRange {
    min: 100.0,
    max: 1000.0,
    places: 2,
};

/// Simulated round-trip latency.
pub const LATENCY_MS: MetricRange = MetricRange {
    min: 5.0,
    max: 150.0,
    places: 2,
};

/// Simulated fraction of packets lost.
pub const PACKET_LOSS_RATE: MetricRange = MetricRange {
    min: 0.0,
    max: 0.05,
    places: 4,
};

/// A single simulated network-link measurement.
///
/// Field names serialize in camelCase so downstream consumers see
/// `linkId`, `speedMbps`, `latencyMs`, `packetLossRate`, `timestamp`
/// and `region`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryRecord {
    /// Unique per record, also used as the stream partition key
    pub link_id: Uuid,
    pub speed_mbps: f64,
    pub latency_ms: f64,
    pub packet_loss_rate: f64,
    /// Local creation time
    #[serde(with = "iso_local")]
    pub timestamp: NaiveDateTime,
    pub region: String,
}

impl TelemetryRecord {
    /// The partition key for this record.
    pub fn partition_key(&self) -> String {
        self.link_id.to_string()
    }
}

/// ISO-8601 local date-time with microsecond precision and no offset,
/// e.g. `2024-05-01T13:45:10.123456`.
mod iso_local {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
    const PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, PARSE_FORMAT).map_err(serde::de::Error::custom)
    }
}
