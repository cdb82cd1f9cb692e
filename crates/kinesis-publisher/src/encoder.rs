//! Payload encoding for telemetry records.

use crate::error::SubmissionError;
use telemetry_generator::TelemetryRecord;

/// Encode a record as a UTF-8 JSON object.
pub fn encode_payload(record: &TelemetryRecord) -> Result<Vec<u8>, SubmissionError> {
    Ok(serde_json::to_vec(record)?)
}
