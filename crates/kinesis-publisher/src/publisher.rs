//! Stream publisher: one record in, one submission out.

use crate::client::StreamClient;
use crate::encoder::encode_payload;
use crate::error::SubmissionError;
use telemetry_generator::TelemetryRecord;
use tracing::{error, info};

/// Result of publishing a single record.
#[derive(Debug)]
pub enum PublishOutcome {
    /// The stream accepted the record.
    Delivered {
        link_id: String,
        sequence_number: String,
    },
    /// The submission failed and the record was dropped.
    Failed {
        link_id: String,
        error: SubmissionError,
    },
}

impl PublishOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, PublishOutcome::Delivered { .. })
    }

    pub fn link_id(&self) -> &str {
        match self {
            PublishOutcome::Delivered { link_id, .. } | PublishOutcome::Failed { link_id, .. } => {
                link_id
            }
        }
    }
}

/// Publishes telemetry records to a named stream.
///
/// Each call makes exactly one submission attempt. Failures are logged and
/// reported in the returned outcome, never propagated.
pub struct StreamPublisher<C> {
    client: C,
    stream_name: String,
}

impl<C: StreamClient> StreamPublisher<C> {
    /// Create a publisher for `stream_name` using the given client.
    pub fn new(client: C, stream_name: impl Into<String>) -> Self {
        Self {
            client,
            stream_name: stream_name.into(),
        }
    }

    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Serialize and submit one record, using its link id as partition key.
    pub async fn publish(&self, record: &TelemetryRecord) -> PublishOutcome {
        let link_id = record.partition_key();

        match self.submit(record, &link_id).await {
            Ok(sequence_number) => {
                info!(
                    "Successfully sent record for linkId: {} to '{}'. SequenceNumber: {}",
                    link_id, self.stream_name, sequence_number
                );
                PublishOutcome::Delivered {
                    link_id,
                    sequence_number,
                }
            }
            Err(error) => {
                error!(
                    "Error sending record for linkId: {} to '{}': {}",
                    link_id, self.stream_name, error
                );
                PublishOutcome::Failed { link_id, error }
            }
        }
    }

    async fn submit(
        &self,
        record: &TelemetryRecord,
        partition_key: &str,
    ) -> Result<String, SubmissionError> {
        let payload = encode_payload(record)?;
        self.client
            .submit(&self.stream_name, payload, partition_key)
            .await
    }
}
