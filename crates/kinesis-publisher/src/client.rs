//! Stream clients: the submission seam and its implementations.

use crate::error::SubmissionError;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, ConfigLoader};
use aws_sdk_kinesis::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_kinesis::operation::put_record::PutRecordError;
use aws_sdk_kinesis::primitives::Blob;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

/// A destination that accepts one payload at a time.
///
/// Implementations return the destination-assigned sequence identifier on
/// success. They must not retry.
#[async_trait::async_trait]
pub trait StreamClient: Send + Sync {
    /// Submit `payload` to `stream_name` using `partition_key` for sharding.
    async fn submit(
        &self,
        stream_name: &str,
        payload: Vec<u8>,
        partition_key: &str,
    ) -> Result<String, SubmissionError>;
}

/// Kinesis Data Streams client.
///
/// Creating the SDK client resolves credentials and region from the ambient
/// environment, so build it once and reuse it for every submission.
pub struct KinesisStreamClient {
    client: aws_sdk_kinesis::Client,
}

impl KinesisStreamClient {
    /// Create a client from the default AWS configuration chain.
    ///
    /// `endpoint_url` overrides the service endpoint, e.g. for LocalStack.
    pub async fn from_env(endpoint_url: Option<&str>) -> Self {
        Self::from_loader(config_loader(endpoint_url)).await
    }

    /// Create a client from an AWS config loader.
    pub async fn from_loader(loader: ConfigLoader) -> Self {
        let sdk_config = loader.load().await;
        debug!(
            "Loaded AWS config (region: {:?})",
            sdk_config.region().map(|r| r.as_ref().to_string())
        );
        Self::new(aws_sdk_kinesis::Client::new(&sdk_config))
    }

    /// Wrap an existing SDK client.
    pub fn new(client: aws_sdk_kinesis::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl StreamClient for KinesisStreamClient {
    async fn submit(
        &self,
        stream_name: &str,
        payload: Vec<u8>,
        partition_key: &str,
    ) -> Result<String, SubmissionError> {
        let output = self
            .client
            .put_record()
            .stream_name(stream_name)
            .data(Blob::new(payload))
            .partition_key(partition_key)
            .send()
            .await
            .map_err(|err| classify_put_record_error(stream_name, err))?;

        Ok(output.sequence_number().to_string())
    }
}

/// AWS config loader with SDK retries disabled, so every submission is a
/// single `PutRecord` attempt.
pub fn config_loader(endpoint_url: Option<&str>) -> ConfigLoader {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());
    if let Some(url) = endpoint_url {
        loader = loader.endpoint_url(url);
    }
    loader
}

/// Map a PutRecord failure onto a submission error category.
fn classify_put_record_error<R>(
    stream_name: &str,
    err: SdkError<PutRecordError, R>,
) -> SubmissionError
where
    R: std::fmt::Debug + Send + Sync + 'static,
{
    match err.as_service_error() {
        Some(PutRecordError::ProvisionedThroughputExceededException(_)) => {
            SubmissionError::Throttled(stream_name.to_string())
        }
        Some(PutRecordError::ResourceNotFoundException(_)) => {
            SubmissionError::StreamNotFound(stream_name.to_string())
        }
        Some(service_err) if is_access_denied(service_err.code()) => {
            SubmissionError::AccessDenied(DisplayErrorContext(service_err).to_string())
        }
        Some(_) => SubmissionError::Service(DisplayErrorContext(&err).to_string()),
        None => SubmissionError::Transport(DisplayErrorContext(&err).to_string()),
    }
}

fn is_access_denied(code: Option<&str>) -> bool {
    matches!(
        code,
        Some("AccessDeniedException" | "KMSAccessDeniedException")
    )
}

/// Client that logs payloads instead of sending them.
///
/// Sequence identifiers are assigned locally and increase by one per
/// submission.
#[derive(Debug, Default)]
pub struct DryRunStreamClient {
    next_sequence: AtomicU64,
}

impl DryRunStreamClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StreamClient for DryRunStreamClient {
    async fn submit(
        &self,
        stream_name: &str,
        payload: Vec<u8>,
        partition_key: &str,
    ) -> Result<String, SubmissionError> {
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
        info!(
            "[dry-run] stream={stream_name} partition_key={partition_key} payload={}",
            String::from_utf8_lossy(&payload)
        );
        Ok(format!("dry-run-{sequence:020}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_kinesis::config::{Credentials, Region};
    use aws_sdk_kinesis::error::ErrorMetadata;
    use aws_sdk_kinesis::types::error::{
        InvalidArgumentException, ProvisionedThroughputExceededException,
        ResourceNotFoundException,
    };
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    fn service_error(err: PutRecordError) -> SdkError<PutRecordError, ()> {
        SdkError::service_error(err, ())
    }

    #[test]
    fn test_classify_throttled() {
        let err = service_error(PutRecordError::ProvisionedThroughputExceededException(
            ProvisionedThroughputExceededException::builder()
                .message("Rate exceeded for shard")
                .build(),
        ));
        let classified = classify_put_record_error("links", err);
        assert!(matches!(classified, SubmissionError::Throttled(ref s) if s == "links"));
    }

    #[test]
    fn test_classify_stream_not_found() {
        let err = service_error(PutRecordError::ResourceNotFoundException(
            ResourceNotFoundException::builder()
                .message("Stream links not found")
                .build(),
        ));
        let classified = classify_put_record_error("links", err);
        assert!(matches!(classified, SubmissionError::StreamNotFound(ref s) if s == "links"));
    }

    #[test]
    fn test_classify_access_denied() {
        let err = service_error(PutRecordError::generic(
            ErrorMetadata::builder()
                .code("AccessDeniedException")
                .message("not authorized to perform kinesis:PutRecord")
                .build(),
        ));
        let classified = classify_put_record_error("links", err);
        assert!(matches!(classified, SubmissionError::AccessDenied(_)));
    }

    #[test]
    fn test_classify_other_service_error() {
        let err = service_error(PutRecordError::InvalidArgumentException(
            InvalidArgumentException::builder()
                .message("partition key too long")
                .build(),
        ));
        let classified = classify_put_record_error("links", err);
        assert!(matches!(classified, SubmissionError::Service(_)));
    }

    #[test]
    fn test_classify_transport_error() {
        let err: SdkError<PutRecordError, ()> = SdkError::timeout_error(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "request timed out",
        ));
        let classified = classify_put_record_error("links", err);
        assert!(matches!(classified, SubmissionError::Transport(_)));
    }

    /// Read one HTTP request (headers plus Content-Length body).
    async fn read_request(socket: &mut TcpStream) -> bool {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => return false,
                Ok(n) => n,
            };
            buf.extend_from_slice(&chunk[..n]);
            let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                return true;
            }
        }
    }

    /// Serve a throttling error for every request and count them.
    async fn spawn_throttling_server() -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let counter = counter.clone();
                tokio::spawn(async move {
                    while read_request(&mut socket).await {
                        counter.fetch_add(1, Ordering::SeqCst);
                        let body = r#"{"__type":"ProvisionedThroughputExceededException","message":"Rate exceeded"}"#;
                        let response = format!(
                            "HTTP/1.1 400 Bad Request\r\n\
                             Content-Type: application/x-amz-json-1.1\r\n\
                             x-amzn-ErrorType: ProvisionedThroughputExceededException\r\n\
                             Content-Length: {}\r\n\
                             \r\n{}",
                            body.len(),
                            body
                        );
                        if socket.write_all(response.as_bytes()).await.is_err() {
                            return;
                        }
                    }
                });
            }
        });

        (format!("http://{addr}"), hits)
    }

    #[tokio::test]
    async fn test_kinesis_client_makes_single_attempt() {
        let (endpoint, hits) = spawn_throttling_server().await;

        let loader = config_loader(Some(&endpoint))
            .region(Region::new("eu-west-2"))
            .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"));
        let client = KinesisStreamClient::from_loader(loader).await;

        let result = client
            .submit("links", b"{}".to_vec(), "partition-1")
            .await;

        assert!(matches!(result, Err(SubmissionError::Throttled(ref s)) if s == "links"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_access_denied_codes() {
        assert!(is_access_denied(Some("AccessDeniedException")));
        assert!(is_access_denied(Some("KMSAccessDeniedException")));
        assert!(!is_access_denied(Some("InvalidArgumentException")));
        assert!(!is_access_denied(None));
    }

    #[tokio::test]
    async fn test_dry_run_assigns_increasing_sequence_numbers() {
        let client = DryRunStreamClient::new();

        let first = client
            .submit("stream", b"{}".to_vec(), "key-1")
            .await
            .unwrap();
        let second = client
            .submit("stream", b"{}".to_vec(), "key-2")
            .await
            .unwrap();

        assert_eq!(first, "dry-run-00000000000000000000");
        assert_eq!(second, "dry-run-00000000000000000001");
    }
}
