//! Queue transport for curated movie messages.
//!
//! `MessageQueue` is the seam between the publisher and the concrete queue;
//! `SqsQueue` maps it onto AWS SQS. The client is built once per process and
//! handed to the publisher explicitly.

use crate::error::QueueError;
use async_trait::async_trait;
use aws_sdk_sqs::Client as SqsClient;
use aws_sdk_sqs::error::DisplayErrorContext;
use std::time::Duration;
use tracing::instrument;

#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Submit one message body, visible to consumers after `delay`.
    ///
    /// Returns the id the queue assigned to the message.
    async fn send_message(&self, body: String, delay: Duration) -> Result<String, QueueError>;
}

/// AWS SQS-backed queue.
///
/// Sends plain bodies with a per-message delay; no message attributes, no
/// batching.
#[derive(Clone)]
pub struct SqsQueue {
    client: SqsClient,
    queue_url: String,
}

impl SqsQueue {
    pub fn new(client: SqsClient, queue_url: impl Into<String>) -> Self {
        Self {
            client,
            queue_url: queue_url.into(),
        }
    }

    /// Build a client from the ambient AWS configuration (environment,
    /// profile, instance metadata).
    ///
    /// # Arguments
    /// * `queue_url` - URL of the destination queue
    /// * `endpoint_url` - Optional endpoint override, e.g. a local emulator
    pub async fn from_env(queue_url: impl Into<String>, endpoint_url: Option<&str>) -> Self {
        let shared = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        let mut builder = aws_sdk_sqs::config::Builder::from(&shared);
        if let Some(endpoint) = endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Self::new(SqsClient::from_conf(builder.build()), queue_url)
    }

    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }
}

#[async_trait]
impl MessageQueue for SqsQueue {
    #[instrument(level = "debug", skip(self, body))]
    async fn send_message(&self, body: String, delay: Duration) -> Result<String, QueueError> {
        let delay_seconds = i32::try_from(delay.as_secs())
            .map_err(|_| QueueError(format!("delay of {:?} out of range", delay)))?;

        let resp = self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .delay_seconds(delay_seconds)
            .message_body(body)
            .send()
            .await
            .map_err(|e| QueueError(format!("sqs send: {}", DisplayErrorContext(&e))))?;

        Ok(resp.message_id().unwrap_or_default().to_string())
    }
}
