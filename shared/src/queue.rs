use async_trait::async_trait;
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::Client as SqsClient;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to enqueue job: {0}")]
pub struct QueueError(pub String);

/// Producer side of the fulfillment queue
#[async_trait]
pub trait JobQueue: Send + Sync {
    async fn send(&self, body: &str) -> Result<(), QueueError>;
}

/// SQS-backed queue; the consumer is the queue lambda
#[derive(Clone)]
pub struct SqsJobQueue {
    client: SqsClient,
    queue_url: String,
}

impl SqsJobQueue {
    pub fn new(client: SqsClient, queue_url: impl Into<String>) -> Self {
        SqsJobQueue {
            client,
            queue_url: queue_url.into(),
        }
    }
}

#[async_trait]
impl JobQueue for SqsJobQueue {
    async fn send(&self, body: &str) -> Result<(), QueueError> {
        let output = self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| QueueError(DisplayErrorContext(&e).to_string()))?;

        tracing::info!(
            "📤 Enqueued job: message_id={}",
            output.message_id().unwrap_or("<none>")
        );
        Ok(())
    }
}
