use aws_lambda_events::event::sqs::{BatchItemFailure, SqsBatchResponse, SqsEvent};
use fulfillment_block::{process_batch, QueuedJob, RetryPolicy};
use genpet_shared::AppState;
use lambda_runtime::{Error, LambdaEvent};
use std::sync::Arc;

/// SQS consumer: fulfil every message of the batch and report the ones that
/// failed so only those are redelivered (requires `ReportBatchItemFailures`
/// on the event source mapping).
pub(crate) async fn function_handler(
    event: LambdaEvent<SqsEvent>,
    state: Arc<AppState>,
) -> Result<SqsBatchResponse, Error> {
    let mut jobs = Vec::with_capacity(event.payload.records.len());
    for record in event.payload.records {
        match (record.message_id, record.body) {
            (Some(message_id), Some(body)) => jobs.push(QueuedJob { message_id, body }),
            (message_id, None) => {
                tracing::warn!("⚠️ Dropping SQS record without body: {:?}", message_id)
            }
            (None, Some(_)) => tracing::warn!("⚠️ Dropping SQS record without message id"),
        }
    }

    let retry = RetryPolicy::new(state.config.max_attempts, state.config.retry_delay);
    let failed = process_batch(
        state.generator.as_ref(),
        state.notifier.as_ref(),
        &retry,
        &jobs,
    )
    .await;

    if !failed.is_empty() {
        tracing::error!("❌ {} of {} job(s) failed", failed.len(), jobs.len());
    }

    Ok(SqsBatchResponse {
        batch_item_failures: failed
            .into_iter()
            .map(|item_identifier| BatchItemFailure { item_identifier })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use aws_lambda_events::event::sqs::SqsMessage;
    use genpet_atoms::generation::{GenerationError, GenerationResult, ImageGenerator};
    use genpet_atoms::interactions::OriginCoordinates;
    use genpet_atoms::notification::{DeliveryMode, NotificationError, Notifier};
    use genpet_shared::{Config, HttpClient, JobQueue, QueueError};
    use lambda_runtime::Context;
    use std::sync::Mutex;
    use std::time::Duration;

    struct UnusedQueue;

    #[async_trait]
    impl JobQueue for UnusedQueue {
        async fn send(&self, _: &str) -> Result<(), QueueError> {
            unreachable!("the consumer never enqueues")
        }
    }

    /// Fails any prompt containing "fail", otherwise returns a fixed URL.
    struct ScriptedGenerator;

    #[async_trait]
    impl ImageGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerationError> {
            if prompt.contains("fail") {
                return Err(GenerationError::RateLimited);
            }
            Ok(GenerationResult {
                prompt: prompt.to_string(),
                url: "https://img/cat1.png".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(Mutex<Vec<(OriginCoordinates, String)>>);

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(
            &self,
            origin: &OriginCoordinates,
            content: &str,
        ) -> Result<(), NotificationError> {
            self.0
                .lock()
                .unwrap()
                .push((origin.clone(), content.to_string()));
            Ok(())
        }
    }

    fn state(notifier: Arc<RecordingNotifier>) -> Arc<AppState> {
        Arc::new(AppState {
            config: Config {
                openai_api_key: "sk-test".to_string(),
                openai_api_base: "http://127.0.0.1:1".to_string(),
                discord_application_id: "app-1".to_string(),
                discord_public_key: "00".repeat(32),
                discord_token: "bot-token".to_string(),
                discord_api_base: "http://127.0.0.1:1".to_string(),
                delivery_mode: DeliveryMode::Followup,
                queue_url: "https://sqs.local/000/q".to_string(),
                max_attempts: 1,
                retry_delay: Duration::ZERO,
            },
            http: HttpClient::new(),
            queue: Arc::new(UnusedQueue),
            generator: Arc::new(ScriptedGenerator),
            notifier,
        })
    }

    fn record(message_id: &str, prompt: &str) -> SqsMessage {
        let body = serde_json::json!({
            "application_id": "app-1",
            "channel": {"guild_id": "guild-1", "last_message_id": "msg-1"},
            "channel_id": "chan-1",
            "data": {
                "id": "cmd-1",
                "name": "gencat",
                "options": [{"name": "prompt", "type": 3, "value": prompt}]
            },
            "token": "tok-1",
            "type": 2
        });
        SqsMessage {
            message_id: Some(message_id.to_string()),
            body: Some(body.to_string()),
            ..Default::default()
        }
    }

    fn event(records: Vec<SqsMessage>) -> LambdaEvent<SqsEvent> {
        LambdaEvent::new(SqsEvent { records }, Context::default())
    }

    #[tokio::test]
    async fn queued_gencat_is_delivered_to_its_origin() {
        let notifier = Arc::new(RecordingNotifier::default());

        let resp = function_handler(event(vec![record("m-1", "a tabby cat")]), state(notifier.clone()))
            .await
            .unwrap();

        assert!(resp.batch_item_failures.is_empty());
        let sent = notifier.0.lock().unwrap().clone();
        assert_eq!(sent.len(), 1);
        let (origin, content) = &sent[0];
        assert_eq!(content, "https://img/cat1.png");
        assert_eq!(origin.channel_id, "chan-1");
        assert_eq!(origin.guild_id, "guild-1");
        assert_eq!(origin.message_id, "msg-1");
        assert_eq!(origin.token, "tok-1");
    }

    #[tokio::test]
    async fn only_failed_messages_are_reported() {
        let notifier = Arc::new(RecordingNotifier::default());
        let records = vec![
            record("m-1", "a tabby cat"),
            record("m-2", "please fail"),
            record("m-3", "a sleepy cat"),
        ];

        let resp = function_handler(event(records), state(notifier.clone()))
            .await
            .unwrap();

        let failed: Vec<&str> = resp
            .batch_item_failures
            .iter()
            .map(|f| f.item_identifier.as_str())
            .collect();
        assert_eq!(failed, vec!["m-2"]);
        assert_eq!(notifier.0.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn records_without_body_are_skipped() {
        let notifier = Arc::new(RecordingNotifier::default());
        let empty = SqsMessage {
            message_id: Some("m-9".to_string()),
            ..Default::default()
        };

        let resp = function_handler(event(vec![empty]), state(notifier.clone()))
            .await
            .unwrap();

        assert!(resp.batch_item_failures.is_empty());
        assert!(notifier.0.lock().unwrap().is_empty());
    }
}
