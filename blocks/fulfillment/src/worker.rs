use genpet_atoms::generation::{GenerationError, GenerationResult, ImageGenerator};
use genpet_atoms::interactions::{CommandInvocation, InteractionError};
use genpet_atoms::notification::Notifier;
use thiserror::Error;

use crate::retry::RetryPolicy;

/// One message delivered by the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedJob {
    pub message_id: String,
    pub body: String,
}

/// How a job ended when it did not fail outright
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// The image was posted back to the channel.
    Delivered(GenerationResult),
    /// The image was generated but Discord refused or never got the follow-up.
    /// The message is still acknowledged.
    Undelivered(GenerationResult),
}

/// Failures that should go back to the queue for redelivery
#[derive(Debug, Error)]
pub enum FulfillmentError {
    #[error("invalid job payload: {0}")]
    Payload(#[from] InteractionError),

    #[error("image generation failed: {0}")]
    Generation(#[from] GenerationError),
}

/// Run one queued command to completion: parse, generate, notify.
pub async fn fulfill_job(
    generator: &dyn ImageGenerator,
    notifier: &dyn Notifier,
    retry: &RetryPolicy,
    body: &str,
) -> Result<JobOutcome, FulfillmentError> {
    let invocation = CommandInvocation::from_slice(body.as_bytes())?;
    let command = invocation.command()?;
    let prompt = invocation.prompt()?;

    tracing::info!(
        "⚙️ Fulfilling {}: prompt={:?} channel={}",
        command,
        prompt,
        invocation.channel_id
    );

    let result = retry
        .run("image generation", || generator.generate(prompt))
        .await?;

    let origin = invocation.origin();
    match retry
        .run("discord notification", || notifier.notify(&origin, &result.url))
        .await
    {
        Ok(()) => {
            tracing::info!("✅ Delivered {} image: {}", command, result.url);
            Ok(JobOutcome::Delivered(result))
        }
        Err(e) => {
            tracing::error!(
                "❌ Generated {} for channel {} but could not deliver it: {}",
                result.url,
                origin.channel_id,
                e
            );
            Ok(JobOutcome::Undelivered(result))
        }
    }
}

/// Process every job of a delivered batch independently.
///
/// Returns the message ids that failed, for the queue to redeliver. Jobs are
/// not deduplicated; a redelivered job produces another image and reply.
pub async fn process_batch(
    generator: &dyn ImageGenerator,
    notifier: &dyn Notifier,
    retry: &RetryPolicy,
    jobs: &[QueuedJob],
) -> Vec<String> {
    tracing::info!("📥 Processing batch of {} job(s)", jobs.len());

    let mut failed = Vec::new();
    for job in jobs {
        if let Err(e) = fulfill_job(generator, notifier, retry, &job.body).await {
            tracing::error!("❌ Job {} failed: {}", job.message_id, e);
            failed.push(job.message_id.clone());
        }
    }
    failed
}
