//! Shared plumbing for both lambdas: configuration, request signature
//! checks, the job queue, and the HTTP handlers the API lambda routes to.

pub mod commands;
pub mod config;
pub mod generate;
pub mod interactions;
pub mod queue;
pub mod responses;
pub mod signature;

use std::sync::Arc;
use std::time::Duration;

use genpet_atoms::generation::{ImageGenerator, OpenAiImageClient};
use genpet_atoms::notification::{DiscordNotifier, Notifier};

pub use config::{Config, ConfigError};
pub use queue::{JobQueue, QueueError, SqsJobQueue};
pub use reqwest::Client as HttpClient;

/// Upper bound for a single provider or Discord call
const HTTP_TIMEOUT: Duration = Duration::from_secs(90);

/// Everything a handler needs, built once per cold start
pub struct AppState {
    pub config: Config,
    pub http: HttpClient,
    pub queue: Arc<dyn JobQueue>,
    pub generator: Arc<dyn ImageGenerator>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// Wire up the real SQS, OpenAI and Discord clients.
    pub async fn from_config(config: Config) -> Result<Self, lambda_http::Error> {
        let aws_config = aws_config::load_from_env().await;
        let sqs = aws_sdk_sqs::Client::new(&aws_config);

        let http = HttpClient::builder().timeout(HTTP_TIMEOUT).build()?;

        let queue = Arc::new(SqsJobQueue::new(sqs, config.queue_url.clone()));
        let generator = Arc::new(OpenAiImageClient::new(
            http.clone(),
            config.openai_api_key.clone(),
            config.openai_api_base.clone(),
        ));
        let notifier = Arc::new(DiscordNotifier::new(
            http.clone(),
            config.discord_token.clone(),
            config.discord_api_base.clone(),
            config.delivery_mode,
        ));

        Ok(AppState {
            config,
            http,
            queue,
            generator,
            notifier,
        })
    }
}
