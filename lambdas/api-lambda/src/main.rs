use genpet_shared::{AppState, Config};
use lambda_http::{run, service_fn, Error};
use std::sync::Arc;

mod http_handler;
use http_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::from_config(config).await?);

    run(service_fn(move |event| {
        let state = state.clone();
        async move { function_handler(event, state).await }
    }))
    .await
}
