use genpet_shared::{
    commands, generate, interactions,
    responses::{method_not_allowed, not_found, text_response},
    AppState,
};
use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, Response,
};
use std::sync::Arc;

/// Main Lambda handler - routes Discord and generation requests
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    let body = event.body();
    tracing::info!("🚀 API Lambda invoked - Method: {} Path: {}", method, path);

    match (method, path) {
        (&Method::GET, "/") => text_response(StatusCode::OK, "Hello from genpet"),
        (&Method::POST, "/api/generate") => {
            generate::handle_generate(state.generator.as_ref(), body).await
        }
        (&Method::POST, "/discord/interactions") => {
            interactions::handle_interaction(&state, event.headers(), body).await
        }
        (&Method::GET, "/discord/command") => commands::handle_register_commands(&state).await,
        (_, "/" | "/api/generate" | "/discord/interactions" | "/discord/command") => {
            method_not_allowed()
        }
        _ => {
            tracing::warn!("⚠️ No route matched - Method: {} Path: {}", method, path);
            not_found()
        }
    }
}
