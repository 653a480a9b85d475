use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(body)?.into())
        .map_err(Box::new)?)
}

pub fn error_response(status: StatusCode, message: &str) -> Result<Response<Body>, Error> {
    json_response(status, &serde_json::json!({ "error": message }))
}

pub fn text_response(status: StatusCode, text: &str) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(text.to_string().into())
        .map_err(Box::new)?)
}

pub fn not_found() -> Result<Response<Body>, Error> {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

pub fn method_not_allowed() -> Result<Response<Body>, Error> {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
