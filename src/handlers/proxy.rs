use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::store::StoreError;

/// Thin pass-through to the spreadsheet scripting endpoint. Exists
/// solely so browsers can reach the store without tripping cross-origin
/// checks; no validation or business logic lives here.
#[derive(Clone)]
pub struct ProxyState {
    pub http: reqwest::Client,
    pub store_url: String,
}

#[derive(Deserialize)]
pub struct ProxyParams {
    action: Option<String>,
}

const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
];

pub async fn forward(
    State(state): State<ProxyState>,
    Query(params): Query<ProxyParams>,
    body: Bytes,
) -> Response {
    // An empty body is fine when the action arrives via the query
    // string; a present-but-unparseable one is not.
    let body: Value = if body.is_empty() {
        Value::Object(Default::default())
    } else {
        match serde_json::from_slice(&body) {
            Ok(value) => value,
            Err(err) => {
                tracing::error!("proxy: unreadable request body: {err}");
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, "invalid JSON body");
            }
        }
    };

    let action = body
        .get("action")
        .and_then(Value::as_str)
        .map(str::to_string)
        .or(params.action);

    let Some(action) = action else {
        return error_response(StatusCode::BAD_REQUEST, "no action specified");
    };

    match relay(&state, &action, &body).await {
        Ok(data) => (StatusCode::OK, CORS_HEADERS, Json(data)).into_response(),
        Err(err) => {
            tracing::error!(%action, "proxy error: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

/// Pre-flight negotiation: no body, just the permissive headers.
pub async fn preflight() -> Response {
    (StatusCode::OK, CORS_HEADERS).into_response()
}

async fn relay(state: &ProxyState, action: &str, body: &Value) -> Result<Value, StoreError> {
    let url = format!("{}?action={}", state.store_url, action);

    tracing::debug!(action, "proxy: forwarding to store");
    let response = state.http.post(&url).json(body).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(StoreError::Status(status));
    }

    Ok(response.json().await?)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, CORS_HEADERS, Json(json!({ "error": message }))).into_response()
}
