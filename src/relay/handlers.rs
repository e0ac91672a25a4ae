use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Uri, header},
    response::Html,
};
use std::borrow::Cow;
use tracing::info;

use super::error::RelayError;
use super::id::{is_accepted, preview};
use super::request::PostIdRequest;
use crate::page;
use crate::state::SharedState;

pub const OK_BODY: &str = "OK";

const POST_PREFIX: &str = "/post/";

pub async fn get_latest(State(state): State<SharedState>) -> String {
    state.get().await.unwrap_or_default()
}

/// Invalid UTF-8 in the segment decodes to U+FFFD, so only the length rule
/// decides the outcome.
pub async fn post_via_path(
    State(state): State<SharedState>,
    uri: Uri,
) -> Result<&'static str, RelayError> {
    let raw = uri.path().strip_prefix(POST_PREFIX).unwrap_or_default();
    let id = decode_segment(raw);
    store(&state, id, "GET").await
}

pub async fn post_via_body(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, RelayError> {
    if !is_json_content_type(&headers) {
        return Err(RelayError::BadRequest(
            "expected an application/json request body".to_string(),
        ));
    }

    let request = PostIdRequest::from_slice(&body)?;
    store(&state, request.id, "POST").await
}

pub async fn clear(State(state): State<SharedState>) -> &'static str {
    state.clear().await;
    info!("ID cleared");
    OK_BODY
}

pub async fn status_page(State(state): State<SharedState>) -> Html<String> {
    let latest = state.get().await;
    Html(page::render(latest.as_deref()))
}

async fn store(state: &SharedState, id: String, via: &str) -> Result<&'static str, RelayError> {
    if !is_accepted(&id) {
        return Err(RelayError::InvalidId);
    }

    info!("New ID ({}): {}", via, preview(&id));
    state.set(id).await;
    Ok(OK_BODY)
}

fn decode_segment(raw: &str) -> String {
    match urlencoding::decode_binary(raw.as_bytes()) {
        Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        Cow::Owned(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
