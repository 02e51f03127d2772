//! Mock OpenAI-compatible audio API shared by the integration tests.
#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const API_KEY: &str = "test-key";
pub const TRANSCRIPT: &str = "sample transcribed text";

/// What the mock saw, plus knobs for failure injection.
#[derive(Clone, Default)]
pub struct MockState {
    /// `input` of every speech request, in arrival order.
    pub speech_inputs: Arc<Mutex<Vec<String>>>,
    /// Raw multipart bodies of transcription requests.
    pub uploads: Arc<Mutex<Vec<Vec<u8>>>>,
    /// Number of upcoming requests (either endpoint) to answer with 500.
    pub fail_next: Arc<AtomicUsize>,
    /// Answer every request with 500.
    pub always_fail: bool,
}

impl MockState {
    pub fn failing() -> Self {
        Self {
            always_fail: true,
            ..Self::default()
        }
    }

    pub fn speech_inputs(&self) -> Vec<String> {
        self.speech_inputs.lock().unwrap().clone()
    }

    pub fn uploads(&self) -> Vec<Vec<u8>> {
        self.uploads.lock().unwrap().clone()
    }

    fn should_fail(&self) -> bool {
        if self.always_fail {
            return true;
        }
        self.fail_next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", API_KEY))
        .unwrap_or(false)
}

async fn transcriptions(State(state): State<MockState>, headers: HeaderMap, body: Bytes) -> Response {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, "bad key").into_response();
    }
    if state.should_fail() {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }
    let is_multipart = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("multipart/form-data"))
        .unwrap_or(false);
    if !is_multipart {
        return (StatusCode::BAD_REQUEST, "expected multipart").into_response();
    }
    state.uploads.lock().unwrap().push(body.to_vec());
    Json(serde_json::json!({ "text": TRANSCRIPT })).into_response()
}

/// Echoes the input back as the "audio" so tests can match parts to chunks.
async fn speech(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, "bad key").into_response();
    }
    if state.should_fail() {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }
    let input = body["input"].as_str().unwrap_or_default().to_string();
    state.speech_inputs.lock().unwrap().push(input.clone());
    (StatusCode::OK, format!("AUDIO:{}", input)).into_response()
}

/// Serve the mock on an ephemeral port; returns the base URL (`.../v1`).
pub async fn start_mock(state: MockState) -> String {
    let app = Router::new()
        .route("/v1/audio/transcriptions", post(transcriptions))
        .route("/v1/audio/speech", post(speech))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/v1", addr)
}

/// Does `haystack` contain `needle` as a byte substring?
pub fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
