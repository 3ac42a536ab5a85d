// src/api.rs
//! HTTP surface: router, shared state, and the fraud endpoints. Wire
//! field names and error strings are kept compatible with existing UI
//! consumers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{DefaultBodyLimit, FromRequest, Multipart, Query, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::analyze::{analyze_channel, AnalysisResult, Channel, Metadata};
use crate::error::ApiError;
use crate::metrics;
use crate::report::ReportStore;
use crate::rules::Rules;
use crate::samples;
use crate::transcribe::{transcribe_with_retry, Transcriber};

/// Upload ceiling for multipart media, matching the original deployment.
const UPLOAD_LIMIT_BYTES: usize = 15 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub rules: Arc<Rules>,
    pub transcriber: Arc<dyn Transcriber>,
    pub reports: Arc<ReportStore>,
}

impl AppState {
    pub fn new(rules: Arc<Rules>, transcriber: Arc<dyn Transcriber>) -> Self {
        Self {
            rules,
            transcriber,
            reports: Arc::new(ReportStore::new()),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/fraud/samples", get(get_samples))
        .route("/api/fraud/incidents", get(get_incidents))
        .route("/api/fraud/analyze", post(analyze))
        .route("/api/fraud/analyze-batch", post(analyze_batch))
        .route("/api/fraud/report-scam", post(report_scam))
        .layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct SamplesQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
}

async fn get_samples(Query(q): Query<SamplesQuery>) -> Json<Value> {
    match q.kind.as_deref() {
        Some("text") => Json(json!(samples::text_samples())),
        Some("voice") => Json(json!(samples::voice_samples())),
        Some("video") => Json(json!(samples::video_samples())),
        // Omitted or unrecognized type returns all three datasets.
        _ => Json(json!({
            "text": samples::text_samples(),
            "voice": samples::voice_samples(),
            "video": samples::video_samples(),
        })),
    }
}

async fn get_incidents(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "incidents": samples::incidents(&state.rules) }))
}

#[derive(Debug, Default, Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    metadata: Option<Metadata>,
}

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    transcript: String,
    analysis: AnalysisResult,
}

struct Upload {
    bytes: Vec<u8>,
    content_type: String,
}

/// Single-item analysis. Accepts either a JSON body or a multipart upload
/// with a `file` part; uploads go through the placeholder transcriber and
/// get sample-derived metadata hints attached.
async fn analyze(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let started = Instant::now();
    let is_multipart = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    let (channel_name, content, mut metadata, upload) = if is_multipart {
        read_multipart(req).await?
    } else {
        let Json(body) = Json::<AnalyzeRequest>::from_request(req, &())
            .await
            .map_err(|_| ApiError::validation("channel and content are required"))?;
        (body.channel, body.content, body.metadata.unwrap_or_default(), None)
    };

    let mut channel_name = channel_name.filter(|c| !c.is_empty());
    let mut transcript: Option<String> = None;
    let mut file_size = 0usize;

    if let Some(up) = upload {
        file_size = up.bytes.len();
        if channel_name.is_none() {
            if up.content_type.starts_with("audio/") {
                channel_name = Some("voice".to_string());
            } else if up.content_type.starts_with("video/") {
                channel_name = Some("video".to_string());
            }
        }

        transcript = Some(
            transcribe_with_retry(state.transcriber.as_ref(), &up.bytes)
                .await
                .map_err(ApiError::Transcription)?,
        );

        // Attach sample-derived metadata hints for demo realism.
        if let Some(ch) = channel_name.as_deref().and_then(Channel::parse) {
            let hints = samples::synthesize_metadata(ch, &up.bytes);
            match ch {
                Channel::Voice => {
                    metadata.caller_id = hints.caller_id;
                    metadata.spoofed_caller_id = hints.spoofed_caller_id;
                }
                Channel::Video => {
                    metadata.deepfake_indicators = hints.deepfake_indicators;
                }
                Channel::Text => {}
            }
        }
    }

    // Fallback transcript for non-file requests.
    let transcript = transcript.or_else(|| content.filter(|c| !c.is_empty()));

    let (channel_name, transcript) = match (channel_name, transcript) {
        (Some(c), Some(t)) => (c, t),
        _ => return Err(ApiError::validation("channel and content are required")),
    };
    let channel =
        Channel::parse(&channel_name).ok_or_else(|| ApiError::validation("invalid channel"))?;

    let analysis = analyze_channel(channel, &transcript, &metadata, &state.rules);
    metrics::record_analyze(channel);
    tracing::info!(
        channel = channel.as_str(),
        file_size,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "analyze request"
    );

    Ok(Json(AnalyzeResponse { transcript, analysis }))
}

async fn read_multipart(
    req: Request,
) -> Result<(Option<String>, Option<String>, Metadata, Option<Upload>), ApiError> {
    let mut multipart = Multipart::from_request(req, &())
        .await
        .map_err(|_| ApiError::validation("malformed multipart body"))?;

    let mut channel = None;
    let mut content = None;
    let mut metadata = Metadata::default();
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::validation("malformed multipart body"))?
    {
        match field.name().unwrap_or("") {
            "file" => {
                let content_type = field.content_type().unwrap_or("").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::validation("malformed multipart body"))?;
                upload = Some(Upload {
                    bytes: bytes.to_vec(),
                    content_type,
                });
            }
            "channel" => channel = Some(field_text(field).await?),
            "content" => content = Some(field_text(field).await?),
            "metadata" => {
                let raw = field_text(field).await?;
                metadata = serde_json::from_str(&raw).unwrap_or_default();
            }
            _ => {}
        }
    }
    Ok((channel, content, metadata, upload))
}

async fn field_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|_| ApiError::validation("malformed multipart body"))
}

/// One batch entry. Metadata fields arrive inline next to channel/content.
#[derive(Debug, Deserialize)]
struct BatchItem {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(flatten)]
    metadata: Metadata,
}

#[derive(Debug, Serialize)]
struct BatchOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(flatten)]
    analysis: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Batch analysis: each item is scored independently; a malformed item
/// yields a per-item error instead of failing its siblings.
async fn analyze_batch(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<Value>, ApiError> {
    // A missing or unparseable body is treated like an empty object.
    let body = Json::<Value>::from_request(req, &())
        .await
        .map(|Json(v)| v)
        .unwrap_or(Value::Null);
    let items = body
        .get("items")
        .and_then(Value::as_array)
        .cloned()
        .ok_or_else(|| ApiError::validation("items must be an array"))?;
    metrics::record_batch_items(items.len());

    let results: Vec<BatchOutcome> = items
        .into_iter()
        .map(|raw| analyze_batch_item(raw, &state.rules))
        .collect();
    Ok(Json(json!({ "results": results })))
}

fn analyze_batch_item(raw: Value, rules: &Rules) -> BatchOutcome {
    let fallback_id = raw.get("id").and_then(Value::as_str).map(str::to_string);

    let item: BatchItem = match serde_json::from_value(raw) {
        Ok(it) => it,
        Err(_) => {
            return BatchOutcome {
                id: fallback_id,
                analysis: None,
                error: Some("analysis_failed".to_string()),
            }
        }
    };

    let Some(channel) = item.channel.as_deref().and_then(Channel::parse) else {
        return BatchOutcome {
            id: item.id,
            analysis: None,
            error: Some("invalid channel".to_string()),
        };
    };
    let Some(content) = item.content else {
        return BatchOutcome {
            id: item.id,
            analysis: None,
            error: Some("analysis_failed".to_string()),
        };
    };

    let analysis = analyze_channel(channel, &content, &item.metadata, rules);
    BatchOutcome {
        id: item.id,
        analysis: Some(analysis),
        error: None,
    }
}

#[derive(Debug, Default, Deserialize)]
struct ReportRequest {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default, rename = "userId")]
    user_id: Option<String>,
}

async fn report_scam(State(state): State<AppState>, req: Request) -> Response {
    let req = Json::<ReportRequest>::from_request(req, &())
        .await
        .map(|Json(r)| r)
        .unwrap_or_default();
    let content = req.content.unwrap_or_default();
    let channel_name = req.channel.unwrap_or_default();
    if content.is_empty() || channel_name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "ok": false, "error": "content and channel are required" })),
        )
            .into_response();
    }
    let Some(channel) = Channel::parse(&channel_name) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "ok": false, "error": "invalid channel" })),
        )
            .into_response();
    };

    let (item, total) = state.reports.submit(content, channel, req.user_id);
    metrics::record_report();
    Json(json!({ "ok": true, "item": item, "total": total })).into_response()
}
