use crate::api::error::{ApiError, ApiResult};
use crate::api::types::LatencyResponse;
use crate::latency::DurationRange;
use crate::metrics::{record_payload, record_rejected, record_request, record_wait};
use crate::range::RangeError;
use crate::size::SizeRange;
use axum::{
    body::Body,
    extract::Path,
    http::{header, HeaderValue, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;

const LATENCY_ENDPOINT: &str = "latency";
const DATA_ENDPOINT: &str = "data";

pub struct RestApi;

impl RestApi {
    pub fn router() -> Router {
        Router::new()
            .route("/", get(describe_api))
            .route("/health", get(health_check))
            .route("/latency/:duration", get(get_latency))
            .route("/data/:size", get(get_data))
            .fallback(not_found)
    }
}

async fn health_check() -> &'static str {
    "OK"
}

async fn describe_api() -> Json<BTreeMap<&'static str, &'static str>> {
    Json(BTreeMap::from([
        ("/", "Root endpoint"),
        ("/health", "Liveness check"),
        (
            "/latency/{duration}",
            "Get a response within the provided latency duration",
        ),
        (
            "/data/{size}",
            "Get a response with a payload matching the provided size criteria",
        ),
        ("/metrics", "Prometheus metrics, when enabled"),
    ]))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Log and count a rejected range expression before it is turned into a 400.
fn reject(endpoint: &'static str, step: &'static str, input: &str, err: RangeError) -> ApiError {
    tracing::warn!(
        handler = endpoint,
        input,
        step,
        error_message = %err,
        "rejected range expression"
    );
    record_rejected(endpoint, err.reason());
    ApiError::InvalidRange(err)
}

async fn get_latency(Path(duration): Path<String>) -> ApiResult<Json<LatencyResponse>> {
    record_request(LATENCY_ENDPOINT);

    let range = DurationRange::parse(&duration)
        .map_err(|e| reject(LATENCY_ENDPOINT, "parse", &duration, e))?;
    range
        .validate()
        .map_err(|e| reject(LATENCY_ENDPOINT, "validate", &duration, e))?;

    let mut rng = StdRng::from_entropy();
    let waited = range.wait(&mut rng).await;
    record_wait(waited);

    Ok(Json(LatencyResponse::new(waited)))
}

async fn get_data(Path(size): Path<String>) -> ApiResult<Response> {
    record_request(DATA_ENDPOINT);

    let range =
        SizeRange::parse(&size).map_err(|e| reject(DATA_ENDPOINT, "parse", &size, e))?;
    range
        .validate()
        .map_err(|e| reject(DATA_ENDPOINT, "validate", &size, e))?;

    // Streamed so a huge size never needs the whole payload in memory
    let (len, payload) = range.payload_stream(StdRng::from_entropy());
    record_payload(len);

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/octet-stream"),
            ),
            (header::CONTENT_LENGTH, HeaderValue::from(len)),
        ],
        Body::from_stream(payload),
    )
        .into_response())
}
