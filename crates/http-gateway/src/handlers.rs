// Path: crates/http-gateway/src/handlers.rs
use crate::error::AppError;
use crate::request::parse_tokens;
use crate::GatewayState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, MatchedPath, State},
    http::Uri,
    response::Json,
};
use classify_telemetry::{classify_metrics, http_metrics, time::Timer};
use classify_types::{
    ClassificationResult, ClassifyResponse, ErrorCode, HealthResponse, RequestError,
};
use std::sync::Arc;

/// `POST /classify`. Always answers 200; failures carry `is_success: false`.
pub(crate) async fn classify_handler(
    State(state): State<Arc<GatewayState>>,
    matched: MatchedPath,
    body: Result<Bytes, BytesRejection>,
) -> Json<ClassifyResponse> {
    let route = matched.as_str();
    let _timer = Timer::new(http_metrics(), route);

    let tokens = body
        .map_err(|e| RequestError::Malformed(e.body_text()))
        .and_then(|b| parse_tokens(&b, state.limits));

    match tokens {
        Ok(tokens) => {
            let result = classify_core::process(&tokens);
            record_classification(&result, tokens.len());
            http_metrics().inc_requests_total(route, "ok");
            tracing::info!(
                target: "http-gateway",
                route,
                tokens = tokens.len(),
                "processed classification request"
            );
            Json(ClassifyResponse::success(&state.identity, result))
        }
        Err(e) => {
            http_metrics().inc_failure(e.code());
            http_metrics().inc_requests_total(route, "error");
            tracing::warn!(
                target: "http-gateway",
                route,
                code = e.code(),
                error = %e,
                "rejected classification request"
            );
            Json(ClassifyResponse::failure(&state.identity))
        }
    }
}

fn record_classification(result: &ClassificationResult, tokens: usize) {
    let m = classify_metrics();
    m.observe_input_tokens(tokens);
    m.inc_tokens("odd", result.odd_numbers.len() as u64);
    m.inc_tokens("even", result.even_numbers.len() as u64);
    m.inc_tokens("alpha", result.alphabets.len() as u64);
    m.inc_tokens("special", result.special_characters.len() as u64);
    m.observe_sum_digits(result.sum.len());
}

pub(crate) async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

pub(crate) async fn not_found_handler(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
