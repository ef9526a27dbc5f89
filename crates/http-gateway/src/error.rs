// Path: crates/http-gateway/src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use classify_telemetry::http_metrics;
use tower::{load_shed::error::Overloaded, timeout::error::Elapsed, BoxError};

/// Transport-level failures that are not covered by the always-200
/// classification envelope. Rendered as `{"error": {"code", "message"}}`.
#[derive(Debug)]
pub enum AppError {
    /// No route matches the path.
    NotFound(String),
    /// The client's token bucket is empty.
    TooManyRequests,
    /// Classification did not finish within `request_timeout_secs`.
    Timeout,
    /// All `concurrency_limit` slots are busy.
    Overloaded,
    /// Any other middleware failure.
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::Overloaded => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::TooManyRequests => "RATE_LIMITED",
            Self::Timeout => "CLASSIFY_TIMEOUT",
            Self::Overloaded => "CLASSIFY_OVERLOADED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::NotFound(path) => format!("No route for {path}"),
            Self::TooManyRequests => "Too many classification requests from this client".into(),
            Self::Timeout => "Classification did not complete in time".into(),
            Self::Overloaded => "Classifier is at capacity, retry shortly".into(),
            Self::Internal(detail) => detail.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": { "code": self.code(), "message": self.message() }
        });
        (self.status(), Json(body)).into_response()
    }
}

/// `HandleErrorLayer` callback for the load shed, concurrency and timeout
/// layers.
pub(crate) async fn map_middleware_error(err: BoxError) -> AppError {
    let mapped = if err.is::<Elapsed>() {
        AppError::Timeout
    } else if err.is::<Overloaded>() {
        AppError::Overloaded
    } else {
        tracing::error!(target: "http-gateway", error = %err, "unhandled middleware error");
        AppError::Internal(err.to_string())
    };
    http_metrics().inc_failure(mapped.code());
    mapped
}
