// Path: crates/telemetry/src/prometheus.rs
//! A concrete implementation of the metrics sinks using the Prometheus crate.

use crate::sinks::*;
use once_cell::sync::OnceCell;
use prometheus::{
    exponential_buckets, register_histogram, register_histogram_vec, register_int_counter,
    register_int_counter_vec, Histogram, HistogramVec, IntCounter, IntCounterVec,
};

// --- Metric Statics ---
// We use OnceCell to hold the metric collectors. They will be initialized
// exactly once by the `install` function.

static TOKENS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static INPUT_TOKENS: OnceCell<Histogram> = OnceCell::new();
static SUM_DIGITS: OnceCell<Histogram> = OnceCell::new();
static HTTP_REQUESTS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static HTTP_REQUEST_DURATION_SECONDS: OnceCell<HistogramVec> = OnceCell::new();
static HTTP_FAILURES_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static HTTP_RATE_LIMITED_TOTAL: OnceCell<IntCounter> = OnceCell::new();

#[derive(Debug, Clone, Copy)]
pub struct PrometheusSink;

/// Helper macro to reduce boilerplate for getting a metric from OnceCell.
/// This will panic if `install()` has not been called, which indicates a
/// critical application setup error.
macro_rules! get_metric {
    ($metric:ident) => {
        $metric
            .get()
            .expect("Prometheus sink not initialized. Call telemetry::prometheus::install() first.")
    };
}

impl ClassifyMetricsSink for PrometheusSink {
    fn inc_tokens(&self, bucket: &'static str, count: u64) {
        get_metric!(TOKENS_TOTAL)
            .with_label_values(&[bucket])
            .inc_by(count);
    }
    fn observe_input_tokens(&self, count: usize) {
        get_metric!(INPUT_TOKENS).observe(count as f64);
    }
    fn observe_sum_digits(&self, digits: usize) {
        get_metric!(SUM_DIGITS).observe(digits as f64);
    }
}

impl HttpMetricsSink for PrometheusSink {
    fn observe_request_duration(&self, route: &str, duration_secs: f64) {
        get_metric!(HTTP_REQUEST_DURATION_SECONDS)
            .with_label_values(&[route])
            .observe(duration_secs);
    }
    fn inc_requests_total(&self, route: &str, result: &'static str) {
        get_metric!(HTTP_REQUESTS_TOTAL)
            .with_label_values(&[route, result])
            .inc();
    }
    fn inc_failure(&self, code: &'static str) {
        get_metric!(HTTP_FAILURES_TOTAL)
            .with_label_values(&[code])
            .inc();
    }
    fn inc_rate_limited(&self) {
        get_metric!(HTTP_RATE_LIMITED_TOTAL).inc();
    }
}

/// Initializes all Prometheus metrics collectors and returns a static reference to the sink.
/// This function must be called only once at application startup.
#[allow(clippy::expect_used)]
pub fn install() -> Result<&'static dyn MetricsSink, prometheus::Error> {
    TOKENS_TOTAL
        .set(register_int_counter_vec!(
            "classify_tokens_total",
            "Total tokens classified, by bucket.",
            &["bucket"]
        )?)
        .expect("static already initialized");
    INPUT_TOKENS
        .set(register_histogram!(
            "classify_input_tokens",
            "Number of tokens per classification request.",
            exponential_buckets(1.0, 4.0, 8)?
        )?)
        .expect("static already initialized");
    SUM_DIGITS
        .set(register_histogram!(
            "classify_sum_digits",
            "Decimal digits in the computed sum.",
            exponential_buckets(1.0, 2.0, 10)?
        )?)
        .expect("static already initialized");
    HTTP_REQUESTS_TOTAL
        .set(register_int_counter_vec!(
            "classify_http_requests_total",
            "Total HTTP requests, by route and result.",
            &["route", "result"]
        )?)
        .expect("static already initialized");
    HTTP_REQUEST_DURATION_SECONDS
        .set(register_histogram_vec!(
            "classify_http_request_duration_seconds",
            "Latency of HTTP requests (seconds).",
            &["route"],
            exponential_buckets(0.0001, 2.0, 16)?
        )?)
        .expect("static already initialized");
    HTTP_FAILURES_TOTAL
        .set(register_int_counter_vec!(
            "classify_http_failures_total",
            "Total failure envelopes returned, by error code.",
            &["code"]
        )?)
        .expect("static already initialized");
    HTTP_RATE_LIMITED_TOTAL
        .set(register_int_counter!(
            "classify_http_rate_limited_total",
            "Total requests rejected by the per-IP rate limiter."
        )?)
        .expect("static already initialized");

    static SINK: PrometheusSink = PrometheusSink;
    Ok(&SINK)
}
