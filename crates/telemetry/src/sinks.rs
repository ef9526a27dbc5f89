// Path: crates/telemetry/src/sinks.rs
//! Defines abstract traits for metrics reporting, decoupling the gateway from the backend.

use once_cell::sync::OnceCell;

// --- Static Sink Access ---

/// A no-op sink for use in tests or when telemetry is disabled.
#[derive(Debug, Clone, Copy)]
pub struct NopSink;

/// A lazily-initialized static reference to the global `MetricsSink` implementation.
pub static SINK: OnceCell<&'static dyn MetricsSink> = OnceCell::new();
static NOP_SINK: NopSink = NopSink;

/// Returns a static reference to the configured classification metrics sink.
/// If no sink has been initialized, it returns a no-op sink.
pub fn classify_metrics() -> &'static dyn ClassifyMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}

/// Returns a static reference to the configured HTTP metrics sink.
/// If no sink has been initialized, it returns a no-op sink.
pub fn http_metrics() -> &'static dyn HttpMetricsSink {
    SINK.get().copied().unwrap_or(&NOP_SINK)
}

// --- Trait Definitions ---

/// A sink for metrics describing the classified data itself.
pub trait ClassifyMetricsSink: Send + Sync + std::fmt::Debug {
    /// Increments the per-bucket token counter (`odd`, `even`, `alpha`, `special`).
    fn inc_tokens(&self, bucket: &'static str, count: u64);
    /// Observes the number of tokens in a single request.
    fn observe_input_tokens(&self, count: usize);
    /// Observes the number of decimal digits in the computed sum.
    fn observe_sum_digits(&self, digits: usize);
}
impl ClassifyMetricsSink for NopSink {
    fn inc_tokens(&self, _bucket: &'static str, _count: u64) {}
    fn observe_input_tokens(&self, _count: usize) {}
    fn observe_sum_digits(&self, _digits: usize) {}
}

/// A sink for metrics related to the public HTTP gateway.
pub trait HttpMetricsSink: Send + Sync + std::fmt::Debug {
    /// Observes the latency of a request, labeled by route.
    fn observe_request_duration(&self, route: &str, duration_secs: f64);
    /// Increments a counter for total requests, labeled by route and outcome.
    fn inc_requests_total(&self, route: &str, result: &'static str);
    /// Increments a counter for failure envelopes, labeled by error code.
    fn inc_failure(&self, code: &'static str);
    /// Increments a counter for requests rejected by the rate limiter.
    fn inc_rate_limited(&self);
}
impl HttpMetricsSink for NopSink {
    fn observe_request_duration(&self, _route: &str, _duration_secs: f64) {}
    fn inc_requests_total(&self, _route: &str, _result: &'static str) {}
    fn inc_failure(&self, _code: &'static str) {}
    fn inc_rate_limited(&self) {}
}

/// A unified sink that implements all domain-specific traits, providing a single
/// point of implementation for metrics backends like Prometheus.
pub trait MetricsSink: ClassifyMetricsSink + HttpMetricsSink {}

// Blanket implementation to allow any type that implements all sub-traits
// to be used as a `MetricsSink`.
impl<T> MetricsSink for T where T: ClassifyMetricsSink + HttpMetricsSink {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_fall_back_to_nop() {
        // Nothing installs a sink in this test binary.
        let m = http_metrics();
        m.inc_requests_total("/classify", "ok");
        m.observe_request_duration("/classify", 0.01);
        classify_metrics().inc_tokens("odd", 3);
        assert!(format!("{:?}", m).contains("NopSink"));
    }
}
