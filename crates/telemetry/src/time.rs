// Path: crates/telemetry/src/time.rs
use crate::sinks::HttpMetricsSink;
use std::time::Instant;

/// Reports the elapsed time for `route` to the sink when dropped.
pub struct Timer<'a> {
    sink: &'a dyn HttpMetricsSink,
    route: &'a str,
    start: Instant,
}

impl<'a> Timer<'a> {
    pub fn new(sink: &'a dyn HttpMetricsSink, route: &'a str) -> Self {
        Self {
            sink,
            route,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer<'_> {
    fn drop(&mut self) {
        self.sink
            .observe_request_duration(self.route, self.start.elapsed().as_secs_f64());
    }
}
