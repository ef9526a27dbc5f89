// Path: crates/http-gateway/src/limiter.rs
//! Per-client token buckets for the classification routes.
//!
//! A bucket that has refilled to `burst` carries no state worth keeping, so
//! every [`SWEEP_EVERY`] admissions the table drops such buckets. Memory is
//! bounded by the clients seen within one refill window, not by every
//! address (or forged `X-Forwarded-For` value) ever seen.

use crate::error::AppError;
use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use classify_telemetry::http_metrics;
use dashmap::DashMap;
use ipnetwork::IpNetwork;
use std::{
    net::{IpAddr, SocketAddr},
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Instant,
};

const SWEEP_EVERY: u64 = 1024;

#[derive(Clone, Copy)]
struct Bucket {
    tokens: f64,
    refilled_at: Instant,
}

impl Bucket {
    fn level_at(&self, now: Instant, rate: f64, capacity: f64) -> f64 {
        let idle = now.saturating_duration_since(self.refilled_at).as_secs_f64();
        (self.tokens + idle * rate).min(capacity)
    }
}

/// Shared rate limiter state. Cheap to clone.
#[derive(Clone)]
pub(crate) struct IpLimiter {
    table: Arc<DashMap<IpAddr, Bucket>>,
    admissions: Arc<AtomicU64>,
    rate: f64,
    capacity: f64,
    proxies: Arc<Vec<IpNetwork>>,
}

impl IpLimiter {
    pub(crate) fn new(rps: u32, burst: u32, proxies: Arc<Vec<IpNetwork>>) -> Self {
        Self {
            table: Arc::new(DashMap::new()),
            admissions: Arc::new(AtomicU64::new(0)),
            rate: f64::from(rps),
            capacity: f64::from(burst.max(1)),
            proxies,
        }
    }

    fn behind_trusted_proxy(&self, peer: IpAddr) -> bool {
        self.proxies.iter().any(|net| net.contains(peer))
    }

    /// Key for `req`: the peer address, or the leftmost `X-Forwarded-For`
    /// entry when the peer is a trusted proxy. Requests without connection
    /// info (in-process tests) share the loopback bucket.
    pub(crate) fn client_ip<B>(&self, req: &Request<B>) -> IpAddr {
        let Some(ConnectInfo(peer)) = req.extensions().get::<ConnectInfo<SocketAddr>>() else {
            return IpAddr::from([127, 0, 0, 1]);
        };
        let peer = peer.ip();
        if !self.behind_trusted_proxy(peer) {
            return peer;
        }
        req.headers()
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(|first| first.trim().parse().ok())
            .unwrap_or(peer)
    }

    pub(crate) fn allow<B>(&self, req: &Request<B>) -> bool {
        self.admit(self.client_ip(req), Instant::now())
    }

    fn admit(&self, ip: IpAddr, now: Instant) -> bool {
        let granted = {
            let mut bucket = self.table.entry(ip).or_insert(Bucket {
                tokens: self.capacity,
                refilled_at: now,
            });
            let level = bucket.level_at(now, self.rate, self.capacity);
            bucket.refilled_at = now;
            if level >= 1.0 {
                bucket.tokens = level - 1.0;
                true
            } else {
                bucket.tokens = level;
                false
            }
        };
        // The entry guard is released above; retain would deadlock on it.
        if self.admissions.fetch_add(1, Ordering::Relaxed) % SWEEP_EVERY == SWEEP_EVERY - 1 {
            self.sweep(now);
        }
        granted
    }

    /// Drops every bucket that has refilled to capacity by `now`.
    fn sweep(&self, now: Instant) {
        let before = self.table.len();
        self.table
            .retain(|_, b| b.level_at(now, self.rate, self.capacity) < self.capacity);
        tracing::trace!(
            target: "http-gateway",
            before,
            after = self.table.len(),
            "swept idle rate limit buckets"
        );
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.table.len()
    }
}

pub(crate) async fn rate_limit_middleware(
    State(limiter): State<IpLimiter>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if limiter.allow(&req) {
        return next.run(req).await;
    }
    http_metrics().inc_rate_limited();
    tracing::debug!(target: "http-gateway", ip = %limiter.client_ip(&req), "rate limited");
    AppError::TooManyRequests.into_response()
}
