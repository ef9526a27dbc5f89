// Path: crates/http-gateway/src/lib.rs
#![forbid(unsafe_code)]

//! HTTP surface for the token classifier.
//!
//! `POST /classify` (and `POST /bfhl` when the legacy route is enabled)
//! accepts `{"data": [string, ...]}` and always answers 200 with a
//! [`ClassifyResponse`](classify_types::ClassifyResponse): malformed or
//! oversized bodies, and panics inside the service, produce the failure
//! envelope instead of an error status. `GET /health` and `GET /metrics`
//! complete the surface.

mod error;
mod handlers;
mod limiter;
mod request;

pub use error::AppError;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    middleware,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use classify_telemetry::http_metrics;
use classify_types::{ClassifyResponse, ConfigError, GatewayConfig, Identity};
use ipnetwork::IpNetwork;
use limiter::{rate_limit_middleware, IpLimiter};
use request::InputLimits;
use std::{any::Any, net::SocketAddr, str::FromStr, sync::Arc, time::Duration};
use tokio::sync::watch;
use tower::{
    limit::ConcurrencyLimitLayer, load_shed::LoadShedLayer, timeout::TimeoutLayer, ServiceBuilder,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as CorsAny, CorsLayer},
    trace::TraceLayer,
};

pub(crate) struct GatewayState {
    identity: Identity,
    limits: InputLimits,
}

fn trusted_proxies(config: &GatewayConfig) -> Result<Vec<IpNetwork>, ConfigError> {
    config
        .trusted_proxies
        .iter()
        .map(|s| IpNetwork::from_str(s).map_err(|_| ConfigError::InvalidCidr(s.clone())))
        .collect()
}

fn cors_layer(config: &GatewayConfig) -> Result<CorsLayer, ConfigError> {
    if config.cors_allows_any() {
        return Ok(CorsLayer::new()
            .allow_origin(CorsAny)
            .allow_methods(CorsAny)
            .allow_headers(CorsAny));
    }
    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|o| HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.clone())))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(CorsAny))
}

fn panic_response(
    identity: &Identity,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone {
    let failure = ClassifyResponse::failure(identity);
    move |err: Box<dyn Any + Send + 'static>| {
        let detail = err
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| err.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        tracing::error!(target: "http-gateway", panic = %detail, "handler panicked");
        http_metrics().inc_failure("INTERNAL_PANIC");
        Json(failure.clone()).into_response()
    }
}

/// Wraps `app` in the gateway middleware stack. The order is important:
/// `HandleErrorLayer` must wrap the fallible layers to make the service
/// infallible, and CORS sits outermost so preflights skip everything else.
///
/// The body cap is enforced by the `Bytes` extractor rather than a
/// rejecting layer, so an oversized body reaches the handler as a
/// rejection and still gets the failure envelope, with or without a
/// `Content-Length` header.
fn apply_layers(
    app: Router,
    config: &GatewayConfig,
    identity: &Identity,
) -> Result<Router, ConfigError> {
    Ok(app
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(error::map_middleware_error))
                .layer(LoadShedLayer::new())
                .layer(ConcurrencyLimitLayer::new(config.concurrency_limit.max(1)))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.request_timeout_secs.max(1),
                ))),
        )
        // These layers are infallible and can be applied outside the error-handling wrapper.
        .layer(CatchPanicLayer::custom(panic_response(identity)))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(config.body_limit_bytes()))
        .layer(cors_layer(config)?))
}

/// Builds the fully layered router for `config`.
pub fn router(config: &GatewayConfig, identity: Identity) -> Result<Router, ConfigError> {
    let state = Arc::new(GatewayState {
        identity: identity.clone(),
        limits: InputLimits::from(config),
    });

    let mut app = Router::new().route("/classify", post(handlers::classify_handler));
    if config.legacy_route {
        app = app.route("/bfhl", post(handlers::classify_handler));
    }
    if config.rate_limit_enabled() {
        let limiter = IpLimiter::new(config.rps, config.burst, Arc::new(trusted_proxies(config)?));
        app = app.route_layer(middleware::from_fn_with_state(limiter, rate_limit_middleware));
    }
    let app = app
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(classify_telemetry::http::metrics_handler))
        .fallback(handlers::not_found_handler)
        .with_state(state);

    apply_layers(app, config, &identity)
}

/// Binds `config.listen_addr` and serves until `shutdown_rx` changes.
pub async fn run_server(
    config: GatewayConfig,
    identity: Identity,
    mut shutdown_rx: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    let addr: SocketAddr = config.socket_addr()?;
    let app = router(&config, identity)?;

    tracing::info!(target: "http-gateway", "classify gateway listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        shutdown_rx.changed().await.ok();
        tracing::info!(target: "http-gateway", "shutting down gracefully");
    });

    if let Err(e) = server.await {
        tracing::error!(target: "http-gateway", error = %e, "server error");
    }

    Ok(())
}
