// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # Classify Types
//!
//! The foundational library for the classify service, holding the data
//! structures shared by the pure classifier, the HTTP gateway and the CLI.
//!
//! ## Architectural Role
//!
//! `classify-types` has minimal dependencies and sits underneath every other
//! crate in the workspace. The classifier produces a [`ClassificationResult`],
//! the gateway wraps it into a [`ClassifyResponse`] together with the static
//! [`Identity`] it was configured with, and both the gateway and the CLI load
//! their settings through [`ServiceConfig`].

/// The request and response envelope exchanged over HTTP.
pub mod api;
/// Service configuration (`GatewayConfig`, `IdentityConfig`).
pub mod config;
/// Error types with stable machine-readable codes.
pub mod error;
/// The output aggregate of a single classification call.
pub mod result;

pub use api::{ClassifyRequest, ClassifyResponse, HealthResponse};
pub use config::{GatewayConfig, Identity, IdentityConfig, ServiceConfig};
pub use error::{ConfigError, ErrorCode, RequestError};
pub use result::ClassificationResult;

/// A crate-wide `Result` alias defaulting to [`ConfigError`].
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
