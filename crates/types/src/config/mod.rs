// Path: crates/types/src/config/mod.rs

//! Configuration structures for the classify service.
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Identity metadata echoed in every response.
pub mod identity;
pub use identity::*;

/// Top-level service configuration, usually loaded from `classify.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// HTTP gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Static identity fields for the response envelope.
    #[serde(default)]
    pub identity: IdentityConfig,
}

impl ServiceConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Checks the fields that `serde` cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gateway.socket_addr()?;
        self.identity.validate()
    }
}

/// Settings for the HTTP gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Socket address to bind, e.g. `0.0.0.0:8000`.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Maximum accepted request body, in KiB.
    #[serde(default = "default_body_limit_kb")]
    pub body_limit_kb: usize,
    /// Maximum number of tokens in a single request.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
    /// Maximum length of a single token, in bytes.
    #[serde(default = "default_max_token_len")]
    pub max_token_len: usize,
    /// Sustained requests per second per client IP. `0` disables rate limiting.
    #[serde(default = "default_rps")]
    pub rps: u32,
    /// Burst capacity of the per-IP token bucket.
    #[serde(default = "default_burst")]
    pub burst: u32,
    /// Proxies whose `X-Forwarded-For` header is trusted, as CIDR blocks.
    #[serde(default)]
    pub trusted_proxies: Vec<String>,
    /// Per-request timeout, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Maximum number of in-flight requests before load shedding.
    #[serde(default = "default_concurrency_limit")]
    pub concurrency_limit: usize,
    /// Allowed CORS origins. `"*"` allows any origin.
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
    /// Also mount the classifier under `POST /bfhl`.
    #[serde(default = "default_legacy_route")]
    pub legacy_route: bool,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".to_string()
}
fn default_body_limit_kb() -> usize {
    256
}
fn default_max_tokens() -> usize {
    10_000
}
fn default_max_token_len() -> usize {
    4096
}
fn default_rps() -> u32 {
    50
}
fn default_burst() -> u32 {
    100
}
fn default_request_timeout_secs() -> u64 {
    2
}
fn default_concurrency_limit() -> usize {
    128
}
fn default_cors_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_legacy_route() -> bool {
    true
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            body_limit_kb: default_body_limit_kb(),
            max_tokens: default_max_tokens(),
            max_token_len: default_max_token_len(),
            rps: default_rps(),
            burst: default_burst(),
            trusted_proxies: Vec::new(),
            request_timeout_secs: default_request_timeout_secs(),
            concurrency_limit: default_concurrency_limit(),
            cors_allowed_origins: default_cors_allowed_origins(),
            legacy_route: default_legacy_route(),
        }
    }
}

impl GatewayConfig {
    /// Parses `listen_addr`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen_addr
            .parse()
            .map_err(|_| ConfigError::InvalidListenAddr(self.listen_addr.clone()))
    }

    /// Request body cap in bytes. Saturates instead of overflowing for
    /// absurd `body_limit_kb` values.
    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_kb.saturating_mul(1024)
    }

    /// Whether the per-IP rate limiter should be installed.
    pub fn rate_limit_enabled(&self) -> bool {
        self.rps > 0
    }

    /// Whether any origin is allowed by CORS.
    pub fn cors_allows_any(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = ServiceConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, ServiceConfig::default());
        assert_eq!(cfg.gateway.listen_addr, "0.0.0.0:8000");
        assert!(cfg.gateway.legacy_route);
        assert!(cfg.gateway.cors_allows_any());
    }

    #[test]
    fn partial_gateway_section_keeps_other_defaults() {
        let cfg = ServiceConfig::from_toml_str(
            r#"
            [gateway]
            listen_addr = "127.0.0.1:9000"
            rps = 0
            cors_allowed_origins = ["https://example.org"]

            [identity]
            full_name = "Jane Roe"
            dob = "01012000"
            email = "jane@example.org"
            roll_number = "21XYZ0001"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.gateway.socket_addr().unwrap().port(), 9000);
        assert!(!cfg.gateway.rate_limit_enabled());
        assert!(!cfg.gateway.cors_allows_any());
        assert_eq!(cfg.gateway.max_tokens, 10_000);
        assert_eq!(cfg.identity.identity().user_id, "jane_roe_01012000");
    }

    #[test]
    fn sample_config_file_parses() {
        let cfg =
            ServiceConfig::from_toml_str(include_str!("../../../../config/classify.toml")).unwrap();
        assert_eq!(cfg, ServiceConfig::default());
    }

    #[test]
    fn rejects_unknown_keys_and_bad_addr() {
        let err = ServiceConfig::from_toml_str("[gateway]\nlisten = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = ServiceConfig::from_toml_str("[gateway]\nlisten_addr = \"nope\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidListenAddr(_)));
    }

    #[test]
    fn body_limit_saturates() {
        let cfg = GatewayConfig {
            body_limit_kb: usize::MAX,
            ..Default::default()
        };
        assert_eq!(cfg.body_limit_bytes(), usize::MAX);
        assert_eq!(GatewayConfig::default().body_limit_bytes(), 256 * 1024);
    }
}
