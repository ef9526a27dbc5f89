// Path: crates/types/src/error/mod.rs
//! Error types for the classify service.
//!
//! The classifier itself is total over its input and never fails; these
//! errors belong to the collaborators around it.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Reasons an inbound classification request is rejected before it reaches
/// the classifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The request carried no body at all.
    #[error("Request body is empty")]
    EmptyBody,
    /// The body was not a JSON object with a `data` array of strings.
    #[error("Malformed request body: {0}")]
    Malformed(String),
    /// The `data` array is longer than the configured limit.
    #[error("Too many tokens: {got} exceeds the limit of {limit}")]
    TooManyTokens {
        /// The configured maximum.
        limit: usize,
        /// The number of tokens received.
        got: usize,
    },
    /// A single token is longer than the configured limit.
    #[error("Token at index {index} is {len} bytes, exceeding the limit of {limit}")]
    TokenTooLong {
        /// Position of the offending token.
        index: usize,
        /// Its length in bytes.
        len: usize,
        /// The configured maximum.
        limit: usize,
    },
}

impl ErrorCode for RequestError {
    fn code(&self) -> &'static str {
        match self {
            Self::EmptyBody => "REQUEST_EMPTY_BODY",
            Self::Malformed(_) => "REQUEST_MALFORMED",
            Self::TooManyTokens { .. } => "REQUEST_TOO_MANY_TOKENS",
            Self::TokenTooLong { .. } => "REQUEST_TOKEN_TOO_LONG",
        }
    }
}

/// Errors raised while loading or validating service configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid TOML for the expected schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// `listen_addr` is not a valid socket address.
    #[error("Invalid listen address '{0}'")]
    InvalidListenAddr(String),
    /// An entry of `trusted_proxies` is not a valid CIDR block.
    #[error("Invalid trusted proxy CIDR '{0}'")]
    InvalidCidr(String),
    /// An entry of `cors_allowed_origins` is not a valid header value.
    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),
    /// The identity block is incomplete or malformed.
    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "CONFIG_IO",
            Self::Parse(_) => "CONFIG_PARSE",
            Self::InvalidListenAddr(_) => "CONFIG_INVALID_LISTEN_ADDR",
            Self::InvalidCidr(_) => "CONFIG_INVALID_CIDR",
            Self::InvalidOrigin(_) => "CONFIG_INVALID_ORIGIN",
            Self::InvalidIdentity(_) => "CONFIG_INVALID_IDENTITY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_codes_are_stable() {
        assert_eq!(RequestError::EmptyBody.code(), "REQUEST_EMPTY_BODY");
        assert_eq!(
            RequestError::TooManyTokens { limit: 2, got: 3 }.code(),
            "REQUEST_TOO_MANY_TOKENS"
        );
        let e = RequestError::TokenTooLong {
            index: 4,
            len: 10,
            limit: 8,
        };
        assert_eq!(
            e.to_string(),
            "Token at index 4 is 10 bytes, exceeding the limit of 8"
        );
    }
}
