// Path: crates/types/src/config/identity.rs
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Identity fields as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentityConfig {
    /// Full name; lower-cased with spaces replaced by `_` in `user_id`.
    pub full_name: String,
    /// Date of birth as `ddmmyyyy`.
    pub dob: String,
    /// Contact email.
    pub email: String,
    /// Roll number.
    pub roll_number: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            full_name: "john_doe".to_string(),
            dob: "17091999".to_string(),
            email: "john@xyz.com".to_string(),
            roll_number: "ABCD123".to_string(),
        }
    }
}

impl IdentityConfig {
    /// Rejects empty fields and a `dob` that is not eight ASCII digits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.full_name.trim().is_empty() {
            return Err(ConfigError::InvalidIdentity("full_name is empty".into()));
        }
        if self.dob.len() != 8 || !self.dob.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::InvalidIdentity(format!(
                "dob '{}' must be ddmmyyyy",
                self.dob
            )));
        }
        if self.email.trim().is_empty() {
            return Err(ConfigError::InvalidIdentity("email is empty".into()));
        }
        if self.roll_number.trim().is_empty() {
            return Err(ConfigError::InvalidIdentity("roll_number is empty".into()));
        }
        Ok(())
    }

    /// Derives the resolved identity echoed in responses.
    pub fn identity(&self) -> Identity {
        let name = self
            .full_name
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        Identity {
            user_id: format!("{}_{}", name, self.dob),
            email: self.email.clone(),
            roll_number: self.roll_number.clone(),
        }
    }
}

/// Resolved identity metadata, injected into the response builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// `{full_name}_{ddmmyyyy}`.
    pub user_id: String,
    /// Contact email.
    pub email: String,
    /// Roll number.
    pub roll_number: String,
}

impl Default for Identity {
    fn default() -> Self {
        IdentityConfig::default().identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_user_id() {
        assert_eq!(Identity::default().user_id, "john_doe_17091999");
    }

    #[test]
    fn dob_must_be_eight_digits() {
        let cfg = IdentityConfig {
            dob: "1709199".into(),
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidIdentity(_))
        ));
    }
}
