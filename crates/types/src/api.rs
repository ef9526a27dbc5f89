// Path: crates/types/src/api.rs
use crate::config::Identity;
use crate::result::ClassificationResult;
use serde::{Deserialize, Serialize};

/// The body accepted by `POST /classify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// The ordered list of tokens to classify.
    pub data: Vec<String>,
}

/// The outward-facing response: a success flag, the configured identity
/// metadata, and the flattened classification fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// `false` when the request could not be processed.
    pub is_success: bool,
    /// `{full_name}_{ddmmyyyy}`.
    pub user_id: String,
    /// Contact email.
    pub email: String,
    /// Roll number.
    pub roll_number: String,
    /// The classification output; all-empty with `sum == "0"` on failure.
    #[serde(flatten)]
    pub result: ClassificationResult,
}

impl ClassifyResponse {
    /// Wraps a successful classification.
    pub fn success(identity: &Identity, result: ClassificationResult) -> Self {
        Self {
            is_success: true,
            user_id: identity.user_id.clone(),
            email: identity.email.clone(),
            roll_number: identity.roll_number.clone(),
            result,
        }
    }

    /// The uniform failure envelope: identity fields plus default classification.
    pub fn failure(identity: &Identity) -> Self {
        Self {
            is_success: false,
            ..Self::success(identity, ClassificationResult::default())
        }
    }
}

/// Body of the `GET /health` liveness probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process is serving.
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            user_id: "john_doe_17091999".into(),
            email: "john@xyz.com".into(),
            roll_number: "ABCD123".into(),
        }
    }

    #[test]
    fn response_flattens_result_fields() {
        let resp = ClassifyResponse::success(
            &identity(),
            ClassificationResult {
                sum: "339".into(),
                concat_string: "Ra".into(),
                ..Default::default()
            },
        );
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["is_success"], true);
        assert_eq!(v["user_id"], "john_doe_17091999");
        assert_eq!(v["sum"], "339");
        assert_eq!(v["concat_string"], "Ra");
        assert!(v.get("result").is_none());
    }

    #[test]
    fn failure_envelope_is_empty() {
        let resp = ClassifyResponse::failure(&identity());
        assert!(!resp.is_success);
        assert_eq!(resp.roll_number, "ABCD123");
        assert_eq!(resp.result, ClassificationResult::default());
    }

    #[test]
    fn request_rejects_non_string_elements() {
        let ok: ClassifyRequest = serde_json::from_str(r#"{"data":["a","1"]}"#).unwrap();
        assert_eq!(ok.data, vec!["a", "1"]);
        assert!(serde_json::from_str::<ClassifyRequest>(r#"{"data":[1,2]}"#).is_err());
        assert!(serde_json::from_str::<ClassifyRequest>(r#"{"data":"a"}"#).is_err());
        assert!(serde_json::from_str::<ClassifyRequest>(r#"{}"#).is_err());
    }
}
