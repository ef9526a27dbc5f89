// Path: crates/http-gateway/src/request.rs
use classify_types::{ClassifyRequest, GatewayConfig, RequestError};

/// Size limits applied before a request reaches the classifier.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InputLimits {
    pub max_tokens: usize,
    pub max_token_len: usize,
}

impl From<&GatewayConfig> for InputLimits {
    fn from(cfg: &GatewayConfig) -> Self {
        Self {
            max_tokens: cfg.max_tokens,
            max_token_len: cfg.max_token_len,
        }
    }
}

/// Decodes a `{"data": [...]}` body and enforces the input limits.
pub(crate) fn parse_tokens(body: &[u8], limits: InputLimits) -> Result<Vec<String>, RequestError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(RequestError::EmptyBody);
    }
    let request: ClassifyRequest =
        serde_json::from_slice(body).map_err(|e| RequestError::Malformed(e.to_string()))?;

    if request.data.len() > limits.max_tokens {
        return Err(RequestError::TooManyTokens {
            limit: limits.max_tokens,
            got: request.data.len(),
        });
    }
    if let Some((index, token)) = request
        .data
        .iter()
        .enumerate()
        .find(|(_, t)| t.len() > limits.max_token_len)
    {
        return Err(RequestError::TokenTooLong {
            index,
            len: token.len(),
            limit: limits.max_token_len,
        });
    }
    Ok(request.data)
}
