/*
 * Responsibility
 * - JWT 形式 token の payload segment (2番目) を decode する
 * - 署名・有効期限の検証はしない (このサービスの仕様)
 * - 失敗は TokenError に分類し、fail 用 claims (FailureClaims) に変換する
 */
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

// Real-world payload segments come both padded and unpadded; accept both.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode failure taxonomy. The `Display` strings are wire format: clients
/// match on `reason`, so the first two (typo included) must stay verbatim.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("no auth token in post")]
    Missing,
    #[error("auth toke not a jwt")]
    NotAJwt,
    #[error("auth token payload is not valid base64")]
    Base64(#[from] base64::DecodeError),
    #[error("auth token payload is not valid json")]
    Json(#[from] serde_json::Error),
    #[error("auth token payload is not a json object")]
    NotAnObject,
}

/// Body returned for every rejected token: `{sub, acr, reason}`.
#[derive(Debug, Serialize)]
pub struct FailureClaims {
    pub sub: &'static str,
    pub acr: &'static str,
    pub reason: String,
}

impl From<&TokenError> for FailureClaims {
    fn from(err: &TokenError) -> Self {
        Self {
            sub: "fail",
            acr: "fail",
            reason: err.to_string(),
        }
    }
}

/// Extract the claims object from a JWT-shaped token.
///
/// Only the shape is checked: three dot-separated segments, the middle one
/// base64 for a JSON object. The signature segment is ignored.
pub fn decode(token: Option<&str>) -> Result<Map<String, Value>, TokenError> {
    use base64::Engine as _;

    let token = match token {
        Some(t) if !t.is_empty() => t,
        _ => return Err(TokenError::Missing),
    };

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::NotAJwt);
    }

    let payload = PAYLOAD_ENGINE.decode(parts[1])?;
    // from_slice also covers invalid UTF-8.
    match serde_json::from_slice(&payload)? {
        Value::Object(claims) => Ok(claims),
        _ => Err(TokenError::NotAnObject),
    }
}
