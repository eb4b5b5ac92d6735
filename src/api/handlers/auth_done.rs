/*
 * Responsibility
 * - /auth-done handler (preflight + token echo)
 * - origin があれば CORS ヘッダを echo する (credentials 込み)
 * - token の decode は services::token に委譲
 * - status は常に 200。失敗は JSON body の reason でのみ伝える
 */
use axum::Json;
use axum::body::Bytes;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::services::token::{self, FailureClaims};

const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS, POST";
const ALLOWED_HEADERS: &str = "Authorization, WWW-Authenticate, Content-Type";

/// CORS preflight probe. No token processing happens here.
pub async fn preflight(headers: HeaderMap) -> Response {
    tracing::debug!("accepting probable preflight request");

    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response_headers.insert(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS));

    if let Some(origin) = headers.get(header::ORIGIN) {
        response_headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
        response_headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        response_headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        response_headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
    }

    (StatusCode::OK, response_headers).into_response()
}

/// Echo the claims of the posted token (or a fail body) as JSON.
///
/// Every non-OPTIONS method lands here and is handled identically; the body
/// is read as raw bytes so a GET without content-type behaves like a POST
/// with an empty form.
pub async fn auth_done(headers: HeaderMap, body: Bytes) -> Response {
    tracing::debug!("received request at auth done handler");

    let token = form_field(&body, "token");

    // The token is attacker controlled: decode failures answer with the
    // same fail shape as a missing token, never a 5xx.
    let mut response = match token::decode(token.as_deref()) {
        Ok(claims) => Json(Value::Object(claims)).into_response(),
        Err(err) => {
            tracing::debug!(error = %err, "token rejected");
            Json(FailureClaims::from(&err)).into_response()
        }
    };

    if let Some(origin) = headers.get(header::ORIGIN) {
        let response_headers = response.headers_mut();
        response_headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
        response_headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
    }

    response
}

fn form_field(body: &[u8], name: &str) -> Option<String> {
    url::form_urlencoded::parse(body)
        .into_owned()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}
