//! Outbound call and result translation.
//!
//! # Responsibilities
//! - Issue exactly one HTTP request to the built URL
//! - Attach the Content-Type and HMAC-Authentication headers
//! - Normalize transport and decode failures into an error record
//!
//! # Design Decisions
//! - The call has no timeout and is never retried; the handler awaits it
//!   to completion or transport error
//! - The downstream HTTP status code is not inspected: the body is trusted
//!   to carry its own `status` field, which the HTTP layer branches on
//! - Every failure path returns a `{error, status: 400}` JSON record so the
//!   handler has a single value shape to translate

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde_json::{json, Value};

use crate::error::RelayError;
use crate::relay::signature::HMAC_HEADER;

/// Build the normalized error record returned for any relay failure.
pub fn error_record(error: &RelayError) -> Value {
    json!({ "error": error.to_string(), "status": 400 })
}

/// Send the signed request downstream and decode the JSON response.
///
/// Returns the downstream JSON value verbatim on success, or an error
/// record on method parse failure, transport failure, or a non-JSON body.
pub async fn send_request(
    client: &Client,
    method: &str,
    url: &str,
    body: String,
    hmac_header: &str,
) -> Value {
    let method = match Method::from_bytes(method.as_bytes()) {
        Ok(m) => m,
        Err(_) => return error_record(&RelayError::Method(method.to_string())),
    };

    let response = client
        .request(method, url)
        .header(CONTENT_TYPE, "application/json")
        .header(HMAC_HEADER, hmac_header)
        .body(body)
        .send()
        .await;

    let response = match response {
        Ok(r) => r,
        Err(e) => return error_record(&RelayError::Transport(e.to_string())),
    };

    let text = match response.text().await {
        Ok(t) => t,
        Err(e) => return error_record(&RelayError::Transport(e.to_string())),
    };

    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => error_record(&RelayError::Decode(e.to_string())),
    }
}
