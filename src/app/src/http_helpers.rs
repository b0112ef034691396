//! HTTP helper functions for Crux Core
//!
//! This module extracts common HTTP response handling logic from the request
//! macros into debuggable, testable functions. Every failure is reduced to a
//! human readable reason; handlers prefix it with the failed action.

use crux_http::{http::StatusCode, HttpError, Response};

/// Base URL for the local portal API.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires absolute
/// URLs and rejects relative paths (`RelativeUrlWithoutBase` error). A web shell
/// strips this prefix before sending requests via `fetch()`, making them
/// relative to the page origin. Native shells inject a real origin instead.
pub const BASE_URL: &str = "https://relative";

/// The portal backends signal success with status 200 only.
pub fn is_response_ok(response: &Response<Vec<u8>>) -> bool {
    u16::from(response.status()) == 200
}

/// Status line reason of a failed response, e.g. `"500 Internal Server Error"`.
pub fn failure_reason(response: &Response<Vec<u8>>) -> String {
    status_reason(response.status())
}

fn status_reason(status: StatusCode) -> String {
    format!("{} {}", u16::from(status), status.canonical_reason())
}

/// Reason of a failed request.
///
/// `crux_http` reports non-2xx responses as `HttpError::Http`; those are
/// reduced to the status line like any other non-200 response.
pub fn error_reason(error: HttpError) -> String {
    match error {
        HttpError::Http { code, .. } => status_reason(code),
        e => e.to_string(),
    }
}

/// Reason reported when a request deadline elapses before its response.
pub fn timeout_reason(millis: u64) -> String {
    format!("Request timed out after {millis} ms")
}

/// Join a failed action message and its reason.
///
/// ```
/// use wifi_portal_core::http_helpers::failure_message;
/// assert_eq!(
///     failure_message("Failed to connect to the network.", "503 Service Unavailable"),
///     "Failed to connect to the network. 503 Service Unavailable"
/// );
/// ```
pub fn failure_message(action: &str, reason: &str) -> String {
    format!("{action} {reason}")
}

/// Parse JSON from response body.
///
/// Returns the failure reason if the status is not 200 or parsing fails.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: &mut Response<Vec<u8>>,
) -> Result<T, String> {
    if !is_response_ok(response) {
        return Err(failure_reason(response));
    }

    match response.take_body() {
        Some(body) => {
            serde_json::from_slice(&body).map_err(|e| format!("Invalid response body: {e}"))
        }
        None => Err("Invalid response body: empty".to_string()),
    }
}

/// Check response status only (no body parsing).
pub fn check_response_status(response: &Response<Vec<u8>>) -> Result<(), String> {
    if is_response_ok(response) {
        Ok(())
    } else {
        Err(failure_reason(response))
    }
}

/// Process HTTP response result and check status only (no JSON parsing)
pub fn process_status_response(result: crux_http::Result<Response<Vec<u8>>>) -> Result<(), String> {
    match result {
        Ok(response) => check_response_status(&response),
        Err(e) => Err(error_reason(e)),
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => parse_json_response(&mut response),
        Err(e) => Err(error_reason(e)),
    }
}
