//! HTTP response handling helpers shared by the request macros.
//!
//! Two failure families exist (and both land on the same user-visible error
//! path, with different text):
//! - transport failures (request error, non-2xx, malformed body) become
//!   `"{label} error: ..."`;
//! - application failures (`success:false` in the DTU's response envelope)
//!   become `"{label} failed: {reason}"`.

use crux_http::Response;

use crate::types::DeviceAck;

/// Base URL for DTU API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The UI shell strips this prefix before sending requests via `fetch()`,
/// making them relative to the device origin.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use mypvlog_setup_core::http_helpers::build_url;
/// let url = build_url("/api/wifi/scan");
/// assert_eq!(url, "https://relative/api/wifi/scan");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Transport-level error message for a non-2xx response.
pub fn extract_error_message(label: &str, response: &mut Response<Vec<u8>>) -> String {
    let status = response.status().to_string();

    match response.take_body() {
        Some(body) if !body.is_empty() => match String::from_utf8(body) {
            Ok(msg) => format!("{label} error: HTTP {status}: {msg}"),
            Err(_) => format!("{label} error: HTTP {status}"),
        },
        _ => format!("{label} error: HTTP {status}"),
    }
}

/// Transport-level error message for a request that did not complete.
pub fn map_transport_error(label: &str, error: crux_http::HttpError) -> String {
    format!("{label} error: {error}")
}

/// Parse JSON from a response body.
///
/// Non-2xx responses and malformed bodies are transport-level failures.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    label: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, String> {
    if !is_response_success(response) {
        return Err(extract_error_message(label, response));
    }

    match response.take_body() {
        Some(body) => serde_json::from_slice(&body)
            .map_err(|e| format!("{label} error: invalid response: {e}")),
        None => Err(format!("{label} error: empty response body")),
    }
}

/// Process an HTTP response result and parse a JSON payload.
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    label: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => parse_json_response(label, &mut response),
        Err(e) => Err(map_transport_error(label, e)),
    }
}

/// Process a response wrapped in the DTU's `{success, error}` envelope.
pub fn process_ack_response(
    label: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), String> {
    process_json_response::<DeviceAck>(label, result).and_then(|ack| ack_to_result(label, ack))
}

/// Collapse a decoded ack envelope into a result.
pub fn ack_to_result(label: &str, ack: DeviceAck) -> Result<(), String> {
    if ack.success {
        Ok(())
    } else {
        Err(format!(
            "{label} failed: {}",
            ack.error.unwrap_or_else(|| "unknown error".to_string())
        ))
    }
}

// Note: Unit tests involving crux_http::Response are not included because it
// has a private constructor. Response decoding is covered through the update
// handler tests; the pure helpers are tested below.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_success() {
        let ack = DeviceAck {
            success: true,
            error: None,
        };
        assert_eq!(ack_to_result("WiFi connection", ack), Ok(()));
    }

    #[test]
    fn ack_failure_uses_failed_prefix() {
        let ack = DeviceAck {
            success: false,
            error: Some("bad password".to_string()),
        };
        assert_eq!(
            ack_to_result("WiFi connection", ack),
            Err("WiFi connection failed: bad password".to_string())
        );
    }

    #[test]
    fn ack_failure_without_reason() {
        let ack = DeviceAck::default();
        assert_eq!(
            ack_to_result("MQTT configuration", ack),
            Err("MQTT configuration failed: unknown error".to_string())
        );
    }
}
