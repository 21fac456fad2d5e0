//! The uniform result record produced by every API call.

use serde_json::{Value, json};

/// Outcome of one request: success flag, HTTP status, and JSON body.
///
/// `status` is `0` when no HTTP response was obtained or its body was
/// not JSON; `data` then holds `{"error": <message>}`.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestResult {
    pub ok: bool,
    pub status: u16,
    pub data: Value,
}

impl RequestResult {
    /// Result for a received JSON response. `ok` iff the status is 2xx.
    pub fn from_response(status: u16, data: Value) -> Self {
        Self {
            ok: (200..300).contains(&status),
            status,
            data,
        }
    }

    /// Synthetic result for a transport or parse failure.
    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            status: 0,
            data: json!({ "error": message.into() }),
        }
    }

    /// The `error` field of the body, when it is a string.
    pub fn error_message(&self) -> Option<&str> {
        self.data.get("error").and_then(Value::as_str)
    }
}
