//! Response envelope decoding
//!
//! The backend wraps every body as
//! `{ success, data?, message?, pagination?, error?: { code, message, details?, validation_errors? } }`.
//! [`decode`] turns a status code and raw body into either the typed payload or
//! a normalized [`ErrorInfo`].

use folio_core::{ApiResult, ErrorCode, ErrorInfo, Pagination};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Successfully decoded payload plus the optional pagination block
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub data: T,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<WireError>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct WireError {
    #[serde(default)]
    code: Option<WireCode>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<Value>,
    #[serde(default)]
    validation_errors: Option<Vec<String>>,
}

/// The backend sends its HTTP status as the code; other servers send strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireCode {
    Text(String),
    Number(i64),
}

impl WireError {
    fn into_info(self, status: u16) -> ErrorInfo {
        let code = match self.code {
            Some(WireCode::Text(code)) => ErrorCode::from_code(code),
            Some(WireCode::Number(code)) => ErrorCode::from_code(code.to_string()),
            None if is_success(status) => ErrorCode::Unknown,
            None => ErrorCode::Http,
        };

        let message = self
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        let mut details = flatten_details(self.details);
        details.extend(self.validation_errors.unwrap_or_default());

        ErrorInfo::new(code, message).with_details(details)
    }
}

fn flatten_details(details: Option<Value>) -> Vec<String> {
    match details {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(detail)) => vec![detail],
        Some(Value::Array(items)) => items
            .into_iter()
            .filter(|item| !item.is_null())
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        Some(other) => vec![other.to_string()],
    }
}

#[inline]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Normalize a response into the typed payload or an [`ErrorInfo`].
///
/// - structured `error` object (with `success` not `true`): passed through
/// - non-2xx without one: `HTTP_ERROR`
/// - `success: true`: `data` decoded as `T` (a missing `data` decodes from `null`)
/// - anything else, including an undecodable 2xx body: `UNKNOWN_ERROR`
pub fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> ApiResult<Decoded<T>> {
    let envelope: Envelope = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(_) if !is_success(status) => return Err(ErrorInfo::http(status)),
        Err(e) => return Err(ErrorInfo::unknown(format!("Malformed response body: {e}"))),
    };

    if let Some(error) = envelope.error {
        if envelope.success != Some(true) {
            return Err(error.into_info(status));
        }
    }

    if !is_success(status) {
        return Err(ErrorInfo::http(status));
    }

    if envelope.success != Some(true) {
        return Err(ErrorInfo::unknown("Server reported a failure without an error"));
    }

    let data = serde_json::from_value(envelope.data.unwrap_or(Value::Null))
        .map_err(|e| ErrorInfo::unknown(format!("Unexpected response data: {e}")))?;

    Ok(Decoded {
        data,
        pagination: envelope.pagination,
    })
}
