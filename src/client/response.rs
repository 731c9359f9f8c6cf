use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::error::HarnessError;

/// Status, headers and decoded body of one response. Read-only once built.
#[derive(Debug, Clone)]
pub struct ResponseSnapshot {
    status: u16,
    headers: HeaderMap,
    body: Option<Value>,
}

impl ResponseSnapshot {
    /// Build a snapshot from raw response parts.
    ///
    /// An empty (or whitespace-only) body decodes to `None`. Any other body
    /// must be valid JSON, otherwise `JsonDecode` is returned and no snapshot
    /// exists to assert against.
    pub fn from_parts(status: u16, headers: HeaderMap, bytes: &[u8]) -> Result<Self, HarnessError> {
        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            Some(serde_json::from_slice(bytes).map_err(HarnessError::JsonDecode)?)
        };
        Ok(Self { status, headers, body })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Body as a JSON value; `Null` when the response had no body.
    pub fn json(&self) -> &Value {
        self.body.as_ref().unwrap_or(&Value::Null)
    }

    /// Look up a body field by JSON Pointer (e.g. `/data/0/first_name`).
    pub fn field(&self, pointer: &str) -> Option<&Value> {
        self.body.as_ref().and_then(|body| body.pointer(pointer))
    }
}
