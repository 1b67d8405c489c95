use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Result};

fn default_success() -> bool {
    true
}

/// Wrapper the roster API puts around every payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    /// Missing on some responses; treated as success
    #[serde(default = "default_success")]
    pub success: bool,
    /// Opaque error object, usually `{name, message}`
    #[serde(default)]
    pub error: Option<Value>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    /// Unwraps the payload, turning an unsuccessful envelope into `Rejected`.
    pub fn into_data(self) -> Result<T> {
        if !self.success {
            return Err(ApiError::Rejected(
                error_message(self.error.as_ref()).unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        self.data.ok_or(ApiError::MissingData)
    }
}

/// Pulls a readable message out of the API's error value.
pub fn error_message(error: Option<&Value>) -> Option<String> {
    match error? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| Some(Value::Object(map.clone()).to_string())),
        other => Some(other.to_string()),
    }
}
