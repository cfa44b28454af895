use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Determinate `{ok, data, error}` shape handed to consumers.
///
/// Built from any call result, so a consumer never sees an unhandled failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub ok: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            data,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: Value::Null,
            error: Some(error.into()),
        }
    }
}

impl From<crate::Result<Value>> for ResponseEnvelope {
    fn from(result: crate::Result<Value>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            // Keep the backend's body so callers can still inspect it.
            Err(crate::Error::Remote { message, body, .. }) => Self {
                ok: false,
                data: body,
                error: Some(message),
            },
            Err(e) => Self::failure(e.to_string()),
        }
    }
}
