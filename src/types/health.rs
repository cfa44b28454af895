use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const BACKEND_UNREACHABLE: &str = "Cannot reach backend";

/// Whatever `GET /api/health` returned, kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthSnapshot(pub Value);

impl HealthSnapshot {
    /// Stand-in shown when the backend cannot be reached.
    pub fn unreachable() -> Self {
        Self(serde_json::json!({
            "status": "error",
            "message": BACKEND_UNREACHABLE,
        }))
    }

    /// The `status` field, when the payload has one.
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    pub fn is_ok(&self) -> bool {
        self.status() == Some("ok")
    }

    /// Pretty-printed JSON, the form a health panel renders.
    pub fn render(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}
