use super::request::{Method, RequestBody, RequestSpec};
use crate::config::{ClientConfig, StatusPolicy};
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, debug_span, Instrument};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Thin wrapper over `reqwest::Client` bound to one base URL.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    status_policy: StatusPolicy,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.resolved_base_url()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            status_policy: config.status_policy,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }

    /// Issue exactly one call to `<base_url><path>` and return the parsed JSON body.
    ///
    /// No retry. A non-JSON body is a [`Error::Decode`]; non-2xx handling depends on
    /// the configured [`StatusPolicy`].
    pub async fn request(&self, spec: RequestSpec) -> Result<Value> {
        if !spec.path.starts_with('/') {
            return Err(Error::validation_with_context(
                format!("path '{}' must start with '/'", spec.path),
                ErrorContext::new()
                    .with_field_path("request.path")
                    .with_source("transport"),
            ));
        }

        let url = format!("{}{}", self.base_url, spec.path);
        let request_id = uuid::Uuid::new_v4().to_string();
        let headers = build_headers(&spec, &request_id)?;

        let mut req = match spec.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        req = req.headers(headers);
        req = match spec.body {
            RequestBody::Empty => req,
            RequestBody::Json(body) => req.body(body),
            RequestBody::Multipart(form) => req.multipart(form),
        };

        let span = debug_span!("request", method = %spec.method, %url, %request_id);
        let policy = self.status_policy;

        async move {
            debug!("sending request");

            let response = req
                .send()
                .await
                .map_err(|e| Error::Transport(TransportError::Http(e)))?;

            let status = response.status();
            debug!(status = status.as_u16(), "response received");

            let bytes = response
                .bytes()
                .await
                .map_err(|e| Error::Transport(TransportError::Http(e)))?;

            if !status.is_success() && policy == StatusPolicy::Strict {
                let body = serde_json::from_slice::<Value>(&bytes).unwrap_or(Value::Null);
                let message = remote_message(&body).unwrap_or_else(|| {
                    status.canonical_reason().unwrap_or("request failed").to_string()
                });
                return Err(Error::Remote {
                    status: status.as_u16(),
                    message,
                    body,
                });
            }

            serde_json::from_slice(&bytes).map_err(|source| Error::Decode {
                status: status.as_u16(),
                source,
            })
        }
        .instrument(span)
        .await
    }
}

/// Default JSON content type, a fresh request id, then caller overrides.
///
/// Multipart requests get no `Content-Type` at all, not even a caller-supplied one.
fn build_headers(spec: &RequestSpec, request_id: &str) -> Result<HeaderMap> {
    let multipart = spec.body.is_multipart();
    let mut headers = HeaderMap::new();
    if !multipart {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    if let Ok(v) = HeaderValue::from_str(request_id) {
        headers.insert(HeaderName::from_static(REQUEST_ID_HEADER), v);
    }

    for (name, value) in &spec.headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            Error::validation_with_context(
                format!("invalid header name '{}': {}", name, e),
                ErrorContext::new().with_field_path("request.headers"),
            )
        })?;
        if multipart && name == CONTENT_TYPE {
            continue;
        }
        let value = HeaderValue::from_str(value).map_err(|e| {
            Error::validation_with_context(
                format!("invalid value for header '{}': {}", name, e),
                ErrorContext::new().with_field_path("request.headers"),
            )
        })?;
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Pull a human-readable message out of a backend error body.
///
/// FastAPI uses `{"detail": "..."}`; `message` and `error` are accepted as well.
fn remote_message(body: &Value) -> Option<String> {
    ["detail", "message", "error"]
        .iter()
        .filter_map(|key| body.get(*key))
        .find_map(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        })
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
