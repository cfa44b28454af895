use crate::config::ClientConfig;
use crate::transport::{HttpTransport, RequestSpec};
use crate::types::{ChatReply, ChatRequest, HealthSnapshot, ResponseEnvelope, ResumeFile, SkillsResponse};
use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Typed access to the backend. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) transport: HttpTransport,
    pub(crate) config: Arc<ClientConfig>,
}

impl ApiClient {
    pub fn builder() -> crate::client::ApiClientBuilder {
        crate::client::ApiClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue an arbitrary request through the transport.
    pub async fn request(&self, spec: RequestSpec) -> Result<Value> {
        self.transport.request(spec).await
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        self.transport.request(RequestSpec::get(path)).await
    }

    /// Serialize `body` to JSON and POST it.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let body = serde_json::to_string(body)?;
        self.transport
            .request(RequestSpec::post_json(path, body))
            .await
    }

    /// Same as [`get`](Self::get), folded into a [`ResponseEnvelope`].
    pub async fn get_envelope(&self, path: &str) -> ResponseEnvelope {
        self.get(path).await.into()
    }

    /// Same as [`post`](Self::post), folded into a [`ResponseEnvelope`].
    pub async fn post_envelope<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ResponseEnvelope {
        self.post(path, body).await.into()
    }

    pub async fn chat_with_ai(&self, message: &str) -> Result<ChatReply> {
        let value = self
            .post(&self.config.chat_path, &ChatRequest::new(message))
            .await?;
        Ok(decode_tolerant(value))
    }

    /// Upload one resume as multipart field `file`. No `Content-Type` is set by hand.
    pub async fn upload_resume(&self, file: ResumeFile) -> Result<SkillsResponse> {
        let form = file.into_form()?;
        let value = self
            .transport
            .request(RequestSpec::post_multipart(self.config.upload_path.clone(), form))
            .await?;
        Ok(decode_tolerant(value))
    }

    pub async fn health(&self) -> Result<HealthSnapshot> {
        Ok(HealthSnapshot(self.get(&self.config.health_path).await?))
    }
}

/// Missing fields fall back to their defaults; a body of the wrong shape
/// (e.g. a chat response that is not an object) also falls back instead of failing.
fn decode_tolerant<T: DeserializeOwned + Default>(value: Value) -> T {
    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "response did not match expected shape, using defaults");
        T::default()
    })
}
