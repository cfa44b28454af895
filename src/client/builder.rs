use crate::client::core::ApiClient;
use crate::config::{ClientConfig, StatusPolicy};
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`ApiClient`].
///
/// The base URL is injected here; the client never looks it up on its own.
#[derive(Debug, Clone, Default)]
pub struct ApiClientBuilder {
    config: ClientConfig,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. [`ClientConfig::from_env`].
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    pub fn chat_path(mut self, path: impl Into<String>) -> Self {
        self.config.chat_path = path.into();
        self
    }

    /// Override the upload route, e.g. the legacy `/process_resume`.
    pub fn upload_path(mut self, path: impl Into<String>) -> Self {
        self.config.upload_path = path.into();
        self
    }

    pub fn health_path(mut self, path: impl Into<String>) -> Self {
        self.config.health_path = path.into();
        self
    }

    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.config.status_policy = policy;
        self
    }

    /// Per-request timeout. Without one the platform default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        for (field, path) in [
            ("chat_path", &self.config.chat_path),
            ("upload_path", &self.config.upload_path),
            ("health_path", &self.config.health_path),
        ] {
            if !path.starts_with('/') {
                return Err(Error::configuration_with_context(
                    format!("{} '{}' must start with '/'", field, path),
                    ErrorContext::new().with_field_path(field),
                ));
            }
        }

        let transport = HttpTransport::new(&self.config)?;
        Ok(ApiClient {
            transport,
            config: Arc::new(self.config),
        })
    }
}
