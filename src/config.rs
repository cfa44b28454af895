//! Client configuration.
//!
//! The base URL is always injected explicitly. [`ClientConfig::from_env`] exists for
//! binaries that want to read it once at startup; nothing else in the crate looks
//! at the environment.

use crate::{Error, ErrorContext, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Origin used when no base URL is configured (the backend's development address).
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";

pub const DEFAULT_CHAT_PATH: &str = "/api/chat";
pub const DEFAULT_UPLOAD_PATH: &str = "/api/upload-resume";
pub const DEFAULT_HEALTH_PATH: &str = "/api/health";

/// How the transport treats non-2xx responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Non-2xx responses become [`Error::Remote`].
    #[default]
    Strict,
    /// Every response is parsed as JSON and returned as success, whatever its status.
    Lenient,
}

impl FromStr for StatusPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(StatusPolicy::Strict),
            "lenient" => Ok(StatusPolicy::Lenient),
            other => Err(Error::configuration_with_context(
                format!("unknown status policy '{}'", other),
                ErrorContext::new()
                    .with_field_path("status_policy")
                    .with_details("expected 'strict' or 'lenient'"),
            )),
        }
    }
}

/// Settings shared by every request the client issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Option<String>,
    pub chat_path: String,
    pub upload_path: String,
    pub health_path: String,
    pub status_policy: StatusPolicy,
    /// `None` leaves the platform default in place.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            upload_path: DEFAULT_UPLOAD_PATH.to_string(),
            health_path: DEFAULT_HEALTH_PATH.to_string(),
            status_policy: StatusPolicy::default(),
            timeout: None,
            user_agent: format!("kamirecruit-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Read `KAMI_API_BASE`, `KAMI_HTTP_TIMEOUT_SECS` and `KAMI_STATUS_POLICY`.
    ///
    /// Unset or empty variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(base) = non_empty_var("KAMI_API_BASE") {
            cfg.base_url = Some(base);
        }

        if let Some(raw) = non_empty_var("KAMI_HTTP_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid timeout '{}': {}", raw, e),
                    ErrorContext::new().with_field_path("KAMI_HTTP_TIMEOUT_SECS"),
                )
            })?;
            cfg.timeout = Some(Duration::from_secs(secs)).filter(|d| !d.is_zero());
        }

        if let Some(raw) = non_empty_var("KAMI_STATUS_POLICY") {
            cfg.status_policy = raw.parse()?;
        }

        Ok(cfg)
    }

    /// The effective origin: the configured base URL, or [`DEFAULT_ORIGIN`].
    ///
    /// Trailing slashes are removed so that `<base><path>` never doubles them.
    pub fn resolved_base_url(&self) -> Result<String> {
        let raw = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_ORIGIN);

        let parsed = Url::parse(raw).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL '{}': {}", raw, e),
                ErrorContext::new().with_field_path("base_url"),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                format!("unsupported scheme '{}'", parsed.scheme()),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details("expected http or https"),
            ));
        }

        Ok(raw.trim_end_matches('/').to_string())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}
