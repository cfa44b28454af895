//! Mock HTTP server setup for integration tests

use kamirecruit_client::{ApiClient, StatusPolicy};
use mockito::{Mock, Server, ServerGuard};

/// An address nothing listens on.
pub const UNREACHABLE_BASE: &str = "http://127.0.0.1:1";

/// Test fixture that owns a mock backend
pub struct MockBackend {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockBackend {
    pub async fn new() -> Self {
        init_tracing();
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client pointed at the mock server with the default (strict) status policy.
    pub fn client(&self) -> ApiClient {
        ApiClient::builder()
            .base_url(&self.base_url)
            .build()
            .expect("client should build")
    }

    pub fn client_with_policy(&self, policy: StatusPolicy) -> ApiClient {
        ApiClient::builder()
            .base_url(&self.base_url)
            .status_policy(policy)
            .build()
            .expect("client should build")
    }

    /// JSON response for `method path`, expected exactly once.
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create_async()
            .await
    }
}

/// Route library logs to the test writer; `RUST_LOG=kamirecruit_client=debug` shows requests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn unreachable_client() -> ApiClient {
    init_tracing();
    ApiClient::builder()
        .base_url(UNREACHABLE_BASE)
        .build()
        .expect("client should build")
}
