use super::{Generation, Phase, Ticket};
use crate::types::health::{HealthSnapshot, BACKEND_UNREACHABLE};
use crate::{ApiClient, Result};
use tracing::{debug, warn};

/// Shown in the health panel before the first fetch settles.
pub const WAITING_TEXT: &str = "Waiting for response...";

/// Admin page: backend health panel with a refresh action.
#[derive(Debug)]
pub struct HealthView {
    client: ApiClient,
    snapshot: Option<HealthSnapshot>,
    phase: Phase,
    generation: Generation,
    started: bool,
}

impl HealthView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            snapshot: None,
            phase: Phase::Idle,
            generation: Generation::default(),
            started: false,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// First display of the page: fetches health once. Later calls do nothing.
    pub async fn mount(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.refresh().await;
    }

    /// Fetch health again, exactly one request per call.
    pub async fn refresh(&mut self) {
        let ticket = self.begin();
        let result = self.client.health().await;
        self.settle(ticket, result);
    }

    pub fn begin(&mut self) -> Ticket {
        self.phase = Phase::Pending;
        self.generation.issue()
    }

    /// Apply a result. Returns `false` if a newer refresh or an unmount made it stale.
    pub fn settle(&mut self, ticket: Ticket, result: Result<HealthSnapshot>) -> bool {
        if !self.generation.is_current(ticket) {
            debug!(?ticket, "dropping stale health result");
            return false;
        }
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.phase = Phase::Success;
            }
            Err(e) => {
                warn!(error = %e, "health check failed");
                self.phase = Phase::Failure(BACKEND_UNREACHABLE.to_string());
                self.snapshot = Some(HealthSnapshot::unreachable());
            }
        }
        true
    }

    pub fn unmount(&mut self) {
        self.generation.unmount();
    }

    pub fn snapshot(&self) -> Option<&HealthSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Drives the refresh button ("Checking..." while true).
    pub fn is_loading(&self) -> bool {
        self.phase.is_pending()
    }

    /// Panel text: the payload as pretty JSON, or [`WAITING_TEXT`].
    pub fn render(&self) -> String {
        self.snapshot
            .as_ref()
            .map(HealthSnapshot::render)
            .unwrap_or_else(|| WAITING_TEXT.to_string())
    }
}
