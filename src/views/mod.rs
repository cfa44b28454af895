//! View models for the three interactive pages: Admin health, Chat and Resume Upload.
//!
//! Each view owns its state, calls [`ApiClient`](crate::ApiClient) and turns every
//! failure into a status the renderer can show. Nothing here returns an error.
//!
//! Every view follows `Idle -> Pending -> {Success, Failure}`. Long-running callers can
//! split an action into `begin_*` and `settle`/`finish_*` to run the request elsewhere;
//! a result only lands if its [`Ticket`] is still current, so the latest action wins
//! and nothing is applied after [`unmount`](HealthView::unmount).

mod chat;
mod health;
mod upload;

pub use chat::{ChatView, UNREACHABLE_REPLY};
pub use health::{HealthView, WAITING_TEXT};
pub use upload::{
    UploadView, STATUS_DONE, STATUS_FAILED, STATUS_NO_FILE, STATUS_UPLOADING,
};

/// Lifecycle of the last user-triggered action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Success,
    Failure(String),
}

impl Phase {
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::Pending)
    }
}

/// Identifies one in-flight action of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic action counter plus the mounted flag.
#[derive(Debug)]
pub(crate) struct Generation {
    current: u64,
    mounted: bool,
}

impl Default for Generation {
    fn default() -> Self {
        Self {
            current: 0,
            mounted: true,
        }
    }
}

impl Generation {
    pub(crate) fn issue(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    pub(crate) fn is_current(&self, ticket: Ticket) -> bool {
        self.mounted && ticket.0 == self.current
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub(crate) fn unmount(&mut self) {
        self.mounted = false;
        self.current += 1;
    }
}
