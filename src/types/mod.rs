//! Wire and view types for the KAMIRecruit backend.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ChatRequest`] / [`ChatReply`] | `POST /api/chat` body and response |
//! | [`ChatMessage`] | One line of the chat transcript |
//! | [`ResumeFile`] / [`SkillsResponse`] | Resume upload input and response |
//! | [`HealthSnapshot`] | Verbatim `GET /api/health` payload |
//! | [`ResponseEnvelope`] | Determinate `{ok, data, error}` shape for any call |

pub mod chat;
pub mod envelope;
pub mod health;
pub mod resume;

pub use chat::{ChatMessage, ChatReply, ChatRequest, Sender, NO_REPLY_PLACEHOLDER};
pub use envelope::ResponseEnvelope;
pub use health::HealthSnapshot;
pub use resume::{ResumeFile, SkillsResponse};
