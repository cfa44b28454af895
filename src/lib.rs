//! # kamirecruit-client
//!
//! Client-side API access layer for the KAMIRecruit talent platform.
//!
//! ## Overview
//!
//! The crate talks to the KAMIRecruit backend over HTTP and keeps the state of the
//! three interactive pages of the front-end:
//!
//! - **Transport**: [`transport::HttpTransport`] issues one request against an injected
//!   base URL and returns the parsed JSON body.
//! - **Typed wrappers**: [`ApiClient`] offers `get`, `post`, `chat_with_ai`,
//!   `upload_resume` and `health`.
//! - **Views**: [`views::ChatView`], [`views::UploadView`] and [`views::HealthView`] hold
//!   page state and turn every failure into something a renderer can show.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kamirecruit_client::{ApiClient, views::ChatView};
//!
//! #[tokio::main]
//! async fn main() -> kamirecruit_client::Result<()> {
//!     let client = ApiClient::builder()
//!         .base_url("http://127.0.0.1:8000")
//!         .build()?;
//!
//!     let mut chat = ChatView::new(client);
//!     chat.send_message("Which NGOs need data analysts?").await;
//!     for line in chat.messages() {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Base URL, routes, status policy, timeout |
//! | [`transport`] | Request descriptor and the HTTP transport |
//! | [`client`] | Typed operation wrappers and builder |
//! | [`types`] | Wire types and the response envelope |
//! | [`views`] | Chat, Upload and Admin health view models |

pub mod client;
pub mod config;
pub mod transport;
pub mod types;
pub mod views;

pub use client::{ApiClient, ApiClientBuilder};
pub use config::{ClientConfig, StatusPolicy};
pub use types::{
    ChatMessage, ChatReply, HealthSnapshot, ResponseEnvelope, ResumeFile, Sender,
    SkillsResponse,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
