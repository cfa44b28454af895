//! Typed client for the KAMIRecruit backend.
//!
//! Keep the public surface small: one client, one builder.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;

pub use builder::ApiClientBuilder;
pub use core::ApiClient;
