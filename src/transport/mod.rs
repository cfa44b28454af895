//! HTTP transport: one request in, one parsed JSON body out.

mod http;
mod request;

pub use http::{HttpTransport, TransportError, REQUEST_ID_HEADER};
pub use request::{Method, RequestBody, RequestSpec};
