//! Thin JSON-over-HTTP wrapper used by the suite.
mod client;
mod method;
mod transport;


pub use client::{ApiClient, USER_AGENT};
pub use method::HttpMethod;
pub use transport::{ApiRequest, ApiResponse, ApiTransport};
