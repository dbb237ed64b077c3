//! Typed access to the municipios/ordenanzas data API
//!
//! The client is generic over [`HttpTransport`] so the same request logic
//! runs against `gloo-net` in the browser and an in-memory transport in tests.

mod client;
mod envelope;
mod error;
mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use client::ApiClient;
pub use envelope::ApiEnvelope;
pub use error::ApiError;
pub use transport::{ApiRequest, ApiResponse, HttpMethod, HttpTransport};
