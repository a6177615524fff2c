//! Resolution API: request encoding, response decoding and the HTTP client.
//!
//! Failures are split three ways so callers can react differently:
//! transport (no HTTP response at all, typically cross-origin or network
//! trouble), HTTP status, and protocol (body of an unexpected shape).

mod classify;
mod client;
mod error;
mod request;
mod response;
pub mod transport;

pub use classify::classify_curl_error;
pub use client::{ClientConfig, ResolutionClient};
pub use error::{ResolveError, TransportKind, TRANSPORT_GUIDANCE, TRANSPORT_REMEDIES};
pub use request::ResolutionRequest;
pub use response::{PickerItem, ResolutionResponse};

/// Anything that can turn a source video URL into a resolution response.
///
/// The pipeline only depends on this trait, so tests can substitute a canned
/// resolver for the HTTP client.
pub trait Resolve {
    fn resolve(&self, url: &str) -> Result<ResolutionResponse, ResolveError>;

    /// Address the resolver talks to, for messages and logs.
    fn endpoint(&self) -> &str;
}
