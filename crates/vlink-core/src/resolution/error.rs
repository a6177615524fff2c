//! Resolution call failures, split by how far the request got.

use std::fmt;
use thiserror::Error;

/// Explanation shown with every transport failure.
pub const TRANSPORT_GUIDANCE: &str = "Browsers block cross-origin requests unless the server sets CORS headers. \
To fix this either: (1) run the included local relay (`vlink relay`, default http://localhost:3000/proxy), \
(2) serve the page from a public host, or (3) have the API enable CORS for your origin.";

/// The three standard remedies for a cross-origin/network failure.
pub static TRANSPORT_REMEDIES: [&str; 3] = [
    "run the included local relay (`vlink relay`, default http://localhost:3000/proxy)",
    "serve the page from a public host",
    "have the API enable CORS for your origin",
];

/// Coarse kind of a transport failure, for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Connect or total timeout elapsed.
    Timeout,
    /// Connection refused/reset, DNS failure, send/recv failure.
    Connection,
    /// TLS handshake or certificate failure.
    Tls,
    Other,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransportKind::Timeout => "timeout",
            TransportKind::Connection => "connection",
            TransportKind::Tls => "tls",
            TransportKind::Other => "other",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    /// No HTTP response was obtained (refused, DNS, TLS, timeout).
    #[error("Network/CORS error when calling {endpoint}. {guidance}")]
    Transport {
        endpoint: String,
        kind: TransportKind,
        guidance: &'static str,
        #[source]
        source: curl::Error,
    },
    /// The endpoint answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Http { status: u32 },
    /// The body did not match any known response shape.
    #[error("unexpected response from resolution API: {detail}")]
    Protocol { detail: String },
}

impl ResolveError {
    pub(crate) fn transport(endpoint: &str, source: curl::Error) -> Self {
        ResolveError::Transport {
            endpoint: endpoint.to_string(),
            kind: super::classify::classify_curl_error(&source),
            guidance: TRANSPORT_GUIDANCE,
            source,
        }
    }
}
