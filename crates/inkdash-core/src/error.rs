//! Error types shared by the feed fetch path.
//!
//! A feed failure never aborts a wake cycle: the renderer substitutes
//! defaults and tags the footer banner instead. These errors exist so the
//! cycle can log *why* a feed was missing and tell a dead network apart from
//! a single misbehaving endpoint.

use thiserror_no_std::Error;

/// Why a single feed could not be turned into a parsed document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network not connected")]
    NotConnected,
    #[error("request timed out")]
    Timeout,
    #[error("DNS lookup failed")]
    Dns,
    #[error("TCP connect failed")]
    Connect,
    #[error("HTTP status {status}")]
    Http { status: u16 },
    #[error("malformed HTTP response")]
    MalformedResponse,
    #[error("malformed JSON body")]
    MalformedJson,
    #[error("response body larger than {limit} bytes")]
    BodyTooLarge { limit: usize },
}

impl FetchError {
    /// Whether this error means the device has no network at all, as opposed
    /// to one endpoint misbehaving.
    pub const fn is_connectivity(&self) -> bool {
        matches!(self, Self::NotConnected)
    }
}

/// Problems parsing a feed endpoint URL.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlError {
    #[error("only http:// URLs are supported")]
    UnsupportedScheme,
    #[error("URL has no host")]
    MissingHost,
    #[error("URL port is not a number")]
    InvalidPort,
}
