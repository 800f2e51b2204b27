//! HTTP adapter error types.

/// Errors raised while setting up the HTTP client.
///
/// Request failures are not represented here: they surface as
/// [`TransportError`](keyrelay_domain::error::TransportError) through the port.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The underlying `reqwest` client could not be built.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),
}
