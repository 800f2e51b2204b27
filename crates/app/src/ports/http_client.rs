//! HTTP client port: outbound requests for the HTTP action executors.

use std::future::Future;

use keyrelay_domain::error::TransportError;

/// A shared, reusable HTTP client.
///
/// Implementations return the response status code, or a
/// [`TransportError`] when no response was received at all.
pub trait HttpClient: Send + Sync {
    /// Issue a GET request to `url`.
    fn get(&self, url: &str) -> impl Future<Output = Result<u16, TransportError>> + Send;

    /// Issue a POST request to `url` with `body` as a plain-text payload.
    fn post(
        &self,
        url: &str,
        body: &str,
    ) -> impl Future<Output = Result<u16, TransportError>> + Send;
}
