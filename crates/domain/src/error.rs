//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`KeyRelayError`] at port boundaries.

use std::error::Error;

/// Top-level error crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum KeyRelayError {
    /// The rule configuration could not be read, decoded or written.
    #[error("storage error")]
    Storage(#[source] Box<dyn Error + Send + Sync>),

    /// A `ProcessExecute` rule could not start its program.
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

/// A process could not be started (missing executable, permission denied, …).
#[derive(Debug, thiserror::Error)]
#[error("failed to launch `{program}`")]
pub struct LaunchError {
    pub program: String,
    #[source]
    pub source: std::io::Error,
}

/// An HTTP request never produced a response.
///
/// Covers DNS failures, refused connections, timeouts, TLS errors and
/// malformed URLs alike.
#[derive(Debug, thiserror::Error)]
#[error("transport failure")]
pub struct TransportError(#[source] pub Box<dyn Error + Send + Sync>);

/// An `Action` value in a rule document did not name a known action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule action `{0}`")]
pub struct ParseActionError(pub String);
