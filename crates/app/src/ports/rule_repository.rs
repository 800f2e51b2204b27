//! Rule repository port: durable storage for the rule document.

use std::future::Future;

use keyrelay_domain::error::KeyRelayError;
use keyrelay_domain::rule_set::RuleSet;

/// Reads and writes the persisted [`RuleSet`].
pub trait RuleRepository: Send + Sync {
    /// Human-readable location of the document, used in log messages.
    fn location(&self) -> &str;

    /// Load the stored rule set.
    ///
    /// Returns `Ok(None)` when no backing document exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`KeyRelayError::Storage`] when the document exists but cannot
    /// be read or decoded.
    fn load(&self) -> impl Future<Output = Result<Option<RuleSet>, KeyRelayError>> + Send;

    /// Replace the stored document with `rules`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyRelayError::Storage`] when the document cannot be written.
    fn save(&self, rules: &RuleSet) -> impl Future<Output = Result<(), KeyRelayError>> + Send;
}
