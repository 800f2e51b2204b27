//! Rule store: produces a ready-to-use [`RuleSet`] at startup.
//!
//! On first run the store writes an editable placeholder document. On later
//! runs it loads the document wholesale; a document that cannot be decoded
//! disables dispatch (empty rule set) instead of aborting the process.

use keyrelay_domain::error::KeyRelayError;
use keyrelay_domain::outcome::Severity;
use keyrelay_domain::rule_set::RuleSet;

use crate::ports::{LogSink, RuleRepository};

/// Startup use-case owning access to the durable rule document.
pub struct RuleStore<R, L> {
    repo: R,
    log: L,
}

impl<R, L> RuleStore<R, L>
where
    R: RuleRepository,
    L: LogSink,
{
    pub fn new(repo: R, log: L) -> Self {
        Self { repo, log }
    }

    /// Bootstrap or load the rule set.
    ///
    /// - No stored document: persist and return [`RuleSet::bootstrap`].
    /// - Undecodable document: report one error and return an empty set.
    /// - Otherwise: report one notice per loaded rule and return the set.
    ///
    /// # Errors
    ///
    /// Returns [`KeyRelayError::Storage`] only when the bootstrap document
    /// cannot be written.
    pub async fn initialize(&self) -> Result<RuleSet, KeyRelayError> {
        self.log
            .log(Severity::Info, "Rule store running, loading rules...");

        match self.repo.load().await {
            Ok(None) => self.bootstrap().await,
            Ok(Some(rules)) => {
                for rule in &rules {
                    self.log.log(
                        Severity::Info,
                        &format!(
                            "Loaded rule \"{}\" from {} for button \"{}\"",
                            rule.name,
                            self.repo.location(),
                            rule.trigger
                        ),
                    );
                }
                Ok(rules)
            }
            Err(err) => {
                tracing::debug!(error = ?err, "rule document rejected");
                self.log.log(
                    Severity::Error,
                    &format!(
                        "Couldn't load rules from {}, no actions will be taken.",
                        self.repo.location()
                    ),
                );
                Ok(RuleSet::new())
            }
        }
    }

    /// Write `rules` back in the canonical document format.
    ///
    /// # Errors
    ///
    /// Returns [`KeyRelayError::Storage`] when the document cannot be written.
    pub async fn persist(&self, rules: &RuleSet) -> Result<(), KeyRelayError> {
        self.repo.save(rules).await
    }

    async fn bootstrap(&self) -> Result<RuleSet, KeyRelayError> {
        let location = self.repo.location();
        self.log.log(
            Severity::Warn,
            &format!("{location} was not found, generating blank..."),
        );
        let rules = RuleSet::bootstrap();
        self.persist(&rules).await?;
        self.log.log(
            Severity::Info,
            &format!("Generated new {location}, please configure keyrelay rules and restart"),
        );
        Ok(rules)
    }
}
