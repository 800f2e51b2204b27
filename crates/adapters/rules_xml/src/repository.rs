//! File-backed implementation of [`RuleRepository`].

use std::path::PathBuf;

use keyrelay_app::ports::RuleRepository;
use keyrelay_domain::error::KeyRelayError;
use keyrelay_domain::rule_set::RuleSet;

use crate::codec;
use crate::error::RulesXmlError;

/// Stores the rule set as one XML document on disk.
pub struct XmlFileRuleRepository {
    path: PathBuf,
    location: String,
}

impl XmlFileRuleRepository {
    /// Create a repository backed by the file at `path`.
    ///
    /// The file does not need to exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

impl RuleRepository for XmlFileRuleRepository {
    fn location(&self) -> &str {
        &self.location
    }

    async fn load(&self) -> Result<Option<RuleSet>, KeyRelayError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(RulesXmlError::Io(err).into()),
        };
        let rules = codec::decode(&content)?;
        tracing::debug!(path = %self.location, count = rules.len(), "decoded rule document");
        Ok(Some(rules))
    }

    async fn save(&self, rules: &RuleSet) -> Result<(), KeyRelayError> {
        let xml = codec::encode(rules)?;
        tokio::fs::write(&self.path, xml)
            .await
            .map_err(RulesXmlError::from)?;
        Ok(())
    }
}
