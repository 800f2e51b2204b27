//! Rule: one configured reaction to a trigger.
//!
//! A rule maps a trigger identifier (a "button") to exactly one
//! [`RuleAction`]. The meaning of [`Rule::endpoint`] and [`Rule::extra_data`]
//! depends on the action:
//!
//! | action | `endpoint` | `extra_data` |
//! |---|---|---|
//! | [`HttpGet`](RuleAction::HttpGet) | URL | unused |
//! | [`HttpPost`](RuleAction::HttpPost) | URL | request body |
//! | [`ProcessExecute`](RuleAction::ProcessExecute) | executable path | argument string |

use std::fmt;
use std::str::FromStr;

use crate::error::ParseActionError;

/// Closed set of side effects a rule can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RuleAction {
    #[default]
    HttpGet,
    HttpPost,
    ProcessExecute,
}

impl RuleAction {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 3] = [Self::HttpGet, Self::HttpPost, Self::ProcessExecute];

    /// Symbolic name used in rule documents.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HttpGet => "HttpGET",
            Self::HttpPost => "HttpPOST",
            Self::ProcessExecute => "Execute",
        }
    }
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}

/// A configured mapping from a trigger to an action.
///
/// Every string field defaults to empty and `action` defaults to
/// [`RuleAction::HttpGet`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rule {
    /// Free-form label, used for display and logs only.
    pub name: String,
    /// Trigger identifier, matched exactly and case-sensitively.
    pub trigger: String,
    pub action: RuleAction,
    pub endpoint: String,
    pub extra_data: String,
}

impl Rule {
    /// Create a builder for constructing a [`Rule`].
    #[must_use]
    pub fn builder() -> RuleBuilder {
        RuleBuilder::default()
    }

    /// The editable example written on first run.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::builder()
            .name("New Rule")
            .trigger("None")
            .action(RuleAction::HttpGet)
            .endpoint("https://www.example.com/")
            .extra_data(" ")
            .build()
    }

    /// Whether this rule reacts to `trigger`.
    #[must_use]
    pub fn matches(&self, trigger: &str) -> bool {
        self.trigger == trigger
    }
}

/// Step-by-step builder for [`Rule`].
#[derive(Debug, Default)]
pub struct RuleBuilder {
    rule: Rule,
}

impl RuleBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.rule.name = name.into();
        self
    }

    #[must_use]
    pub fn trigger(mut self, trigger: impl Into<String>) -> Self {
        self.rule.trigger = trigger.into();
        self
    }

    #[must_use]
    pub fn action(mut self, action: RuleAction) -> Self {
        self.rule.action = action;
        self
    }

    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.rule.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn extra_data(mut self, extra_data: impl Into<String>) -> Self {
        self.rule.extra_data = extra_data.into();
        self
    }

    /// Consume the builder and return the [`Rule`].
    ///
    /// Rules carry no invariants beyond their defaults, so building never fails.
    #[must_use]
    pub fn build(self) -> Rule {
        self.rule
    }
}
