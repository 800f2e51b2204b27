//! Outcome classification for executed rules.
//!
//! Classifications drive the reporting policy only; they never change
//! control flow.

/// HTTP status code for a successful request.
pub const STATUS_OK: u16 = 200;

/// HTTP status code reported the same way as an unreachable endpoint.
pub const STATUS_NOT_FOUND: u16 = 404;

/// Severity understood by the logging collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warn,
    Error,
    Success,
}

/// Three-way outcome bucket for one executed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The HTTP request never produced a response, or the response was
    /// `404 Not Found`.
    Unreachable,
    /// The HTTP response status was `200 OK`.
    Succeeded,
    /// Any other HTTP status, or a process that ran to completion.
    Completed,
}

impl Classification {
    /// Classify an HTTP response status code.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            STATUS_OK => Self::Succeeded,
            STATUS_NOT_FOUND => Self::Unreachable,
            _ => Self::Completed,
        }
    }

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::Unreachable => Severity::Error,
            Self::Succeeded => Severity::Success,
            Self::Completed => Severity::Info,
        }
    }

    /// Human-readable report line for the rule called `rule_name`.
    #[must_use]
    pub fn report(self, rule_name: &str) -> String {
        match self {
            Self::Unreachable => format!("Rule {rule_name} failed, got HTTP NotFound"),
            Self::Succeeded => format!("Rule {rule_name} sent, got HTTP OK"),
            Self::Completed => format!("Rule {rule_name} ran"),
        }
    }
}
