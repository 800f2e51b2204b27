//! Rule document error types.

use keyrelay_domain::error::{KeyRelayError, ParseActionError};

/// Errors raised while reading, decoding, encoding or writing a rule document.
#[derive(Debug, thiserror::Error)]
pub enum RulesXmlError {
    /// The document file could not be read or written.
    #[error("rule document I/O failed")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed XML.
    #[error("malformed XML")]
    Xml(#[from] quick_xml::Error),

    /// An `Action` element named an unknown action.
    #[error("invalid rule action")]
    Action(#[from] ParseActionError),

    /// The document contains no element at all.
    #[error("document has no root element")]
    MissingRoot,

    /// The top-level element is not the expected root.
    #[error("expected root element `{expected}`, found `{found}`")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    /// The document ended before an element was closed.
    #[error("document ends inside element `{0}`")]
    Truncated(String),

    /// The encoder produced bytes that are not UTF-8.
    #[error("encoded document is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl From<RulesXmlError> for KeyRelayError {
    fn from(err: RulesXmlError) -> Self {
        Self::Storage(Box::new(err))
    }
}
