//! # keyrelay-adapter-rules-xml
//!
//! Rule document adapter using [quick-xml](https://docs.rs/quick-xml).
//!
//! ## Responsibilities
//! - Implement the `RuleRepository` port defined in `keyrelay-app::ports`
//! - Encode and decode the human-editable XML rule document
//! - Report a missing file as "no document" so the app layer can bootstrap it
//!
//! ## Dependency rule
//! Depends on `keyrelay-app` (for port traits) and `keyrelay-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod codec;
pub mod error;
pub mod repository;

pub use error::RulesXmlError;
pub use repository::XmlFileRuleRepository;
