//! # keyrelay-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RuleRepository`: read and write the durable rule document
//!   - `HttpClient`: issue GET/POST requests through one shared client
//!   - `ProcessRunner`: launch a program and relay its standard output
//!   - `LogSink`: record severity-tagged outcome messages
//!   - `Console`: receive relayed process output lines
//! - Define **driving/inbound** use-cases:
//!   - `RuleStore`: bootstrap or load the rule set at startup
//!   - `Dispatcher`: match a trigger and run each rule's action
//!
//! ## Dependency rule
//! Depends on `keyrelay-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod dispatcher;
pub mod executor;
pub mod ports;
pub mod rule_store;
