//! # keyrelay-domain
//!
//! Pure domain model for the keyrelay action dispatcher.
//!
//! ## Responsibilities
//! - Define **Rules** (trigger → action mappings) and the closed set of
//!   [`RuleAction`](rule::RuleAction) variants
//! - Define the ordered **`RuleSet`** and its exact-match lookup
//! - Define the three-way outcome **Classification** and the log
//!   **Severity** it maps to
//! - Split process argument strings into argv
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod args;
pub mod error;
pub mod outcome;
pub mod rule;
pub mod rule_set;
