//! # keyrelay-adapter-http-reqwest
//!
//! HTTP adapter using [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `HttpClient` port defined in `keyrelay-app::ports`
//! - Own the single shared client (and its connection pool)
//! - Turn every request failure into a `TransportError`
//!
//! ## Dependency rule
//! Depends on `keyrelay-app` (for port traits) and `keyrelay-domain` (for domain types).

pub mod client;
pub mod config;
pub mod error;

pub use client::ReqwestHttpClient;
pub use config::HttpConfig;
pub use error::HttpError;
