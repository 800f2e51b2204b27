//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod http_client;
pub mod log_sink;
pub mod process_runner;
pub mod rule_repository;

pub use http_client::HttpClient;
pub use log_sink::{Console, LogSink};
pub use process_runner::{ProcessCommand, ProcessExit, ProcessRunner};
pub use rule_repository::RuleRepository;
