//! # keyrelay-adapter-log-tracing
//!
//! Reporting adapter: implements the `LogSink` and `Console` ports.
//!
//! ## Responsibilities
//! - Forward outcome messages to [`tracing`], mapping each
//!   [`Severity`] to a tracing level
//! - Write relayed process output straight to standard output
//!
//! ## Dependency rule
//! Depends on `keyrelay-app` (for port traits) and `keyrelay-domain` (for domain types).

use std::io::Write;

use keyrelay_app::ports::{Console, LogSink};
use keyrelay_domain::outcome::Severity;

/// [`LogSink`] emitting one `tracing` event per message.
///
/// `tracing` has no success level: successes are emitted at `INFO` with an
/// `outcome = "success"` field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!("{message}"),
            Severity::Warn => tracing::warn!("{message}"),
            Severity::Error => tracing::error!("{message}"),
            Severity::Success => tracing::info!(outcome = "success", "{message}"),
        }
    }
}

/// [`Console`] writing each line to standard output as it arrives.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout must not abort dispatch.
        let _ = writeln!(stdout, "{line}").and_then(|()| stdout.flush());
    }
}
