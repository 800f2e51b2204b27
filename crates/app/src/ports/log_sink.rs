//! Reporting ports: the logging collaborator and the console that receives
//! relayed process output.

use std::sync::Arc;

use keyrelay_domain::outcome::Severity;

/// Records a human-readable message at a given [`Severity`].
pub trait LogSink: Send + Sync {
    fn log(&self, severity: Severity, message: &str);
}

/// Receives process output lines as they arrive.
pub trait Console: Send + Sync {
    fn write_line(&self, line: &str);
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn log(&self, severity: Severity, message: &str) {
        (**self).log(severity, message);
    }
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn log(&self, severity: Severity, message: &str) {
        (**self).log(severity, message);
    }
}

impl<T: Console + ?Sized> Console for &T {
    fn write_line(&self, line: &str) {
        (**self).write_line(line);
    }
}

impl<T: Console + ?Sized> Console for Arc<T> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line);
    }
}
