//! Process runner port: launches a program and relays its standard output.

use std::future::Future;
use std::path::PathBuf;

use keyrelay_domain::error::LaunchError;

use super::Console;

/// A fully resolved program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

/// How a launched process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

/// Runs programs to completion.
pub trait ProcessRunner: Send + Sync {
    /// Start `command`, forward each standard-output line to `console` as it
    /// arrives, then wait for the process to exit.
    ///
    /// The returned future resolves only after the output stream reached its
    /// end **and** the process exited.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError`] when the program cannot be started.
    fn run<C: Console>(
        &self,
        command: &ProcessCommand,
        console: &C,
    ) -> impl Future<Output = Result<ProcessExit, LaunchError>> + Send;
}
