//! # keyrelay-adapter-process-tokio
//!
//! Process adapter using [`tokio::process`].
//!
//! ## Responsibilities
//! - Implement the `ProcessRunner` port defined in `keyrelay-app::ports`
//! - Relay the child's standard output to the `Console` line by line
//! - Wait for end-of-stream and process exit before returning
//!
//! Standard error is inherited from the parent and not relayed.
//!
//! ## Dependency rule
//! Depends on `keyrelay-app` (for port traits) and `keyrelay-domain` (for domain types).

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

use keyrelay_app::ports::{Console, ProcessCommand, ProcessExit, ProcessRunner};
use keyrelay_domain::error::LaunchError;

/// Runs programs as child processes of the dispatcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for TokioProcessRunner {
    async fn run<C: Console>(
        &self,
        command: &ProcessCommand,
        console: &C,
    ) -> Result<ProcessExit, LaunchError> {
        let launch_error = |source| LaunchError {
            program: command.program.display().to_string(),
            source,
        };

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(launch_error)?;

        if let Some(stdout) = child.stdout.take() {
            let mut reader = BufReader::new(stdout);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match reader.read_until(b'\n', &mut buf).await {
                    Ok(0) => break,
                    Ok(_) => console.write_line(&String::from_utf8_lossy(strip_line_ending(&buf))),
                    Err(err) => {
                        tracing::warn!(program = %command.program.display(), error = %err, "stopped relaying output");
                        break;
                    }
                }
            }
        }

        let status = child.wait().await.map_err(launch_error)?;
        Ok(ProcessExit {
            code: status.code(),
        })
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
