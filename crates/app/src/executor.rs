//! Action executors: one per [`RuleAction`](keyrelay_domain::rule::RuleAction) variant.
//!
//! HTTP executors never fail: every transport error collapses into
//! [`Classification::Unreachable`]. The process executor reports launch
//! failures to its caller instead.

use std::path::{Path, PathBuf};

use keyrelay_domain::args::split_arguments;
use keyrelay_domain::error::LaunchError;
use keyrelay_domain::outcome::Classification;

use crate::ports::{Console, HttpClient, ProcessCommand, ProcessRunner};

/// Issue a GET to `endpoint` and classify the outcome.
pub async fn http_get<H: HttpClient>(client: &H, endpoint: &str) -> Classification {
    match client.get(endpoint).await {
        Ok(status) => Classification::from_status(status),
        Err(err) => {
            tracing::debug!(endpoint, error = ?err, "GET request failed");
            Classification::Unreachable
        }
    }
}

/// Issue a POST of `body` to `endpoint` and classify the outcome.
pub async fn http_post<H: HttpClient>(client: &H, endpoint: &str, body: &str) -> Classification {
    match client.post(endpoint, body).await {
        Ok(status) => Classification::from_status(status),
        Err(err) => {
            tracing::debug!(endpoint, error = ?err, "POST request failed");
            Classification::Unreachable
        }
    }
}

/// Run the program at `path` with the argument string `args`.
///
/// Completion is always [`Classification::Completed`]; the exit code is
/// recorded in the trace only.
///
/// # Errors
///
/// Returns [`LaunchError`] when the path cannot be resolved or the program
/// cannot be started.
pub async fn process_execute<P, C>(
    runner: &P,
    console: &C,
    path: &str,
    args: &str,
) -> Result<Classification, LaunchError>
where
    P: ProcessRunner,
    C: Console,
{
    let command = resolve_command(path, args)?;
    let exit = runner.run(&command, console).await?;
    tracing::debug!(program = path, code = ?exit.code, "process exited");
    Ok(Classification::Completed)
}

/// Build the invocation for a `ProcessExecute` rule.
///
/// The working directory is derived from the executable path itself, not
/// from the caller's directory: the absolute form of `path` is used when it
/// names a directory, otherwise the directory containing it.
///
/// # Errors
///
/// Returns [`LaunchError`] when `path` cannot be made absolute (e.g. it is
/// empty).
pub fn resolve_command(path: &str, args: &str) -> Result<ProcessCommand, LaunchError> {
    let absolute = std::path::absolute(path).map_err(|source| LaunchError {
        program: path.to_string(),
        source,
    })?;
    // Bare program names stay relative so they are looked up on `PATH`.
    let program = if Path::new(path).components().count() > 1 {
        absolute.clone()
    } else {
        PathBuf::from(path)
    };
    Ok(ProcessCommand {
        program,
        args: split_arguments(args),
        working_dir: working_dir_for(&absolute),
    })
}

fn working_dir_for(absolute: &Path) -> PathBuf {
    if absolute.is_dir() {
        return absolute.to_path_buf();
    }
    absolute
        .parent()
        .map_or_else(|| absolute.to_path_buf(), Path::to_path_buf)
}
