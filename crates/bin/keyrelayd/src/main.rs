//! # keyrelayd: keyrelay daemon
//!
//! Composition root that wires all adapters together and dispatches triggers.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Install the `tracing` subscriber
//! - Load or bootstrap the rule document through the rule store
//! - Construct the shared HTTP client, the process runner and the dispatcher
//! - Feed trigger identifiers to the dispatcher: a single `--trigger`, or one
//!   per line from standard input until EOF or Ctrl-C. Ctrl-C is observed
//!   only between triggers; a dispatch in progress runs to completion first.
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use keyrelay_adapter_http_reqwest::ReqwestHttpClient;
use keyrelay_adapter_log_tracing::{StdoutConsole, TracingLogSink};
use keyrelay_adapter_process_tokio::TokioProcessRunner;
use keyrelay_adapter_rules_xml::XmlFileRuleRepository;
use keyrelay_app::dispatcher::Dispatcher;
use keyrelay_app::rule_store::RuleStore;

use crate::config::Config;

type Daemon = Dispatcher<ReqwestHttpClient, TokioProcessRunner, TracingLogSink, StdoutConsole>;

/// Run rule actions for incoming trigger identifiers.
#[derive(Debug, Parser)]
#[command(name = "keyrelayd", version, about)]
struct Cli {
    /// Path to the daemon configuration file.
    #[arg(short, long, env = "KEYRELAY_CONFIG", default_value = "keyrelay.toml")]
    config: PathBuf,

    /// Dispatch this single trigger and exit instead of reading standard input.
    #[arg(short, long)]
    trigger: Option<String>,

    /// Load (or bootstrap) the rule document, then exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Rules
    let store = RuleStore::new(
        XmlFileRuleRepository::new(config.rules_path()),
        TracingLogSink,
    );
    let rules = store.initialize().await?;
    if cli.check {
        tracing::info!(count = rules.len(), "rule document checked");
        return Ok(());
    }

    // Dispatcher
    let http = ReqwestHttpClient::new(&config.http)?;
    let dispatcher = Dispatcher::new(
        rules,
        http,
        TokioProcessRunner::new(),
        TracingLogSink,
        StdoutConsole,
    );

    if let Some(trigger) = cli.trigger {
        dispatcher.execute(&trigger).await?;
        return Ok(());
    }
    serve_stdin(&dispatcher).await
}

/// Dispatch one trigger per non-empty line of standard input.
///
/// A launch failure aborts the current trigger only; the loop keeps reading.
/// Ctrl-C is checked while waiting for the next line, never mid-dispatch.
async fn serve_stdin(dispatcher: &Daemon) -> anyhow::Result<()> {
    tracing::info!("reading triggers from standard input");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(trigger) = line? else { break };
                if trigger.is_empty() {
                    continue;
                }
                if let Err(err) = dispatcher.execute(&trigger).await {
                    tracing::error!(trigger = %trigger, error = ?err, "dispatch aborted");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted, shutting down");
                break;
            }
        }
    }
    Ok(())
}
