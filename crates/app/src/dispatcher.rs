//! Dispatcher: maps a trigger identifier to rule executions.
//!
//! Matching rules run strictly one after another, in configuration order,
//! and each produces exactly one report line. An unmatched trigger is a
//! silent no-op.

use keyrelay_domain::error::KeyRelayError;
use keyrelay_domain::outcome::Classification;
use keyrelay_domain::rule::{Rule, RuleAction};
use keyrelay_domain::rule_set::RuleSet;

use crate::executor;
use crate::ports::{Console, HttpClient, LogSink, ProcessRunner};

/// Dispatch engine holding the loaded rules and the shared collaborators.
pub struct Dispatcher<H, P, L, C> {
    rules: RuleSet,
    http: H,
    runner: P,
    log: L,
    console: C,
}

impl<H, P, L, C> Dispatcher<H, P, L, C>
where
    H: HttpClient,
    P: ProcessRunner,
    L: LogSink,
    C: Console,
{
    /// Create a dispatcher for `rules`.
    ///
    /// `http` is the single client shared by every HTTP rule for the
    /// dispatcher's whole lifetime.
    pub fn new(rules: RuleSet, http: H, runner: P, log: L, console: C) -> Self {
        Self {
            rules,
            http,
            runner,
            log,
            console,
        }
    }

    /// Run every rule whose trigger equals `trigger`.
    ///
    /// HTTP failures are reported and do not stop later rules.
    ///
    /// # Errors
    ///
    /// Returns [`KeyRelayError::Launch`] when a `ProcessExecute` rule cannot
    /// start its program; rules after it are not run.
    pub async fn execute(&self, trigger: &str) -> Result<(), KeyRelayError> {
        for rule in self.rules.matching(trigger) {
            tracing::debug!(rule = %rule.name, action = %rule.action, "running rule");
            let classification = self.run_action(rule).await?;
            self.log
                .log(classification.severity(), &classification.report(&rule.name));
        }
        Ok(())
    }

    async fn run_action(&self, rule: &Rule) -> Result<Classification, KeyRelayError> {
        let classification = match rule.action {
            RuleAction::HttpGet => executor::http_get(&self.http, &rule.endpoint).await,
            RuleAction::HttpPost => {
                executor::http_post(&self.http, &rule.endpoint, &rule.extra_data).await
            }
            RuleAction::ProcessExecute => {
                executor::process_execute(
                    &self.runner,
                    &self.console,
                    &rule.endpoint,
                    &rule.extra_data,
                )
                .await?
            }
        };
        Ok(classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyrelay_domain::error::{LaunchError, TransportError};
    use keyrelay_domain::outcome::Severity;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    use crate::ports::{ProcessCommand, ProcessExit};

    // ── Scripted HTTP client ───────────────────────────────────────

    /// Answers by URL; unknown URLs behave like a refused connection.
    #[derive(Default)]
    struct ScriptedHttp {
        statuses: HashMap<String, u16>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedHttp {
        fn with(statuses: &[(&str, u16)]) -> Self {
            Self {
                statuses: statuses
                    .iter()
                    .map(|(url, status)| ((*url).to_string(), *status))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn answer(&self, method: &str, url: &str) -> Result<u16, TransportError> {
            self.calls.lock().unwrap().push(format!("{method} {url}"));
            self.statuses
                .get(url)
                .copied()
                .ok_or_else(|| TransportError("connection refused".into()))
        }
    }

    impl HttpClient for ScriptedHttp {
        fn get(&self, url: &str) -> impl Future<Output = Result<u16, TransportError>> + Send {
            let r = self.answer("GET", url);
            async { r }
        }

        fn post(
            &self,
            url: &str,
            _body: &str,
        ) -> impl Future<Output = Result<u16, TransportError>> + Send {
            let r = self.answer("POST", url);
            async { r }
        }
    }

    // ── Scripted process runner ────────────────────────────────────

    /// Prints two lines for any program except `/missing`, which fails to launch.
    #[derive(Default)]
    struct ScriptedRunner {
        launched: Mutex<Vec<ProcessCommand>>,
    }

    impl ProcessRunner for ScriptedRunner {
        fn run<C: Console>(
            &self,
            command: &ProcessCommand,
            console: &C,
        ) -> impl Future<Output = Result<ProcessExit, LaunchError>> + Send {
            let r = if command.program.as_os_str() == "/missing" {
                Err(LaunchError {
                    program: "/missing".to_string(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
            } else {
                self.launched.lock().unwrap().push(command.clone());
                console.write_line("first line");
                console.write_line("second line");
                Ok(ProcessExit { code: Some(0) })
            };
            async { r }
        }
    }

    // ── Shared journal for log + console ordering ──────────────────

    #[derive(Default)]
    struct Journal {
        entries: Mutex<Vec<(Option<Severity>, String)>>,
    }

    impl Journal {
        fn logs(&self) -> Vec<(Severity, String)> {
            self.entries
                .lock()
                .unwrap()
                .iter()
                .filter_map(|(s, m)| s.map(|s| (s, m.clone())))
                .collect()
        }

        fn all(&self) -> Vec<String> {
            self.entries
                .lock()
                .unwrap()
                .iter()
                .map(|(_, m)| m.clone())
                .collect()
        }
    }

    impl LogSink for Journal {
        fn log(&self, severity: Severity, message: &str) {
            self.entries
                .lock()
                .unwrap()
                .push((Some(severity), message.to_string()));
        }
    }

    impl Console for Journal {
        fn write_line(&self, line: &str) {
            self.entries.lock().unwrap().push((None, line.to_string()));
        }
    }

    // ── Helpers ────────────────────────────────────────────────────

    fn get_rule(name: &str, trigger: &str, url: &str) -> Rule {
        Rule::builder()
            .name(name)
            .trigger(trigger)
            .action(RuleAction::HttpGet)
            .endpoint(url)
            .build()
    }

    fn exec_rule(name: &str, trigger: &str, path: &str) -> Rule {
        Rule::builder()
            .name(name)
            .trigger(trigger)
            .action(RuleAction::ProcessExecute)
            .endpoint(path)
            .extra_data("--flag")
            .build()
    }

    type TestDispatcher<'a> = Dispatcher<ScriptedHttp, ScriptedRunner, &'a Journal, &'a Journal>;

    fn make_dispatcher<'a>(
        rules: Vec<Rule>,
        http: ScriptedHttp,
        journal: &'a Journal,
    ) -> TestDispatcher<'a> {
        Dispatcher::new(
            rules.into(),
            http,
            ScriptedRunner::default(),
            journal,
            journal,
        )
    }

    // ── Tests ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn should_run_only_exact_matches_in_file_order() {
        let journal = Journal::default();
        let http = ScriptedHttp::with(&[("http://a1", 200), ("http://b", 200), ("http://a2", 200)]);
        let dispatcher = make_dispatcher(
            vec![
                get_rule("first", "A", "http://a1"),
                get_rule("other", "B", "http://b"),
                get_rule("second", "A", "http://a2"),
            ],
            http,
            &journal,
        );

        dispatcher.execute("A").await.unwrap();

        assert_eq!(
            *dispatcher.http.calls.lock().unwrap(),
            ["GET http://a1", "GET http://a2"]
        );
        assert_eq!(
            journal.logs(),
            [
                (Severity::Success, "Rule first sent, got HTTP OK".to_string()),
                (Severity::Success, "Rule second sent, got HTTP OK".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn should_do_nothing_for_unmatched_trigger() {
        let journal = Journal::default();
        let dispatcher = make_dispatcher(
            vec![get_rule("first", "A", "http://a"), get_rule("other", "B", "http://b")],
            ScriptedHttp::default(),
            &journal,
        );

        dispatcher.execute("C").await.unwrap();
        dispatcher.execute("a").await.unwrap();

        assert!(dispatcher.http.calls.lock().unwrap().is_empty());
        assert!(journal.all().is_empty());
    }

    #[tokio::test]
    async fn should_keep_running_after_unreachable_endpoint() {
        let journal = Journal::default();
        let http = ScriptedHttp::with(&[("http://up", 500)]);
        let dispatcher = make_dispatcher(
            vec![
                get_rule("down", "Play", "http://down"),
                get_rule("up", "Play", "http://up"),
            ],
            http,
            &journal,
        );

        dispatcher.execute("Play").await.unwrap();

        assert_eq!(
            journal.logs(),
            [
                (Severity::Error, "Rule down failed, got HTTP NotFound".to_string()),
                (Severity::Info, "Rule up ran".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn should_report_not_found_response_as_failure() {
        let journal = Journal::default();
        let http = ScriptedHttp::with(&[("http://lamp", 404)]);
        let dispatcher = make_dispatcher(
            vec![get_rule("lamp", "Play", "http://lamp")],
            http,
            &journal,
        );

        dispatcher.execute("Play").await.unwrap();

        assert_eq!(
            journal.logs(),
            [(Severity::Error, "Rule lamp failed, got HTTP NotFound".to_string())]
        );
    }

    #[tokio::test]
    async fn should_post_extra_data() {
        let journal = Journal::default();
        let http = ScriptedHttp::with(&[("http://hook", 200)]);
        let rule = Rule::builder()
            .name("hook")
            .trigger("Rev")
            .action(RuleAction::HttpPost)
            .endpoint("http://hook")
            .extra_data("{\"on\":true}")
            .build();
        let dispatcher = make_dispatcher(vec![rule], http, &journal);

        dispatcher.execute("Rev").await.unwrap();

        assert_eq!(*dispatcher.http.calls.lock().unwrap(), ["POST http://hook"]);
        assert_eq!(journal.logs()[0].0, Severity::Success);
    }

    #[tokio::test]
    async fn should_relay_process_output_before_reporting_completion() {
        let journal = Journal::default();
        let dispatcher = make_dispatcher(
            vec![exec_rule("script", "Home", "/opt/script.sh")],
            ScriptedHttp::default(),
            &journal,
        );

        dispatcher.execute("Home").await.unwrap();

        assert_eq!(journal.all(), ["first line", "second line", "Rule script ran"]);
        assert_eq!(journal.logs(), [(Severity::Info, "Rule script ran".to_string())]);
        let launched = dispatcher.runner.launched.lock().unwrap();
        assert_eq!(launched[0].args, ["--flag"]);
    }

    #[tokio::test]
    async fn should_propagate_launch_failure_and_stop() {
        let journal = Journal::default();
        let http = ScriptedHttp::with(&[("http://after", 200)]);
        let dispatcher = make_dispatcher(
            vec![
                exec_rule("broken", "Home", "/missing"),
                get_rule("after", "Home", "http://after"),
            ],
            http,
            &journal,
        );

        let result = dispatcher.execute("Home").await;

        assert!(matches!(result, Err(KeyRelayError::Launch(_))));
        assert!(dispatcher.http.calls.lock().unwrap().is_empty());
        assert!(journal.logs().is_empty());
    }
}
