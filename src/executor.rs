//! Scenario executor — guard, prompt, invoke, check.
//!
//! Scenarios run strictly one after another against the single scratch
//! fixture. Every failure stays local to its scenario and becomes an
//! [`Outcome::Failed`]; nothing is retried.

use crate::report::{RunReport, ScenarioReport};
use crate::scenarios::{Check, Scenario};
use anyhow::Context;
use bpv_core::assertions::{
    assert_file_contains, assert_git_dirty, assert_output_contains_any, assert_success,
};
use bpv_core::config::Config;
use bpv_core::{InvocationResult, Outcome, Prompt, ResetPolicy};
use bpv_fixture::MockWebapp;
use bpv_runner::Runner;
use std::time::Instant;

const BUILD_LOG_TAIL_LINES: usize = 15;

pub struct Executor {
    config: Config,
    policy: ResetPolicy,
}

impl Executor {
    pub fn new(config: Config) -> Self {
        let policy = config.fixture.reset;
        Self { config, policy }
    }

    pub fn with_policy(mut self, policy: ResetPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn run_all(&self, scenarios: &[&Scenario]) -> RunReport {
        let mut report = RunReport::new(self.policy);
        for scenario in scenarios {
            report.push(self.run(scenario).await);
        }
        report
    }

    pub async fn run(&self, scenario: &Scenario) -> ScenarioReport {
        tracing::info!(scenario = %scenario.id(), policy = %self.policy, "scenario starting");
        let started = Instant::now();

        let (outcome, exit_code) = match self.attempt(scenario).await {
            Ok(Attempt::Skipped(reason)) => (Outcome::Skipped(reason), None),
            Ok(Attempt::Ran { result, failures }) if failures.is_empty() => {
                (Outcome::Passed, result.exit_code)
            }
            Ok(Attempt::Ran { result, failures }) => {
                (Outcome::Failed(failures.join("; ")), result.exit_code)
            }
            Err(e) => (Outcome::Failed(format!("{e:#}")), None),
        };

        let report = ScenarioReport::new(scenario, outcome, exit_code, started.elapsed());
        tracing::info!(scenario = %scenario.id(), outcome = %report.outcome, "scenario finished");
        report
    }

    async fn attempt(&self, scenario: &Scenario) -> anyhow::Result<Attempt> {
        let webapp = MockWebapp::prepare(&self.config.fixture.scratch_dir, self.policy)
            .context("preparing mock webapp")?;

        if let Some(guard) = scenario.guard {
            if let Some(reason) = guard.skip_reason(&webapp).context("evaluating skip guard")? {
                tracing::info!(scenario = %scenario.id(), %reason, "precondition already met");
                return Ok(Attempt::Skipped(reason));
            }
        }

        let prompt = Prompt::render(scenario.prompt, webapp.path());
        let result = Runner::new(&self.config.runner, webapp.path())
            .oneshot(&prompt)
            .await?;

        let mut failures = Vec::new();
        for check in scenario.checks {
            if let Err(e) = self.check(check, &result, &webapp).await {
                tracing::debug!(scenario = %scenario.id(), ?check, error = %e, "check failed");
                failures.push(format!("{e:#}"));
            }
        }
        Ok(Attempt::Ran { result, failures })
    }

    async fn check(
        &self,
        check: &Check,
        result: &InvocationResult,
        webapp: &MockWebapp,
    ) -> anyhow::Result<()> {
        match *check {
            Check::OutputContainsAny(candidates) => {
                assert_output_contains_any(&result.output, candidates)?
            }
            Check::GitDirty => assert_git_dirty(webapp.path())?,
            Check::FileContains { file, needle } => assert_file_contains(&webapp.file(file), needle)?,
            Check::Builds => {
                let build = bpv_runner::run_command(
                    &self.config.build.command,
                    webapp.path(),
                    self.config.runner.timeout(),
                )
                .await?;
                assert_success(build.exit_code).with_context(|| {
                    format!(
                        "build check `{}` failed:\n{}",
                        self.config.build.command.join(" "),
                        tail(&build.output, BUILD_LOG_TAIL_LINES)
                    )
                })?
            }
        }
        Ok(())
    }
}

enum Attempt {
    Skipped(String),
    Ran {
        result: InvocationResult,
        failures: Vec<String>,
    },
}

fn tail(text: &str, lines: usize) -> String {
    let all: Vec<&str> = text.lines().collect();
    all[all.len().saturating_sub(lines)..].join("\n")
}
