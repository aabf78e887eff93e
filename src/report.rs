//! Run reports, rendered as text for humans or JSON for CI.

use crate::scenarios::{Scenario, Suite};
use bpv_core::{Outcome, ResetPolicy};
use serde::Serialize;
use std::fmt::Write as _;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub suite: Suite,
    pub name: &'static str,
    pub outcome: Outcome,
    pub exit_code: Option<i32>,
    pub duration_ms: u64,
}

impl ScenarioReport {
    pub fn new(
        scenario: &Scenario,
        outcome: Outcome,
        exit_code: Option<i32>,
        elapsed: Duration,
    ) -> Self {
        Self {
            suite: scenario.suite,
            name: scenario.name,
            outcome,
            exit_code,
            duration_ms: elapsed.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub policy: ResetPolicy,
    pub scenarios: Vec<ScenarioReport>,
}

impl RunReport {
    pub fn new(policy: ResetPolicy) -> Self {
        Self {
            started_at: chrono::Utc::now(),
            policy,
            scenarios: Vec::new(),
        }
    }

    pub fn push(&mut self, scenario: ScenarioReport) {
        self.scenarios.push(scenario);
    }

    pub fn summary(&self) -> Summary {
        self.scenarios
            .iter()
            .fold(Summary::default(), |mut acc, s| {
                match s.outcome {
                    Outcome::Passed => acc.passed += 1,
                    Outcome::Failed(_) => acc.failed += 1,
                    Outcome::Skipped(_) => acc.skipped += 1,
                }
                acc
            })
    }

    pub fn has_failures(&self) -> bool {
        self.scenarios.iter().any(|s| s.outcome.is_failure())
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for s in &self.scenarios {
            let _ = writeln!(
                out,
                "[{:>2}] {:<32} {} ({} ms)",
                s.suite.number(),
                format!("{}/{}", s.suite, s.name),
                s.outcome,
                s.duration_ms
            );
        }
        let summary = self.summary();
        let _ = writeln!(
            out,
            "\n{} passed, {} failed, {} skipped (fixture policy: {})",
            summary.passed, summary.failed, summary.skipped, self.policy
        );
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct Envelope<'a> {
            #[serde(flatten)]
            report: &'a RunReport,
            summary: Summary,
        }
        serde_json::to_string_pretty(&Envelope {
            report: self,
            summary: self.summary(),
        })
    }
}
