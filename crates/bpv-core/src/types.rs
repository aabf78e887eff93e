//! Core types shared across the runner, the fixture and the executor.
//!
//! [`Prompt`] is the immutable instruction handed to brainpro,
//! [`InvocationResult`] is what comes back, and [`Outcome`] is the verdict a
//! scenario reaches after its checks ran.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Placeholder substituted with the absolute fixture path when a prompt
/// template is rendered.
pub const WEBAPP_PLACEHOLDER: &str = "{webapp}";

/// A natural-language instruction for brainpro.
///
/// Prompts are rendered once from a template and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Render `template`, replacing every `{webapp}` with `webapp`.
    pub fn render(template: &str, webapp: &std::path::Path) -> Self {
        Self(template.replace(WEBAPP_PLACEHOLDER, &webapp.display().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything captured from one brainpro invocation.
///
/// Any filesystem or git mutation brainpro performed is not recorded here;
/// inspect the fixture for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    /// Process exit code. `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    /// stdout followed by stderr. This is what text assertions look at.
    pub output: String,
    pub duration: Duration,
}

impl InvocationResult {
    /// Build a result from the two captured streams, deriving `output`.
    pub fn from_streams(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        let mut output = String::with_capacity(stdout.len() + stderr.len());
        output.push_str(&stdout);
        output.push_str(&stderr);
        Self {
            exit_code,
            stdout,
            stderr,
            output,
            duration,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Final verdict for one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed(String),
    /// The scenario's precondition was already satisfied by the fixture.
    Skipped(String),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Passed => write!(f, "PASS"),
            Outcome::Failed(reason) => write!(f, "FAIL ({reason})"),
            Outcome::Skipped(reason) => write!(f, "SKIP ({reason})"),
        }
    }
}

/// How the fixture is brought into shape before each scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetPolicy {
    /// Delete and re-materialize the mock project.
    Fresh,
    /// Hard-reset to the initial commit and drop untracked files.
    #[default]
    Reset,
    /// Leave whatever the previous scenario left behind. Skip guards decide.
    Keep,
}

impl std::str::FromStr for ResetPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fresh" => Ok(Self::Fresh),
            "reset" => Ok(Self::Reset),
            "keep" => Ok(Self::Keep),
            other => Err(format!("unknown reset policy: {other} (fresh|reset|keep)")),
        }
    }
}

impl std::fmt::Display for ResetPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetPolicy::Fresh => write!(f, "fresh"),
            ResetPolicy::Reset => write!(f, "reset"),
            ResetPolicy::Keep => write!(f, "keep"),
        }
    }
}
