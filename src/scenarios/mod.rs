//! Declarative scenario catalogue.
//!
//! A [`Scenario`] is data: an optional skip [`Guard`], a prompt template and
//! the [`Check`]s to run once brainpro returns. The executor interprets it.

pub mod documentation;
pub mod review;

use bpv_fixture::{FixtureError, MockWebapp};
use serde::Serialize;

/// Suites carry the numbering of the validation plan they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suite {
    Documentation,
    Review,
}

impl Suite {
    pub fn number(self) -> u8 {
        match self {
            Suite::Documentation => 13,
            Suite::Review => 16,
        }
    }
}

impl std::fmt::Display for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suite::Documentation => write!(f, "documentation"),
            Suite::Review => write!(f, "review"),
        }
    }
}

impl std::str::FromStr for Suite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "documentation" | "docs" | "13" => Ok(Suite::Documentation),
            "review" | "16" => Ok(Suite::Review),
            other => Err(format!("unknown suite: {other}")),
        }
    }
}

/// A precondition that, when already satisfied by the fixture, makes the
/// scenario pointless. Evaluating it yields the skip reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Skip if `function` in `file` already has a `///` line above it.
    Undocumented {
        file: &'static str,
        function: &'static str,
    },
    /// Skip if the README already contains `heading` (case-insensitive).
    ReadmeLacksSection { heading: &'static str },
}

impl Guard {
    pub fn skip_reason(&self, webapp: &MockWebapp) -> Result<Option<String>, FixtureError> {
        match *self {
            Guard::Undocumented { file, function } => Ok(webapp
                .function_is_documented(file, function)?
                .then(|| format!("{function} already has docs"))),
            Guard::ReadmeLacksSection { heading } => Ok(webapp
                .readme_has_section(heading)?
                .then(|| format!("README already has {heading:?} section"))),
        }
    }
}

/// One assertion applied after the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Text: output contains at least one candidate (case-sensitive).
    OutputContainsAny(&'static [&'static str]),
    /// State: the fixture has uncommitted changes.
    GitDirty,
    /// State: fixture file `file` contains `needle`.
    FileContains {
        file: &'static str,
        needle: &'static str,
    },
    /// State: the configured build command succeeds in the fixture.
    Builds,
}

impl Check {
    /// Checks that need the fixture as it was left, not just the output.
    pub fn inspects_state(&self) -> bool {
        !matches!(self, Check::OutputContainsAny(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub suite: Suite,
    pub name: &'static str,
    pub description: &'static str,
    pub guard: Option<Guard>,
    /// Prompt template; `{webapp}` becomes the absolute fixture path.
    pub prompt: &'static str,
    pub checks: &'static [Check],
}

impl Scenario {
    /// `suite/name`, unique across the catalogue.
    pub fn id(&self) -> String {
        format!("{}/{}", self.suite, self.name)
    }

    /// True if the scenario expects brainpro to edit the fixture.
    pub fn mutates_fixture(&self) -> bool {
        self.checks.iter().any(Check::inspects_state)
    }
}

/// Every scenario, in execution order.
pub fn catalogue() -> Vec<&'static Scenario> {
    documentation::SCENARIOS
        .iter()
        .chain(review::SCENARIOS)
        .collect()
}

/// Look a scenario up by bare name or `suite/name`.
pub fn find(name: &str) -> Option<&'static Scenario> {
    catalogue()
        .into_iter()
        .find(|s| s.name == name || s.id() == name)
}
