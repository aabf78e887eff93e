//! Assertion library for scenario checks.
//!
//! Two independent predicate sets:
//!
//! - **text**: pure checks over captured brainpro output
//!   ([`assert_output_contains_any`]).
//! - **state**: checks over the mock project on disk
//!   ([`assert_file_contains`], [`assert_git_dirty`]) and over the exit code
//!   of a process ([`assert_success`]).
//!
//! Every predicate returns `Result<(), AssertionFailure>` so the executor can
//! turn a failure into a report line and test harnesses can panic on it.

use crate::git::{self, GitError};
use std::path::{Path, PathBuf};

const EXCERPT_CHARS: usize = 400;

#[derive(Debug, thiserror::Error)]
pub enum AssertionFailure {
    #[error("output contained none of {candidates:?}\n  output excerpt: {excerpt:?}")]
    NoCandidateFound {
        candidates: Vec<String>,
        excerpt: String,
    },

    #[error("{path} does not contain {needle:?}")]
    FileMissingSubstring { path: PathBuf, needle: String },

    #[error("could not read {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("expected uncommitted changes in {path}, but the working tree is clean")]
    GitClean { path: PathBuf },

    #[error("could not inspect git state: {0}")]
    Git(#[from] GitError),

    #[error("expected exit code 0, got {}", describe_exit(.exit_code))]
    NonZeroExit { exit_code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "termination by signal".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Text predicates
// ---------------------------------------------------------------------------

/// Pass iff at least one candidate is a literal, case-sensitive substring of
/// `output`. An empty candidate list never passes.
pub fn assert_output_contains_any<S: AsRef<str>>(
    output: &str,
    candidates: &[S],
) -> Result<(), AssertionFailure> {
    if candidates.iter().any(|c| output.contains(c.as_ref())) {
        return Ok(());
    }
    Err(AssertionFailure::NoCandidateFound {
        candidates: candidates.iter().map(|c| c.as_ref().to_string()).collect(),
        excerpt: excerpt(output),
    })
}

/// Case-insensitive containment. Both sides are upper-cased, so
/// `contains_ignore_case("## Api", "## API")` holds.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_uppercase().contains(&needle.to_uppercase())
}

fn excerpt(output: &str) -> String {
    let trimmed = output.trim();
    match trimmed.char_indices().nth(EXCERPT_CHARS) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

// ---------------------------------------------------------------------------
// State predicates
// ---------------------------------------------------------------------------

/// Read the whole file and test for `needle`.
pub fn assert_file_contains(path: &Path, needle: &str) -> Result<(), AssertionFailure> {
    let content =
        std::fs::read_to_string(path).map_err(|source| AssertionFailure::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
    if content.contains(needle) {
        Ok(())
    } else {
        Err(AssertionFailure::FileMissingSubstring {
            path: path.to_path_buf(),
            needle: needle.to_string(),
        })
    }
}

/// Pass iff the repository at `repo` has uncommitted changes (untracked
/// files included).
pub fn assert_git_dirty(repo: &Path) -> Result<(), AssertionFailure> {
    if git::is_dirty(repo)? {
        Ok(())
    } else {
        Err(AssertionFailure::GitClean {
            path: repo.to_path_buf(),
        })
    }
}

pub fn assert_success(exit_code: Option<i32>) -> Result<(), AssertionFailure> {
    match exit_code {
        Some(0) => Ok(()),
        other => Err(AssertionFailure::NonZeroExit { exit_code: other }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
