//! bpv-fixture — the mock webapp that brainpro is pointed at.
//!
//! [`MockWebapp`] owns a scratch directory holding a small Rust web service
//! with known defects baked in: undocumented public handlers, a hardcoded
//! credential, a deprecated function and a TODO. The directory is a git
//! repository whose single commit is the pristine template, so "did brainpro
//! change anything" reduces to "is the working tree dirty".
//!
//! The directory is shared mutable state. Nothing here locks it; callers run
//! scenarios one at a time.

pub mod template;

use bpv_core::assertions::contains_ignore_case;
use bpv_core::git::{self, GitError};
use bpv_core::ResetPolicy;
use regex::Regex;
use std::path::{Path, PathBuf};

const INITIAL_COMMIT: &str = "Initial mock webapp";

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("fixture IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Git(#[from] GitError),

    #[error("no mock webapp at {0}")]
    Missing(PathBuf),

    #[error("refusing to manage {0}: the scratch path must be absolute and not a filesystem root")]
    UnsafePath(PathBuf),
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> FixtureError + '_ {
    move |source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Handle to a materialized mock webapp.
#[derive(Debug, Clone)]
pub struct MockWebapp {
    path: PathBuf,
}

impl MockWebapp {
    /// Write the template to `path` (replacing anything already there) and
    /// commit it as the initial state.
    pub fn materialize(path: impl Into<PathBuf>) -> Result<Self, FixtureError> {
        let path = checked(path.into())?;
        if path.exists() {
            std::fs::remove_dir_all(&path).map_err(io_err(&path))?;
        }
        for (rel, contents) in template::FILES {
            let file = path.join(rel);
            if let Some(parent) = file.parent() {
                std::fs::create_dir_all(parent).map_err(io_err(parent))?;
            }
            std::fs::write(&file, contents).map_err(io_err(&file))?;
        }
        git::init_and_commit(&path, INITIAL_COMMIT)?;
        tracing::info!(path = %path.display(), "materialized mock webapp");
        Ok(Self { path })
    }

    /// Attach to an existing mock webapp.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FixtureError> {
        let path = checked(path.into())?;
        if !path.join(".git").exists() {
            return Err(FixtureError::Missing(path));
        }
        Ok(Self { path })
    }

    /// Bring the fixture into the state `policy` asks for.
    pub fn prepare(path: impl Into<PathBuf>, policy: ResetPolicy) -> Result<Self, FixtureError> {
        let path = path.into();
        match policy {
            ResetPolicy::Fresh => Self::materialize(path),
            ResetPolicy::Reset => match Self::open(&path) {
                Ok(webapp) => {
                    webapp.reset()?;
                    Ok(webapp)
                }
                Err(FixtureError::Missing(_)) => Self::materialize(path),
                Err(e) => Err(e),
            },
            ResetPolicy::Keep => match Self::open(&path) {
                Err(FixtureError::Missing(_)) => Self::materialize(path),
                other => other,
            },
        }
    }

    /// Discard every change since the initial commit.
    pub fn reset(&self) -> Result<(), FixtureError> {
        git::reset_hard_and_clean(&self.path)?;
        tracing::debug!(path = %self.path.display(), "reset mock webapp");
        Ok(())
    }

    /// Delete the scratch directory.
    pub fn teardown(self) -> Result<(), FixtureError> {
        std::fs::remove_dir_all(&self.path).map_err(io_err(&self.path))?;
        tracing::info!(path = %self.path.display(), "removed mock webapp");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file(&self, rel: &str) -> PathBuf {
        self.path.join(rel)
    }

    pub fn read(&self, rel: &str) -> Result<String, FixtureError> {
        let file = self.file(rel);
        std::fs::read_to_string(&file).map_err(io_err(&file))
    }

    pub fn is_dirty(&self) -> Result<bool, FixtureError> {
        Ok(git::is_dirty(&self.path)?)
    }

    pub fn changed_paths(&self) -> Result<Vec<String>, FixtureError> {
        Ok(git::changed_paths(&self.path)?)
    }

    // -----------------------------------------------------------------------
    // Precondition probes
    // -----------------------------------------------------------------------

    /// True if the line declaring `pub fn <name>` in `rel` is directly
    /// preceded by a line containing `///`.
    pub fn function_is_documented(&self, rel: &str, name: &str) -> Result<bool, FixtureError> {
        let content = self.read(rel)?;
        let decl = declaration_regex(name);
        let lines: Vec<&str> = content.lines().collect();
        Ok(lines
            .iter()
            .enumerate()
            .filter(|(_, line)| decl.is_match(line))
            .any(|(i, _)| i > 0 && lines[i - 1].contains("///")))
    }

    /// Names of public functions in `rel` without a `///` comment right
    /// above them (attributes in between are skipped).
    pub fn undocumented_public_functions(&self, rel: &str) -> Result<Vec<String>, FixtureError> {
        let content = self.read(rel)?;
        let decl = Regex::new(r"^\s*pub fn (\w+)").expect("static regex");
        let lines: Vec<&str> = content.lines().collect();

        let mut undocumented = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            let Some(caps) = decl.captures(line) else {
                continue;
            };
            let documented = lines[..i]
                .iter()
                .rev()
                .find(|l| !l.trim_start().starts_with("#["))
                .is_some_and(|l| l.contains("///"));
            if !documented {
                undocumented.push(caps[1].to_string());
            }
        }
        Ok(undocumented)
    }

    /// Case-insensitive check for `heading` anywhere in the README.
    pub fn readme_has_section(&self, heading: &str) -> Result<bool, FixtureError> {
        Ok(contains_ignore_case(&self.read(template::README)?, heading))
    }
}

fn declaration_regex(name: &str) -> Regex {
    Regex::new(&format!(r"pub fn {}\b", regex::escape(name))).expect("escaped name is a valid regex")
}

fn checked(path: PathBuf) -> Result<PathBuf, FixtureError> {
    if !path.is_absolute() || path.parent().is_none() {
        return Err(FixtureError::UnsafePath(path));
    }
    Ok(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
