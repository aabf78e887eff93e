//! bpv-runner — drives brainpro in one-shot mode.
//!
//! [`Runner::oneshot`] spawns the configured binary with the prompt spliced
//! into its argument template, waits for it under a timeout and returns the
//! captured [`InvocationResult`]. A non-zero exit is data, not an error; only
//! a failure to launch or a timeout is.

use bpv_core::config::{RunnerConfig, PERMISSION_MODE_PLACEHOLDER, PROMPT_PLACEHOLDER};
use bpv_core::{InvocationResult, Prompt};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("failed to launch {binary}: {source}")]
    Launch {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{binary} did not finish within {timeout:?}")]
    TimedOut { binary: PathBuf, timeout: Duration },

    #[error("IO error while waiting for {binary}: {source}")]
    Wait {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One-shot invoker bound to a working directory (the mock webapp).
#[derive(Debug, Clone)]
pub struct Runner {
    binary: PathBuf,
    args: Vec<String>,
    permission_mode: String,
    env: HashMap<String, String>,
    timeout: Duration,
    cwd: PathBuf,
}

impl Runner {
    pub fn new(config: &RunnerConfig, cwd: impl Into<PathBuf>) -> Self {
        Self {
            binary: config.binary.clone(),
            args: config.args.clone(),
            permission_mode: config.permission_mode.clone(),
            env: config.env.clone(),
            timeout: config.timeout(),
            cwd: cwd.into(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Expand the argument template for `prompt`.
    pub fn argv(&self, prompt: &Prompt) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                arg.replace(PERMISSION_MODE_PLACEHOLDER, &self.permission_mode)
                    .replace(PROMPT_PLACEHOLDER, prompt.as_str())
            })
            .collect()
    }

    /// Run brainpro once with `prompt` and capture what it printed.
    pub async fn oneshot(&self, prompt: &Prompt) -> Result<InvocationResult, RunnerError> {
        let argv = self.argv(prompt);
        tracing::info!(binary = %self.binary.display(), cwd = %self.cwd.display(), "invoking one-shot");
        tracing::debug!(?argv, "one-shot arguments");

        let mut cmd = Command::new(&self.binary);
        cmd.args(&argv)
            .envs(&self.env)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let started = Instant::now();
        let child = cmd.spawn().map_err(|source| RunnerError::Launch {
            binary: self.binary.clone(),
            source,
        })?;

        // Dropping the wait future on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| RunnerError::Wait {
                binary: self.binary.clone(),
                source,
            })?,
            Err(_) => {
                tracing::warn!(timeout = ?self.timeout, "one-shot timed out; killed");
                return Err(RunnerError::TimedOut {
                    binary: self.binary.clone(),
                    timeout: self.timeout,
                });
            }
        };

        let result = InvocationResult::from_streams(
            output.status.code(),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            started.elapsed(),
        );
        tracing::info!(
            exit_code = ?result.exit_code,
            elapsed_ms = result.duration.as_millis() as u64,
            output_bytes = result.output.len(),
            "one-shot finished"
        );
        Ok(result)
    }
}

/// Run an arbitrary command to completion in `cwd` (used for the build check).
pub async fn run_command(
    argv: &[String],
    cwd: &Path,
    timeout: Duration,
) -> Result<InvocationResult, RunnerError> {
    let (program, rest) = argv.split_first().ok_or_else(|| RunnerError::Launch {
        binary: PathBuf::new(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
    })?;
    let binary = PathBuf::from(program);
    tracing::debug!(?argv, cwd = %cwd.display(), "running command");

    let mut cmd = Command::new(&binary);
    cmd.args(rest)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let started = Instant::now();
    let child = cmd.spawn().map_err(|source| RunnerError::Launch {
        binary: binary.clone(),
        source,
    })?;
    let output = tokio::time::timeout(timeout, child.wait_with_output())
        .await
        .map_err(|_| RunnerError::TimedOut {
            binary: binary.clone(),
            timeout,
        })?
        .map_err(|source| RunnerError::Wait {
            binary: binary.clone(),
            source,
        })?;

    Ok(InvocationResult::from_streams(
        output.status.code(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
        started.elapsed(),
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
