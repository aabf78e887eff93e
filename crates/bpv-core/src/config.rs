//! Configuration types for bpv.
//!
//! [`Config::load`] layers, lowest priority first: the embedded defaults, an
//! optional TOML file (explicit path or `~/.config/bpv/config.toml`), and
//! `BPV_`-prefixed environment variables with `__` as the section separator
//! (`BPV_RUNNER__BINARY=/opt/brainpro/bin/brainpro`). [`Config::defaults`]
//! returns the embedded defaults without touching the filesystem or the
//! environment (useful in tests).

use crate::types::ResetPolicy;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[runner]
binary          = "brainpro"
args            = ["-p", "{prompt}", "--mode", "{permission_mode}"]
permission_mode = "bypassPermissions"
timeout_secs    = 300

[fixture]
scratch_dir = "/tmp/brainpro-mock-webapp-scratch"
reset       = "reset"

[build]
command = ["cargo", "build"]
"#;

/// Placeholder in `runner.args` replaced by the prompt text.
pub const PROMPT_PLACEHOLDER: &str = "{prompt}";
/// Placeholder in `runner.args` replaced by `runner.permission_mode`.
pub const PERMISSION_MODE_PLACEHOLDER: &str = "{permission_mode}";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub runner: RunnerConfig,
    pub fixture: FixtureConfig,
    pub build: BuildConfig,
}

/// `[runner]` — how brainpro is invoked in one-shot mode.
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerConfig {
    /// Binary name (resolved through `PATH`) or absolute path.
    pub binary: PathBuf,
    /// Argument template. See [`PROMPT_PLACEHOLDER`] and
    /// [`PERMISSION_MODE_PLACEHOLDER`].
    pub args: Vec<String>,
    pub permission_mode: String,
    pub timeout_secs: u64,
    /// Extra environment variables for the brainpro process.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl RunnerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `[fixture]` — where the mock webapp lives and how it is reset.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureConfig {
    pub scratch_dir: PathBuf,
    #[serde(default)]
    pub reset: ResetPolicy,
}

/// `[build]` — the compile check run after code-modifying scenarios.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    pub command: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. `path` overrides the default file
    /// location; a missing default file is not an error, a missing explicit
    /// one is.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("BPV")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(" ")
                    .with_list_parse_key("runner.args")
                    .with_list_parse_key("build.command")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Layer a TOML snippet over the built-in defaults. No file or
    /// environment lookups.
    pub fn from_toml(overrides: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(overrides, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Default location of the user config file.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("bpv")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
