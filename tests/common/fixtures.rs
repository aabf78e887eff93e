//! Offline sandbox: a private scratch directory plus a [`Config`] that points
//! the runner at a [`FakeTool`].

use super::fake_tool::FakeTool;
use bpv::{Config, Executor, ResetPolicy};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct Sandbox {
    _root: TempDir,
    scratch: PathBuf,
    tool: FakeTool,
    build_command: Vec<String>,
}

impl Sandbox {
    pub fn new(tool: FakeTool) -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        let scratch = root.path().join("mock-webapp-scratch");
        Self {
            _root: root,
            scratch,
            tool,
            build_command: vec!["true".into()],
        }
    }

    /// Replace the build check (default: `true`, so no cargo run offline).
    pub fn build_command(mut self, argv: &[&str]) -> Self {
        self.build_command = argv.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn scratch(&self) -> &Path {
        &self.scratch
    }

    pub fn tool_path(&self) -> &Path {
        self.tool.path()
    }

    pub fn config(&self) -> Config {
        Config::from_toml(&format!(
            r#"
            [runner]
            binary = {binary:?}
            args = ["{{prompt}}"]
            timeout_secs = 30

            [fixture]
            scratch_dir = {scratch:?}

            [build]
            command = {build:?}
            "#,
            binary = self.tool.path().display().to_string(),
            scratch = self.scratch.display().to_string(),
            build = self.build_command,
        ))
        .expect("sandbox config")
    }

    pub fn executor(&self, policy: ResetPolicy) -> Executor {
        Executor::new(self.config()).with_policy(policy)
    }
}
