//! FakeTool — a `/bin/sh` script standing in for brainpro.
//!
//! The script receives the rendered prompt as `$1` and runs with the mock
//! webapp as its working directory, exactly like the real binary would.
//! Behaviours are canned: reply with text, edit a file, exit non-zero.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct FakeTool {
    _dir: TempDir,
    path: PathBuf,
}

impl FakeTool {
    /// Wrap `body` in a `#!/bin/sh` script and make it executable.
    pub fn script(body: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("brainpro");
        std::fs::write(&path, format!("#!/bin/sh\nset -e\n{body}\n")).expect("write script");
        let mut perms = std::fs::metadata(&path).expect("stat script").permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("chmod script");
        Self { _dir: dir, path }
    }

    /// Print `reply` and exit 0 without touching the fixture.
    pub fn replying(reply: &str) -> Self {
        Self::script(&format!("cat <<'BPV_EOF'\n{reply}\nBPV_EOF"))
    }

    /// Echo the prompt back, so tests can inspect what was sent.
    pub fn echoing() -> Self {
        Self::script(r#"printf '%s\n' "$1""#)
    }

    /// Put a `/// Handler.` line above every `pub fn` in handlers.rs.
    pub fn documenting_handlers() -> Self {
        Self::script(
            r#"f=src/api/handlers.rs
awk '/^pub fn/ { print "/// Handler." } { print }' "$f" > "$f.tmp"
mv "$f.tmp" "$f"
echo "Added doc comments to $f""#,
        )
    }

    /// Append an API section to the README.
    pub fn writing_readme_api_section() -> Self {
        Self::script(
            r#"printf '\n## API\n\n- get_user\n- create_user\n' >> README.md
echo "README updated""#,
        )
    }

    /// Print something and exit with `code`.
    pub fn failing(code: i32) -> Self {
        Self::script(&format!("echo 'model unavailable' >&2\nexit {code}"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
