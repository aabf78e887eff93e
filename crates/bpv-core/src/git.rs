//! Git helpers for the mock project.
//!
//! Everything goes through `git2` so the suite does not depend on a `git`
//! binary or on the user's git configuration.

use git2::{Commit, IndexAddOption, Oid, Repository, ResetType, Signature, StatusOptions};
use std::path::{Path, PathBuf};

const AUTHOR_NAME: &str = "bpv";
const AUTHOR_EMAIL: &str = "bpv@localhost";

/// Tag marking the pristine state. Resets go back here even if later commits
/// were made on top.
pub const INITIAL_TAG: &str = "refs/tags/bpv-initial";

#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("{path} is not a git repository: {source}")]
    NotARepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn open(path: &Path) -> Result<Repository, GitError> {
    Repository::open(path).map_err(|source| GitError::NotARepository {
        path: path.to_path_buf(),
        source,
    })
}

/// Initialise a repository at `path`, commit its whole content and tag that
/// commit as [`INITIAL_TAG`].
pub fn init_and_commit(path: &Path, message: &str) -> Result<Repository, GitError> {
    let repo = Repository::init(path)?;
    let oid = commit_all(&repo, message)?;
    repo.reference(INITIAL_TAG, oid, true, "bpv initial state")?;
    tracing::debug!(path = %path.display(), %oid, "initialised fixture repository");
    Ok(repo)
}

/// Stage everything and commit it on top of HEAD (if any).
pub fn commit_all(repo: &Repository, message: &str) -> Result<Oid, GitError> {
    let mut index = repo.index()?;
    index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
    index.write()?;
    let tree = repo.find_tree(index.write_tree()?)?;
    let sig = Signature::now(AUTHOR_NAME, AUTHOR_EMAIL)?;
    let parent = match repo.head() {
        Ok(head) => Some(head.peel_to_commit()?),
        Err(_) => None,
    };
    let parents: Vec<&Commit> = parent.iter().collect();
    Ok(repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)?)
}

/// Paths (relative to the work tree) with uncommitted changes, including
/// untracked files that are not ignored.
pub fn changed_paths(path: &Path) -> Result<Vec<String>, GitError> {
    let repo = open(path)?;
    let mut opts = StatusOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .include_ignored(false);
    let statuses = repo.statuses(Some(&mut opts))?;
    Ok(statuses
        .iter()
        .filter_map(|entry| entry.path().map(str::to_string))
        .collect())
}

pub fn is_dirty(path: &Path) -> Result<bool, GitError> {
    Ok(!changed_paths(path)?.is_empty())
}

/// Hard-reset the work tree to the initial commit and delete untracked,
/// non-ignored files. Repositories without [`INITIAL_TAG`] reset to HEAD.
pub fn reset_hard_and_clean(path: &Path) -> Result<(), GitError> {
    let repo = open(path)?;
    let target = match repo.revparse_single(INITIAL_TAG) {
        Ok(object) => object.peel_to_commit()?,
        Err(_) => repo.head()?.peel_to_commit()?,
    };
    repo.reset(target.as_object(), ResetType::Hard, None)?;

    let mut opts = StatusOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .include_ignored(false);
    let untracked: Vec<PathBuf> = repo
        .statuses(Some(&mut opts))?
        .iter()
        .filter(|e| e.status().is_wt_new())
        .filter_map(|e| e.path().map(|p| path.join(p)))
        .collect();

    for file in untracked {
        tracing::debug!(file = %file.display(), "removing untracked file");
        if file.is_dir() {
            std::fs::remove_dir_all(&file)?;
        } else {
            std::fs::remove_file(&file)?;
        }
    }
    Ok(())
}
