// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

/// Work tree of the git repository enclosing `start`, if any.
pub fn discover_work_tree(start: &Path) -> Option<PathBuf> {
    let repo = gix::discover(start).ok()?;
    repo.workdir().map(Path::to_path_buf)
}

/// Read-only `git` queries against a single checkout.
///
/// Every query yields `None` when git is missing, exits non-zero, or prints
/// nothing. Nothing here is fatal.
pub struct GitService {
    work_dir: PathBuf,
}

impl GitService {
    pub fn at(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    pub fn remote_url(&self) -> Option<String> {
        self.run(&["config", "--get", "remote.origin.url"])
    }

    /// Nearest tag, else abbreviated HEAD.
    pub fn describe_version(&self) -> Option<String> {
        self.run(&["describe", "--tags", "--abbrev=0"])
            .or_else(|| self.run(&["rev-parse", "--short", "HEAD"]))
    }

    fn run(&self, args: &[&str]) -> Option<String> {
        let output = match Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                debug!(?args, error = %e, "git could not be started");
                return None;
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(?args, status = %output.status, stderr = %stderr.trim(), "git query failed");
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let value = stdout.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git(dir: &Path, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
            .args(["-c", "commit.gpgsign=false", "-c", "tag.gpgsign=false"])
            .args(args)
            .current_dir(dir)
            .env("GIT_CEILING_DIRECTORIES", dir.parent().unwrap())
            .output()
            .unwrap();
        assert!(output.status.success(), "git {args:?} failed");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    #[test]
    fn queries_follow_repository_state() {
        let dir = tempfile::tempdir().unwrap();
        let repo = dir.path();
        git(repo, &["init", "--quiet"]);
        git(repo, &["commit", "--quiet", "--allow-empty", "-m", "initial"]);

        let service = GitService::at(repo);

        // No tag yet: abbreviated HEAD
        let short = git(repo, &["rev-parse", "--short", "HEAD"]);
        assert_eq!(service.describe_version(), Some(short));
        assert_eq!(service.remote_url(), None);

        git(repo, &["tag", "v1.2.3"]);
        assert_eq!(service.describe_version().as_deref(), Some("v1.2.3"));

        git(repo, &["remote", "add", "origin", "https://example.com/x.git"]);
        assert_eq!(service.remote_url().as_deref(), Some("https://example.com/x.git"));
    }

    #[test]
    fn queries_outside_a_repository_yield_none() {
        let dir = tempfile::tempdir().unwrap();
        let git = GitService::at(dir.path());
        assert_eq!(git.remote_url(), None);
        assert_eq!(git.describe_version(), None);
    }

    #[test]
    fn missing_directory_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let git = GitService::at(dir.path().join("does-not-exist"));
        assert_eq!(git.remote_url(), None);
    }
}
