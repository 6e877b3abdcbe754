// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::path::Path;

use tracing::debug;

use crate::config::{Config, LocalDependency};
use crate::domain::{Entry, NoticeSection, Pin};
use crate::error::Result;
use crate::services::checkout::{checkout_dir_for_pin, pick_first_existing, read_attachment};
use crate::services::git::GitService;

/// Version shown for the vendored dependency when git has nothing to say.
pub const LOCAL_VERSION: &str = "local";

/// Turns manifest pins and the vendored dependency into notice sections.
pub struct EntryCollector<'a> {
    config: &'a Config,
    root: &'a Path,
}

impl<'a> EntryCollector<'a> {
    pub fn new(config: &'a Config, root: &'a Path) -> Self {
        Self { config, root }
    }

    /// One entry per pin in manifest order, followed by the vendored
    /// dependency if its directory exists.
    pub fn entries(&self, pins: &[Pin]) -> Vec<Entry> {
        let checkouts = self.config.checkouts_path(self.root);

        let mut entries: Vec<Entry> = pins
            .iter()
            .map(|pin| {
                let path = checkout_dir_for_pin(&checkouts, pin.identity(), pin.location());
                let entry = Entry {
                    name: pin.identity().to_string(),
                    repo: pin.location().to_string(),
                    version: pin.version_label().to_string(),
                    path,
                };
                debug!(
                    name = %entry.name,
                    version = %entry.version,
                    path = ?entry.path,
                    "pin resolved"
                );
                entry
            })
            .collect();

        if let Some(local) = self.local_entry(&self.config.local) {
            entries.push(local);
        }

        entries
    }

    fn local_entry(&self, local: &LocalDependency) -> Option<Entry> {
        if !local.enabled {
            return None;
        }

        let dir = self.root.join(&local.path);
        if !dir.is_dir() {
            debug!(path = %dir.display(), "no vendored checkout");
            return None;
        }

        let git = GitService::at(&dir);
        let repo = git.remote_url().unwrap_or_else(|| local.fallback_repo.clone());
        let version = git
            .describe_version()
            .unwrap_or_else(|| LOCAL_VERSION.to_string());

        debug!(name = %local.name, %repo, %version, "vendored dependency found");

        Some(Entry {
            name: local.name.clone(),
            repo,
            version,
            path: Some(dir),
        })
    }

    /// Look up and read license and notice files for each entry.
    ///
    /// An entry without a license file still gets a section; callers decide
    /// whether that is fatal.
    pub fn sections(&self, entries: Vec<Entry>) -> Result<Vec<NoticeSection>> {
        entries
            .into_iter()
            .map(|entry| -> Result<NoticeSection> {
                let (license, notice) = match entry.path.as_deref().filter(|p| p.is_dir()) {
                    Some(dir) => (
                        pick_first_existing(dir, &self.config.license_files),
                        pick_first_existing(dir, &self.config.notice_files),
                    ),
                    None => (None, None),
                };

                Ok(NoticeSection {
                    license: license.as_deref().map(read_attachment).transpose()?,
                    notice: notice.as_deref().map(read_attachment).transpose()?,
                    entry,
                })
            })
            .collect()
    }
}
