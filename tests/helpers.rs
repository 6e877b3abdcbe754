// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A throwaway project root with a manifest and checkouts.
#[allow(dead_code)]
pub struct Project {
    dir: TempDir,
}

#[allow(dead_code)]
impl Project {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn output(&self) -> PathBuf {
        self.root().join("THIRD-PARTY-NOTICES.md")
    }

    /// Write `Package.resolved` with one pin per `(identity, location, state_json)`.
    pub fn manifest(&self, pins: &[(&str, &str, &str)]) -> &Self {
        let pins: Vec<String> = pins
            .iter()
            .map(|(identity, location, state)| {
                format!(
                    r#"{{"identity": "{identity}", "kind": "remoteSourceControl", "location": "{location}", "state": {state}}}"#
                )
            })
            .collect();
        let json = format!(
            r#"{{"originHash": "0", "pins": [{}], "version": 3}}"#,
            pins.join(", ")
        );
        fs::write(self.root().join("Package.resolved"), json).unwrap();
        self
    }

    /// Create `.build/checkouts/<name>` with optional license and notice files.
    pub fn checkout(&self, name: &str, license: Option<(&str, &str)>, notice: Option<(&str, &str)>) -> &Self {
        let dir = self.root().join(".build/checkouts").join(name);
        fs::create_dir_all(&dir).unwrap();
        if let Some((file, text)) = license {
            fs::write(dir.join(file), text).unwrap();
        }
        if let Some((file, text)) = notice {
            fs::write(dir.join(file), text).unwrap();
        }
        self
    }
}
