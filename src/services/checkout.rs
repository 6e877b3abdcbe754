// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Attachment;
use crate::error::Result;

/// Locate a pin's checkout under `checkouts_root`.
///
/// Tries the identity first, then the last segment of the location with any
/// `.git` suffix removed. Returns the first candidate that is a directory.
pub fn checkout_dir_for_pin(checkouts_root: &Path, identity: &str, location: &str) -> Option<PathBuf> {
    let mut candidates = Vec::with_capacity(2);

    if !identity.is_empty() {
        candidates.push(checkouts_root.join(identity));
    }
    if !location.is_empty() {
        candidates.push(checkouts_root.join(location_basename(location)));
    }

    candidates.into_iter().find(|c| c.is_dir())
}

/// `https://github.com/apple/swift-nio.git/` -> `swift-nio`
pub fn location_basename(location: &str) -> &str {
    let trimmed = location.trim_end_matches('/');
    let base = trimmed.rsplit('/').next().unwrap_or(trimmed);
    base.strip_suffix(".git").unwrap_or(base)
}

/// First of `names` that exists as a file in `dir`.
pub fn pick_first_existing(dir: &Path, names: &[String]) -> Option<PathBuf> {
    names.iter().map(|n| dir.join(n)).find(|c| c.is_file())
}

/// Read a license or notice file. Invalid UTF-8 sequences are dropped and
/// line endings normalized to `\n`.
pub fn read_attachment(path: &Path) -> Result<Attachment> {
    let bytes = fs::read(path)?;
    let text: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();

    Ok(Attachment {
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        text: text.replace("\r\n", "\n").replace('\r', "\n").trim().to_string(),
    })
}
