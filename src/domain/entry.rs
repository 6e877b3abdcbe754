// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashSet;
use std::path::PathBuf;

/// Placeholder rendered for any empty name, repository or version.
pub const UNKNOWN: &str = "unknown";

/// One dependency as it appears in the notices document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub repo: String,
    pub version: String,
    pub path: Option<PathBuf>,
}

impl Entry {
    pub fn display_name(&self) -> &str {
        or_unknown(&self.name)
    }

    pub fn display_repo(&self) -> &str {
        or_unknown(&self.repo)
    }

    pub fn display_version(&self) -> &str {
        or_unknown(&self.version)
    }

    fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() { UNKNOWN } else { value }
}

/// Keep the first entry for each case-insensitive name, then sort by that name.
///
/// The sort is stable, so entries whose lowercase names compare equal keep
/// their relative input order.
pub fn dedupe_and_sort(entries: Vec<Entry>) -> Vec<Entry> {
    let mut seen = HashSet::new();
    let mut unique: Vec<Entry> = entries
        .into_iter()
        .filter(|e| {
            let fresh = seen.insert(e.sort_key());
            if !fresh {
                tracing::debug!(name = %e.name, "dropping duplicate entry");
            }
            fresh
        })
        .collect();

    unique.sort_by_cached_key(Entry::sort_key);
    unique
}
