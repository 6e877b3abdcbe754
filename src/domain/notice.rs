// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use crate::domain::Entry;

/// A license or notice file found in a dependency checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Base name of the file, e.g. `LICENSE.md`
    pub file_name: String,
    /// File contents with surrounding whitespace trimmed
    pub text: String,
}

/// Everything needed to render one dependency's section.
#[derive(Debug, Clone)]
pub struct NoticeSection {
    pub entry: Entry,
    pub license: Option<Attachment>,
    pub notice: Option<Attachment>,
}

impl NoticeSection {
    pub fn has_license(&self) -> bool {
        self.license.is_some()
    }
}

/// Display names of sections without a license file, sorted.
pub fn missing_licenses(sections: &[NoticeSection]) -> Vec<String> {
    let mut missing: Vec<String> = sections
        .iter()
        .filter(|s| !s.has_license())
        .map(|s| s.entry.display_name().to_string())
        .collect();
    missing.sort();
    missing
}
