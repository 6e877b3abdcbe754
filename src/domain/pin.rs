// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::domain::UNKNOWN;

/// Top-level shape of a `Package.resolved` file.
///
/// Format versions 2 and 3 keep the pins at the top level. Version 1 nests
/// them under `object`.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub pins: Option<Vec<Pin>>,

    #[serde(default)]
    pub object: Option<LegacyObject>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LegacyObject {
    #[serde(default)]
    pub pins: Vec<Pin>,
}

impl Manifest {
    /// Pins in manifest order. Top-level pins take precedence over the legacy layout.
    pub fn into_pins(self) -> Vec<Pin> {
        match (self.pins, self.object) {
            (Some(pins), _) => pins,
            (None, Some(object)) => object.pins,
            (None, None) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Pin {
    #[serde(default, alias = "package")]
    pub identity: Option<String>,

    #[serde(default, alias = "repositoryURL")]
    pub location: Option<String>,

    #[serde(default)]
    pub state: Option<PinState>,
}

impl Pin {
    pub fn identity(&self) -> &str {
        self.identity.as_deref().unwrap_or("")
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    pub fn version_label(&self) -> VersionLabel {
        VersionLabel::resolve(self.state.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PinState {
    /// `Some` whenever the key is present, even as `null`.
    #[serde(default, deserialize_with = "present_or_empty")]
    pub version: Option<String>,

    #[serde(default)]
    pub branch: Option<String>,

    #[serde(default)]
    pub revision: Option<String>,
}

/// A present `null` still shadows branch and revision, as an empty string.
fn present_or_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
}

/// Number of revision characters shown in a label.
pub const SHORT_REVISION_LEN: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionLabel {
    Version(String),
    Branch { branch: String, revision: String },
    Revision(String),
    Unknown,
}

impl VersionLabel {
    pub fn resolve(state: Option<&PinState>) -> Self {
        let Some(state) = state else {
            return Self::Unknown;
        };

        match (&state.version, &state.branch, &state.revision) {
            (Some(version), _, _) => Self::Version(version.clone()),
            (None, Some(branch), Some(revision)) => Self::Branch {
                branch: branch.clone(),
                revision: short_revision(revision),
            },
            (None, _, Some(revision)) => Self::Revision(short_revision(revision)),
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Version(v) => write!(f, "{v}"),
            Self::Branch { branch, revision } => write!(f, "{branch}@{revision}"),
            Self::Revision(r) => write!(f, "{r}"),
            Self::Unknown => f.write_str(UNKNOWN),
        }
    }
}

fn short_revision(revision: &str) -> String {
    revision.chars().take(SHORT_REVISION_LEN).collect()
}
