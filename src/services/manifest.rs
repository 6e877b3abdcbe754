// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::path::Path;

use crate::domain::{Manifest, Pin};
use crate::error::{Error, Result};

/// Load pins from a `Package.resolved` file, in manifest order.
pub fn load_pins(path: &Path) -> Result<Vec<Pin>> {
    if !path.is_file() {
        return Err(Error::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    parse_pins(&content).map_err(|e| Error::ManifestParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub fn parse_pins(content: &str) -> serde_json::Result<Vec<Pin>> {
    let manifest: Manifest = serde_json::from_str(content)?;
    Ok(manifest.into_pins())
}
