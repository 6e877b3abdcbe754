// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Project-level config file name, looked up in the project root.
pub const CONFIG_FILE: &str = "notice-gen.toml";

/// A dependency vendored directly into the project tree rather than pinned
/// in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalDependency {
    /// Look for the vendored directory at all (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_local_name")]
    pub name: String,

    /// Directory relative to the project root
    #[serde(default = "default_local_path")]
    pub path: PathBuf,

    /// Repository shown when the checkout has no `origin` remote
    #[serde(default = "default_local_repo")]
    pub fallback_repo: String,
}

impl Default for LocalDependency {
    fn default() -> Self {
        Self {
            enabled: true,
            name: default_local_name(),
            path: default_local_path(),
            fallback_repo: default_local_repo(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_local_name() -> String {
    "SwiftTerm".into()
}
fn default_local_path() -> PathBuf {
    PathBuf::from("SwiftTerm")
}
fn default_local_repo() -> String {
    "https://github.com/migueldeicaza/SwiftTerm".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default = "default_checkouts_dir")]
    pub checkouts_dir: PathBuf,

    /// Product named in the document preamble
    #[serde(default = "default_product")]
    pub product: String,

    /// Remediation hint printed when license files are missing
    #[serde(default = "default_resolve_hint")]
    pub resolve_hint: String,

    /// License file names, tried in order
    #[serde(default = "default_license_files")]
    pub license_files: Vec<String>,

    /// Notice file names, tried in order
    #[serde(default = "default_notice_files")]
    pub notice_files: Vec<String>,

    #[serde(default)]
    pub local: LocalDependency,
}

fn default_manifest() -> PathBuf {
    PathBuf::from("Package.resolved")
}
fn default_output() -> PathBuf {
    PathBuf::from("THIRD-PARTY-NOTICES.md")
}
fn default_checkouts_dir() -> PathBuf {
    PathBuf::from(".build/checkouts")
}
fn default_product() -> String {
    "CodMate".into()
}
fn default_resolve_hint() -> String {
    "run `swift package resolve` and retry.".into()
}

pub fn default_license_files() -> Vec<String> {
    [
        "LICENSE",
        "LICENSE.txt",
        "LICENSE.md",
        "COPYING",
        "COPYING.txt",
        "COPYING.md",
        "LICENCE",
        "LICENCE.txt",
        "LICENCE.md",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub fn default_notice_files() -> Vec<String> {
    ["NOTICE", "NOTICE.txt", "NOTICE.md"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            output: default_output(),
            checkouts_dir: default_checkouts_dir(),
            product: default_product(),
            resolve_hint: default_resolve_hint(),
            license_files: default_license_files(),
            notice_files: default_notice_files(),
            local: LocalDependency::default(),
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > project config > defaults
    pub fn load(cli: &Cli, root: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let project_config = root.join(CONFIG_FILE);
        if project_config.exists() {
            figment = figment.merge(Toml::file(&project_config));
        }

        // NOTICE_GEN_PRODUCT, NOTICE_GEN_LOCAL__ENABLED, ...
        // NOTICE_GEN_ROOT and NOTICE_GEN_OUTPUT belong to the CLI layer.
        figment = figment.merge(
            Env::prefixed("NOTICE_GEN_")
                .ignore(&["root", "output"])
                .split("__"),
        );

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref m) = cli.manifest {
            self.manifest = m.clone();
        }
        if let Some(ref o) = cli.output {
            self.output = o.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.license_files.is_empty() {
            return Err(Error::Config("license_files cannot be empty".into()));
        }

        for name in self.license_files.iter().chain(&self.notice_files) {
            if name.is_empty() {
                return Err(Error::Config("file names cannot be empty".into()));
            }
            if name.contains(['/', '\\']) {
                return Err(Error::Config(format!(
                    "file names must not contain path separators, got '{name}'"
                )));
            }
        }

        if self.product.trim().is_empty() {
            return Err(Error::Config("product cannot be empty".into()));
        }

        if self.local.enabled && self.local.name.is_empty() {
            return Err(Error::Config(
                "local.name cannot be empty while local.enabled is set".into(),
            ));
        }

        Ok(())
    }

    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest)
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }

    pub fn checkouts_path(&self, root: &Path) -> PathBuf {
        root.join(&self.checkouts_dir)
    }

    /// Write a commented default config into `root`. Refuses to overwrite.
    pub fn create_default(root: &Path) -> Result<PathBuf> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            return Err(Error::ConfigExists { path });
        }

        let content = r#"# notice-gen configuration

# Lock manifest, relative to the project root
manifest = "Package.resolved"

# Generated notices document
output = "THIRD-PARTY-NOTICES.md"

# One subdirectory per resolved dependency
checkouts_dir = ".build/checkouts"

# Product named in the document preamble
product = "CodMate"

# Printed when a dependency has no license file
resolve_hint = "run `swift package resolve` and retry."

# Tried in order; the first existing file wins
# license_files = ["LICENSE", "LICENSE.txt", "LICENSE.md", "COPYING", "COPYING.txt", "COPYING.md", "LICENCE", "LICENCE.txt", "LICENCE.md"]
# notice_files = ["NOTICE", "NOTICE.txt", "NOTICE.md"]

# Dependency vendored into the source tree
[local]
enabled = true
name = "SwiftTerm"
path = "SwiftTerm"
fallback_repo = "https://github.com/migueldeicaza/SwiftTerm"
"#;

        fs::write(&path, content)?;
        Ok(path)
    }
}
