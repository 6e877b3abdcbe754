// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("{} not found", path.display())]
    #[diagnostic(
        code(notice_gen::manifest::not_found),
        help("Resolve packages first so the lock manifest exists, or pass --manifest")
    )]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to parse {}: {message}", path.display())]
    #[diagnostic(code(notice_gen::manifest::parse))]
    ManifestParse { path: PathBuf, message: String },

    #[error("Missing license files for: {}", names.join(", "))]
    #[diagnostic(code(notice_gen::license::missing), help("{hint}"))]
    MissingLicenses { names: Vec<String>, hint: String },

    #[error("{} is out of date", path.display())]
    #[diagnostic(
        code(notice_gen::output::stale),
        help("Regenerate it by running notice-gen without --check")
    )]
    OutputStale { path: PathBuf },

    #[error("{} already exists", path.display())]
    #[diagnostic(
        code(notice_gen::config::exists),
        help("Edit the existing file or remove it first")
    )]
    ConfigExists { path: PathBuf },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(notice_gen::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
