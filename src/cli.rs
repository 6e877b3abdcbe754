// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "notice-gen")]
#[command(version)]
#[command(about = "Generate a third-party notices document from Package.resolved", long_about = None)]
pub struct Cli {
    /// Project root (default: enclosing git work tree, else current directory)
    #[arg(short = 'C', long, env = "NOTICE_GEN_ROOT")]
    pub root: Option<PathBuf>,

    /// Lock manifest, relative to the project root
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Output document, relative to the project root
    #[arg(short, long, env = "NOTICE_GEN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Fail if the output document is missing or out of date, don't write
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the document to stdout instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Write a default notice-gen.toml into the project root
    Init,
    /// Show current configuration
    Config,
}
