// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::{dedupe_and_sort, missing_licenses};
use crate::error::{Error, Result};
use crate::services::{collector::EntryCollector, git, manifest, render};

pub struct App {
    cli: Cli,
    config: Config,
    root: PathBuf,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let root = Self::resolve_root(&cli)?;
        let config = Config::load(&cli, &root)?;
        debug!(
            root = %root.display(),
            manifest = %config.manifest.display(),
            output = %config.output.display(),
            "config loaded"
        );
        Ok(Self { cli, config, root })
    }

    fn resolve_root(cli: &Cli) -> Result<PathBuf> {
        if let Some(ref root) = cli.root {
            return Ok(root.clone());
        }
        let cwd = std::env::current_dir()?;
        Ok(git::discover_work_tree(&cwd).unwrap_or(cwd))
    }

    pub fn run(&self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        let document = self.build_document()?;

        if self.cli.stdout {
            print!("{document}");
            return Ok(());
        }

        let output = self.config.output_path(&self.root);

        if self.cli.check {
            return self.check_up_to_date(&output, &document);
        }

        fs::write(&output, &document)?;
        println!("{} Updated {}", style("[ok]").green(), output.display());
        Ok(())
    }

    /// Load, resolve, and render. Fails before anything is written if a
    /// license file is missing.
    pub fn build_document(&self) -> Result<String> {
        let manifest_path = self.config.manifest_path(&self.root);
        self.print_status(&format!("Reading {}", manifest_path.display()));
        let pins = manifest::load_pins(&manifest_path)?;

        let collector = EntryCollector::new(&self.config, &self.root);
        let entries = dedupe_and_sort(collector.entries(&pins));
        debug!(pins = pins.len(), entries = entries.len(), "entries collected");

        let sections = collector.sections(entries)?;
        let document = render::render_document(&self.config.product, &sections);

        let missing = missing_licenses(&sections);
        if !missing.is_empty() {
            return Err(Error::MissingLicenses {
                names: missing,
                hint: self.config.resolve_hint.clone(),
            });
        }

        Ok(document)
    }

    fn check_up_to_date(&self, output: &Path, document: &str) -> Result<()> {
        match fs::read_to_string(output) {
            Ok(existing) if existing == document => {
                println!("{} {} is up to date", style("[ok]").green(), output.display());
                Ok(())
            }
            Ok(_) => Err(Error::OutputStale {
                path: output.to_path_buf(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::OutputStale {
                path: output.to_path_buf(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let path = Config::create_default(&self.root)?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                let c = &self.config;
                println!("Root: {}", self.root.display());
                println!("Manifest: {}", c.manifest_path(&self.root).display());
                println!("Output: {}", c.output_path(&self.root).display());
                println!("Checkouts: {}", c.checkouts_path(&self.root).display());
                println!("Product: {}", c.product);
                println!("License files: {}", c.license_files.join(", "));
                println!("Notice files: {}", c.notice_files.join(", "));
                if c.local.enabled {
                    println!(
                        "Local dependency: {} ({})",
                        c.local.name,
                        self.root.join(&c.local.path).display()
                    );
                } else {
                    println!("Local dependency: disabled");
                }
                Ok(())
            }
        }
    }

    fn print_status(&self, msg: &str) {
        if self.cli.verbose {
            eprintln!("{} {}", style("→").cyan(), msg);
        }
    }
}
