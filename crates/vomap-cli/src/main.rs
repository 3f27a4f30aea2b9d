// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! `vomap`: print the instances of one type found in an annotated VOTable.
//!
//! Reader options come from the config store (`reader.json`); flags override
//! them. Output goes to stdout, logs to stderr.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use vomap_config_fs::FsConfigStore;
use vomap_core::{ConfigService, ConfigStore, ReaderOptions};
use vomap_votable::{Document, ReadError, Reader};

mod render;

#[derive(Parser, Debug)]
#[command(author, version, about = "Map an annotated VOTable onto model instances")]
struct Args {
    /// VOTable document to read
    file: PathBuf,
    /// Model type id to search for (subtypes match too), e.g. coords:Point
    #[arg(long = "type")]
    type_id: String,
    /// Also print one scalar instance per row of every template match
    #[arg(long)]
    unroll: bool,
    /// Report required fields that resolved to nothing
    #[arg(long)]
    strict: bool,
    /// Debug-level logging on stderr (RUST_LOG still wins when set)
    #[arg(long)]
    verbose: bool,
    /// Override the maximum nesting depth
    #[arg(long)]
    max_depth: Option<usize>,
    /// Read options from this directory instead of the user config dir
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut options = load_options(args.config_dir.as_deref());
    if args.strict {
        options.enforce_min_occurs = true;
    }
    if let Some(depth) = args.max_depth {
        options.max_depth = depth;
    }
    debug!(?options, "reader options");

    let registry = vomap_models::standard_registry().context("building type registry")?;
    let document = Document::open(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let mut reader = Reader::with_options(document, &registry, options);

    let found = match reader.find_instances(&args.type_id) {
        Ok(found) => found,
        Err(ReadError::Schema(err)) => {
            writeln!(io::stderr().lock(), "vomap: {err}")?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let mut out = io::stdout().lock();
    writeln!(out, "{} instance(s) of {}", found.len(), args.type_id)?;
    for handle in &found {
        render::instance(&mut out, &reader, *handle, 0)?;
    }
    if args.unroll {
        for handle in &found {
            if !reader.is_template(*handle) {
                continue;
            }
            writeln!(out, "unrolled #{}:", handle.index())?;
            for row in reader.unroll(*handle) {
                render::instance(&mut out, &reader, row, 2)?;
            }
        }
    }
    render::diagnostics(&mut out, reader.diagnostics())?;
    Ok(())
}

/// Stored options, or the defaults when the store is missing or unreadable.
fn load_options(config_dir: Option<&Path>) -> ReaderOptions {
    let store = match config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    };
    match store {
        Ok(store) => options_from(&ConfigService::new(store)),
        Err(err) => {
            warn!(%err, "no config store, using default reader options");
            ReaderOptions::default()
        }
    }
}

fn options_from<S: ConfigStore>(service: &ConfigService<S>) -> ReaderOptions {
    service.reader_options().unwrap_or_else(|err| {
        warn!(%err, "falling back to default reader options");
        ReaderOptions::default()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use vomap_dry_tests::InMemoryConfigStore;

    #[test]
    fn stored_options_are_used() {
        let stored = ReaderOptions {
            max_depth: 4,
            ..ReaderOptions::default()
        };
        let store = InMemoryConfigStore::with_options(&stored).unwrap();
        assert_eq!(options_from(&ConfigService::new(store)), stored);
    }

    #[test]
    fn unreadable_config_falls_back_to_defaults() {
        let store = InMemoryConfigStore::with_options(&ReaderOptions {
            enforce_min_occurs: true,
            ..ReaderOptions::default()
        })
        .unwrap();
        store.set_unreadable(true);
        let options = options_from(&ConfigService::new(store.clone()));
        assert_eq!(options, ReaderOptions::default());
        assert_eq!(store.load_count(), 1);
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let store = InMemoryConfigStore::with_raw_options(b"max_depth = 3");
        assert_eq!(
            options_from(&ConfigService::new(store)),
            ReaderOptions::default()
        );
    }
}
