// SPDX-License-Identifier: Apache-2.0
// © vomap contributors

#![allow(missing_docs)]
//! End-to-end runs of the `vomap` binary over fixture documents.
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use vomap_dry_tests::fixtures;

fn write_fixture(dir: &TempDir, name: &str, xml: &str) -> anyhow::Result<PathBuf> {
    let path = dir.path().join(name);
    std::fs::write(&path, xml)?;
    Ok(path)
}

/// `vomap` with an isolated, empty config directory.
fn vomap(config_dir: &Path) -> anyhow::Result<Command> {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("vomap")?;
    cmd.arg("--config-dir").arg(config_dir).env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn prints_matches_and_unrolled_rows() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let file = write_fixture(&dir, "positions.xml", fixtures::POSITIONS)?;

    vomap(&dir.path().join("config"))?
        .arg(&file)
        .args(["--type", "sample:catalog.SkyCoordinate", "--unroll"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 instance(s) of sample:catalog.SkyCoordinate"))
        .stdout(predicate::str::contains("#0 sample:catalog.SkyCoordinate (pos) rows=3 template"))
        .stdout(predicate::str::contains("unrolled #0:"))
        .stdout(predicate::str::contains("longitude: 123.0337 deg"))
        .stdout(predicate::str::contains("latitude: 45.25 deg"))
        .stdout(predicate::str::ends_with("warnings: 0\n"));
    Ok(())
}

#[test]
fn diagnostics_follow_the_instances() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let file = write_fixture(&dir, "dangling.xml", fixtures::DANGLING_FRAME)?;

    vomap(&dir.path().join("config"))?
        .arg(&file)
        .args(["--type", "sample:catalog.SkyCoordinate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 instance(s)"))
        .stdout(predicate::str::contains("frame: null"))
        .stdout(predicate::str::contains("warnings: 1\n  - dangling reference no-such-frame"));
    Ok(())
}

#[test]
fn stored_options_apply_and_flags_override_them() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = dir.path().join("config");
    std::fs::create_dir_all(&config)?;
    std::fs::write(config.join("reader.json"), r#"{ "enforce_min_occurs": true }"#)?;
    let file = write_fixture(&dir, "values.xml", fixtures::VALUES)?;

    vomap(&config)?
        .arg(&file)
        .args(["--type", "sample:test.MultiObj"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warnings: 2"))
        .stdout(predicate::str::contains("sample:test.MultiObj.a is required"));

    // Depth zero skips every element regardless of the stored limit.
    vomap(&config)?
        .arg(&file)
        .args(["--type", "sample:test.MultiObj", "--max-depth", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 instance(s)"))
        .stdout(predicate::str::contains("skipped element"));
    Ok(())
}

#[test]
fn unknown_type_is_reported_without_failing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let file = write_fixture(&dir, "frames.xml", fixtures::SHARED_FRAME)?;

    vomap(&dir.path().join("config"))?
        .arg(&file)
        .args(["--type", "nope:Thing"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nope:Thing"));
    Ok(())
}

#[test]
fn missing_file_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    vomap(dir.path())?
        .arg(dir.path().join("absent.xml"))
        .args(["--type", "coords:Point"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.xml"));
    Ok(())
}

#[test]
fn malformed_xml_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let file = write_fixture(&dir, "broken.xml", "<VOTABLE><VODML>")?;
    vomap(dir.path())?
        .arg(&file)
        .args(["--type", "coords:Point"])
        .assert()
        .failure();
    Ok(())
}
