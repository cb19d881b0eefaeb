//! Test fixture helpers for creating build output directories
//!
//! Provides utilities for laying out dist folders with files of exact sizes,
//! plus the event payload files the Actions runner writes.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Builds a directory of files with known sizes
pub struct DistBuilder {
    name: String,
    files: Vec<(String, usize)>,
    subdirs: Vec<String>,
}

impl DistBuilder {
    /// Start a directory called `name` inside a fresh temp dir
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            files: Vec::new(),
            subdirs: Vec::new(),
        }
    }

    /// Add a file of exactly `size` bytes
    pub fn file(mut self, name: &str, size: usize) -> Self {
        self.files.push((name.to_string(), size));
        self
    }

    /// Add an empty subdirectory
    pub fn subdir(mut self, name: &str) -> Self {
        self.subdirs.push(name.to_string());
        self
    }

    /// Write everything to disk
    ///
    /// # Returns
    ///
    /// A tuple of (TempDir, PathBuf to the directory) - the TempDir must be kept alive
    pub fn build(self) -> anyhow::Result<(TempDir, PathBuf)> {
        let temp_dir = TempDir::new()?;
        let dist = self.write_into(temp_dir.path())?;
        Ok((temp_dir, dist))
    }

    /// Write everything below `root` and return the directory path
    pub fn write_into(self, root: &Path) -> anyhow::Result<PathBuf> {
        let dist = root.join(&self.name);
        fs::create_dir_all(&dist)?;
        for (name, size) in &self.files {
            fs::write(dist.join(name), vec![b'x'; *size])?;
        }
        for name in &self.subdirs {
            fs::create_dir_all(dist.join(name))?;
        }
        Ok(dist)
    }
}

/// Current and baseline builds used across the integration tests
///
/// app.js grows from 1.46 MB to 1.95 MB, vendor.js is unchanged, and the
/// source map only exists in the current build.
pub fn current_and_baseline() -> anyhow::Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let current = DistBuilder::new("dist")
        .file("app.js", 2_048_000)
        .file("vendor.js", 512_000)
        .file("app.js.map", 9_000)
        .subdir("chunks")
        .write_into(temp_dir.path())?;
    let baseline = DistBuilder::new("base")
        .file("app.js", 1_536_000)
        .file("vendor.js", 512_000)
        .write_into(temp_dir.path())?;
    Ok((temp_dir, current, baseline))
}

/// Write a `pull_request` event payload for PR `number`
pub fn pull_request_event(dir: &Path, number: u64) -> anyhow::Result<PathBuf> {
    let path = dir.join("event.json");
    fs::write(
        &path,
        format!(
            r#"{{"action":"synchronize","number":{number},"pull_request":{{"number":{number}}}}}"#
        ),
    )?;
    Ok(path)
}

/// Write a `push` event payload
pub fn push_event(dir: &Path) -> anyhow::Result<PathBuf> {
    let path = dir.join("event.json");
    fs::write(&path, r#"{"ref":"refs/heads/main","after":"0123abcd"}"#)?;
    Ok(path)
}
