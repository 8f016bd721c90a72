//! # Input Discovery
//!
//! Expands the file and directory paths given on the command line into the
//! set of YAML files to lint. Directories are walked recursively;
//! `.yaml` files are linted, `.yml` files are collected separately so the
//! driver can warn about the legacy extension, and anything else is
//! skipped.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// The classified result of expanding the command-line inputs.
#[derive(Debug, Default)]
pub struct DiscoveredFiles {
    /// Files to schema-validate, sorted, no duplicates.
    pub yaml: Vec<PathBuf>,
    /// Files with the legacy `.yml` extension; warned about, not validated.
    pub legacy_yml: Vec<PathBuf>,
    /// Inputs named on the command line that do not exist.
    pub missing: Vec<PathBuf>,
}

impl DiscoveredFiles {
    /// Total number of discovered lintable and legacy files.
    pub fn len(&self) -> usize {
        self.yaml.len() + self.legacy_yml.len()
    }

    /// Whether nothing lintable was found.
    pub fn is_empty(&self) -> bool {
        self.yaml.is_empty() && self.legacy_yml.is_empty()
    }
}

/// Expand the given inputs into classified YAML files.
pub fn discover(inputs: &[PathBuf]) -> DiscoveredFiles {
    let mut yaml = BTreeSet::new();
    let mut legacy = BTreeSet::new();
    let mut missing = Vec::new();

    for input in inputs {
        if input.is_dir() {
            walk(input, &mut yaml, &mut legacy);
        } else if input.is_file() {
            classify(input, &mut yaml, &mut legacy);
        } else {
            missing.push(input.clone());
        }
    }

    DiscoveredFiles {
        yaml: yaml.into_iter().collect(),
        legacy_yml: legacy.into_iter().collect(),
        missing,
    }
}

fn walk(dir: &Path, yaml: &mut BTreeSet<PathBuf>, legacy: &mut BTreeSet<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory");
            return;
        }
    };
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_dir() {
            walk(&path, yaml, legacy);
        } else {
            classify(&path, yaml, legacy);
        }
    }
}

fn classify(path: &Path, yaml: &mut BTreeSet<PathBuf>, legacy: &mut BTreeSet<PathBuf>) {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") => {
            yaml.insert(path.to_path_buf());
        }
        Some("yml") => {
            legacy.insert(path.to_path_buf());
        }
        _ => {
            tracing::debug!(path = %path.display(), "skipping non-YAML file");
        }
    }
}
