//! Aggregates test cases from a tree of declaration files.
//!
//! # Design
//! The walk is sorted by file name so the aggregate order is reproducible:
//! within a directory, entries are visited in byte order of their names and
//! a subdirectory is descended into at its sorted position. Every entry that
//! is not a directory is treated as a declaration file. The first failure
//! aborts the whole load; callers never see a partial aggregate.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::LoadError;
use crate::types::{Declaration, TestCase};

/// Load and concatenate the test cases of every declaration file under
/// `root`, in traversal order and, within a file, in declared order.
pub fn load_test_cases(root: impl AsRef<Path>) -> Result<Vec<TestCase>, LoadError> {
    let root = root.as_ref();
    let mut out = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            LoadError::new(path, e)
        })?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            tracing::trace!(path = %path.display(), "descending into directory");
            continue;
        }

        let content = fs::read(path).map_err(|e| LoadError::new(path, e))?;
        let declaration = Declaration::from_slice(&content).map_err(|e| LoadError::new(path, e))?;

        if declaration.test_cases.is_empty() {
            tracing::trace!(path = %path.display(), "declaration has no test cases");
            continue;
        }

        tracing::debug!(
            path = %path.display(),
            test_cases = declaration.test_cases.len(),
            "loaded declaration file"
        );
        out.extend(declaration.test_cases);
    }

    tracing::debug!(root = %root.display(), test_cases = out.len(), "loaded test cases");
    Ok(out)
}
