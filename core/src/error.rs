//! Error types for unfolding and loading test cases.
//!
//! # Design
//! `UnfoldError` has one variant per empty candidate list so callers can tell
//! exactly which field was missing. `LoadError` is opaque: a
//! walk failure, an unreadable file, and malformed content all come out of
//! the same channel, with the offending path and the underlying cause
//! available through `path()` and `source()`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Returned by `Request::unfold` when a candidate list is empty.
///
/// Lists are checked in the order authority, method, uri; only the first
/// empty one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnfoldError {
    /// The request has no candidate authority.
    #[error("authority list is empty")]
    EmptyAuthorityList,

    /// The request has no candidate method.
    #[error("method list is empty")]
    EmptyMethodList,

    /// The request has no candidate uri.
    #[error("URI list is empty")]
    EmptyUriList,
}

/// Returned by `load_test_cases` when the walk, a read, or a parse fails.
#[derive(Debug, Error)]
#[error("failed to load test cases from {}", .path.display())]
pub struct LoadError {
    path: PathBuf,
    #[source]
    cause: Cause,
}

impl LoadError {
    pub(crate) fn new(path: impl Into<PathBuf>, cause: impl Into<Cause>) -> Self {
        Self {
            path: path.into(),
            cause: cause.into(),
        }
    }

    /// Path of the entry that could not be loaded.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Error)]
pub(crate) enum Cause {
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Read(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] serde_yaml::Error),
}
