//! Cartesian expansion of a request template into concrete inputs.
//!
//! # Design
//! The iteration order is part of the contract: authority outermost, then
//! method, then uri innermost. Reports built from the unfolded inputs rely on
//! that order being stable from run to run. Duplicate candidate values are
//! kept as-is and produce duplicate inputs.

use std::sync::Arc;

use crate::error::UnfoldError;
use crate::types::{Headers, Request, TestCase};

/// One concrete combination of authority, method and uri.
///
/// `headers` points at a single mapping shared by every input unfolded from
/// the same request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub authority: String,
    pub method: String,
    pub uri: String,
    pub headers: Arc<Headers>,
}

impl Request {
    /// Number of inputs `unfold` would produce. Zero when any list is empty.
    pub fn combinations(&self) -> usize {
        self.authority.len() * self.method.len() * self.uri.len()
    }

    /// Expand every combination of the candidate lists into an `Input`.
    ///
    /// Fails on the first empty list, checked in the order authority,
    /// method, uri.
    pub fn unfold(&self) -> Result<Vec<Input>, UnfoldError> {
        if self.authority.is_empty() {
            return Err(UnfoldError::EmptyAuthorityList);
        }
        if self.method.is_empty() {
            return Err(UnfoldError::EmptyMethodList);
        }
        if self.uri.is_empty() {
            return Err(UnfoldError::EmptyUriList);
        }

        let headers = Arc::new(self.headers.clone());
        let mut out = Vec::with_capacity(self.combinations());
        for authority in &self.authority {
            for method in &self.method {
                for uri in &self.uri {
                    out.push(Input {
                        authority: authority.clone(),
                        method: method.clone(),
                        uri: uri.clone(),
                        headers: Arc::clone(&headers),
                    });
                }
            }
        }
        tracing::trace!(inputs = out.len(), "unfolded request");
        Ok(out)
    }
}

impl TestCase {
    pub fn unfold(&self) -> Result<Vec<Input>, UnfoldError> {
        self.request.unfold()
    }
}

/// Free-function form of [`Request::unfold`].
pub fn unfold(request: &Request) -> Result<Vec<Input>, UnfoldError> {
    request.unfold()
}
