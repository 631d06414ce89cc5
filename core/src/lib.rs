//! Expansion of declarative routing test cases into concrete request inputs.
//!
//! # Overview
//! A declaration file lists test cases. Each test case gives candidate
//! values for authority, method and uri, a fixed header set, and the
//! destination every resulting request is expected to be routed to.
//! [`load_test_cases`] gathers the test cases of a whole directory tree and
//! [`Request::unfold`] turns one request template into every concrete
//! combination of its candidate values.
//!
//! # Design
//! - Everything is synchronous and free of shared state; the only I/O is
//!   reading declaration files.
//! - Requests are not validated when loaded. An empty candidate list is
//!   reported by `unfold`, naming the field that was empty.
//! - Executing the unfolded inputs against a real router is left to the
//!   caller.

pub mod error;
pub mod loader;
pub mod types;
pub mod unfold;

pub use error::{LoadError, UnfoldError};
pub use loader::load_test_cases;
pub use types::{Declaration, Destination, Headers, Port, Request, TestCase};
pub use unfold::{unfold, Input};
