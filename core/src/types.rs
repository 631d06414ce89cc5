//! Declaration model for routing test cases.
//!
//! # Design
//! These types mirror the on-disk declaration schema one-to-one. Nothing is
//! validated at construction time: a `Request` with an empty candidate list
//! deserializes fine and only fails once it is unfolded. Missing or `null`
//! lists and header maps are read as empty so that the failure surfaces as a
//! precise `UnfoldError` rather than an opaque parse error.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Header mapping shared by every input unfolded from one request.
pub type Headers = BTreeMap<String, String>;

/// Contents of one declaration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    #[serde(rename = "testCases", default, deserialize_with = "null_as_default")]
    pub test_cases: Vec<TestCase>,
}

impl Declaration {
    /// Deserialize one declaration file.
    ///
    /// Empty, whitespace-only or null content is a declaration with no test
    /// cases.
    pub fn from_slice(content: &[u8]) -> Result<Self, serde_yaml::Error> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_slice::<Option<Self>>(content)?.unwrap_or_default())
    }
}

/// A single routing assertion: every input unfolded from `request` is
/// expected to land on `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(default)]
    pub description: String,
    pub request: Request,
    pub destination: Destination,
}

/// Request template holding the candidate values for each field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default, deserialize_with = "null_as_default")]
    pub authority: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: Headers,
}

/// Where every input of a test case is expected to be routed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Destination {
    pub host: String,
    pub port: Port,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port.number)
    }
}

/// Destination port, nested as `port: { number: .. }` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Port {
    pub number: i16,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
