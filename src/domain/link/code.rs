//! Raw direct link code as extracted from a URL.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque direct link token.
///
/// Holds whatever the caller extracted from the URL, well-formed or not;
/// shape checks live in [`crate::utils::link_format`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkCode(String);

impl LinkCode {
    /// Wraps a raw code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for LinkCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LinkCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for LinkCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
