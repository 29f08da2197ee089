//! Decode outcome classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exactly one status is produced per decode attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    /// The code failed the format check for its category.
    Invalid,
    /// Well-formed, but nothing in the store matches it.
    NotExist,
    /// Well-formed and once valid, now past its validity window.
    Expired,
    /// Resolves to a live entity.
    Valid,
}

impl LinkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkStatus::Invalid => "invalid",
            LinkStatus::NotExist => "not_exist",
            LinkStatus::Expired => "expired",
            LinkStatus::Valid => "valid",
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
