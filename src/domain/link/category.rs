//! Direct link categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of entity a direct link points at.
///
/// The set is closed: every category has exactly one format check and one
/// resolver, selected by pattern match in
/// [`crate::application::services::LinkDecodingService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkCategory {
    Order,
    Invoice,
}

impl LinkCategory {
    pub const ALL: [LinkCategory; 2] = [LinkCategory::Order, LinkCategory::Invoice];

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkCategory::Order => "order",
            LinkCategory::Invoice => "invoice",
        }
    }
}

impl fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown link category '{0}', expected 'order' or 'invoice'")]
pub struct ParseCategoryError(pub String);

impl FromStr for LinkCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LinkCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
