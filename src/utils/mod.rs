//! Utility functions shared across layers.
//!
//! - [`link_format`] - Direct link code shape checks

pub mod link_format;
