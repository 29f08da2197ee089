//! Domain layer containing the direct link model.
//!
//! It defines entities, the link model, and repository interfaces independent of
//! infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Owner, order and invoice records
//! - [`link`] - Link codes, categories, statuses and decode results
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Decoding logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod link;
pub mod repositories;
