//! Application layer services implementing the decode pipeline.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers
//! and the command-line tool.
//!
//! # Available Services
//!
//! - [`services::LinkDecodingService`] - Category dispatch and outcome logging
//! - [`services::OrderLinkResolver`] - Order code resolution
//! - [`services::InvoiceLinkResolver`] - Invoice code resolution

pub mod services;
