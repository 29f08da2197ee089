//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries with bound parameters.
//!
//! # Repositories
//!
//! - [`PgOwnerRepository`] - Client account lookups
//! - [`PgOrderRepository`] - Order link unpacking and order loading
//! - [`PgInvoiceRepository`] - Invoice lookups
//! - [`PgStoreProbe`] - Connectivity check for health reporting

pub mod pg_invoice_repository;
pub mod pg_order_repository;
pub mod pg_owner_repository;
pub mod pg_store_probe;
mod rows;

pub use pg_invoice_repository::PgInvoiceRepository;
pub use pg_order_repository::PgOrderRepository;
pub use pg_owner_repository::PgOwnerRepository;
pub use pg_store_probe::PgStoreProbe;
