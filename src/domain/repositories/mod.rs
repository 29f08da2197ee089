//! Repository trait definitions for the domain layer.
//!
//! These traits are the external collaborators the decoder depends on. They are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`OwnerRepository`] - Client account lookups
//! - [`OrderRepository`] - Order link unpacking and order loading
//! - [`InvoiceRepository`] - Invoice lookups
//! - [`StoreProbe`] - Store connectivity check

pub mod invoice_repository;
pub mod order_repository;
pub mod owner_repository;
pub mod store_probe;

pub use invoice_repository::InvoiceRepository;
pub use order_repository::OrderRepository;
pub use owner_repository::OwnerRepository;
pub use store_probe::StoreProbe;

#[cfg(test)]
pub use invoice_repository::MockInvoiceRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use owner_repository::MockOwnerRepository;
#[cfg(test)]
pub use store_probe::MockStoreProbe;
