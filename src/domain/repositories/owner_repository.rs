//! Repository trait for owner lookups.

use crate::domain::entities::{Invoice, Owner};
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to client accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOwnerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Loads an owner by id.
    ///
    /// Only called with ids produced by a successful unpack, so a missing row is
    /// a data inconsistency rather than a "not found" outcome.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be reached.
    /// Returns [`AppError::Internal`] if the owner does not exist.
    async fn load(&self, owner_id: i64) -> Result<Owner, AppError>;

    /// Loads the client an invoice was issued to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be reached.
    /// Returns [`AppError::Internal`] if the client does not exist.
    async fn find_by_invoice(&self, invoice: &Invoice) -> Result<Owner, AppError>;
}
