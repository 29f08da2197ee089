//! Repository trait for invoice lookups.

use crate::domain::entities::Invoice;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Read access to invoices.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgInvoiceRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Finds an invoice by the UUID carried in its direct link.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Invoice))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be reached.
    async fn find_by_code(&self, id: Uuid) -> Result<Option<Invoice>, AppError>;
}
