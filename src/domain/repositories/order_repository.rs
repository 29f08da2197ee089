//! Repository trait for order links and orders.

use crate::domain::entities::{Order, Owner};
use crate::domain::link::{LinkCode, UnpackedOrderLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Access to order direct link mapping and order records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOrderRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Maps a well-formed order link code to its owner and order.
    ///
    /// The mapping itself is store-side logic; implementations classify the
    /// raw answer with [`UnpackedOrderLink::from_raw`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be reached.
    async fn unpack_code(&self, code: &LinkCode) -> Result<UnpackedOrderLink, AppError>;

    /// Loads an order belonging to `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be reached.
    /// Returns [`AppError::Internal`] if the order does not exist for that owner.
    async fn load(&self, owner: &Owner, order_id: i64) -> Result<Order, AppError>;
}
