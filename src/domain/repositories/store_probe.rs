//! Liveness check for the backing store.

use crate::error::AppError;
use async_trait::async_trait;

/// Answers whether the store behind the repositories is reachable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreProbe: Send + Sync {
    /// Issues a trivial round trip to the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
