//! Shared contract of the per-category resolvers.

use crate::domain::link::{LinkCategory, LinkCode, LinkContext};
use crate::error::AppError;
use async_trait::async_trait;

/// Turns a raw code of one category into a classified [`LinkContext`].
///
/// Every outcome of a decode attempt is a status in the returned context. `Err`
/// is reserved for infrastructure failures of the store.
#[async_trait]
pub trait LinkResolver: Send + Sync {
    /// Entity the resolved link points at.
    type Target: Send;

    fn category(&self) -> LinkCategory;

    /// Checks the code shape, then looks it up.
    ///
    /// `load_target` controls whether the target entity is loaded into the
    /// context of a valid link.
    async fn resolve(
        &self,
        code: &LinkCode,
        load_target: bool,
    ) -> Result<LinkContext<Self::Target>, AppError>;
}
