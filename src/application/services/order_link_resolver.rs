//! Resolver for order direct links.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::application::services::link_resolver::LinkResolver;
use crate::application::services::lookup::with_deadline;
use crate::domain::entities::Order;
use crate::domain::link::{LinkCategory, LinkCode, OrderLinkContext, UnpackedOrderLink};
use crate::domain::repositories::{OrderRepository, OwnerRepository};
use crate::error::AppError;
use crate::utils::link_format::is_well_formed;

/// Resolves 32-character hex order codes.
///
/// Well-formed codes are unpacked by the store into an owner/order pair, an
/// expiry notice, or nothing. Owner and order are loaded only for live links,
/// and the order only when the caller asks for it.
pub struct OrderLinkResolver {
    owner_repository: Arc<dyn OwnerRepository>,
    order_repository: Arc<dyn OrderRepository>,
    lookup_timeout: Option<Duration>,
}

impl OrderLinkResolver {
    /// Creates a new order link resolver without a lookup deadline.
    pub fn new(
        owner_repository: Arc<dyn OwnerRepository>,
        order_repository: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            owner_repository,
            order_repository,
            lookup_timeout: None,
        }
    }

    /// Sets the deadline applied to each store call.
    pub fn with_lookup_timeout(mut self, lookup_timeout: Option<Duration>) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }
}

#[async_trait]
impl LinkResolver for OrderLinkResolver {
    type Target = Order;

    fn category(&self) -> LinkCategory {
        LinkCategory::Order
    }

    async fn resolve(
        &self,
        code: &LinkCode,
        load_target: bool,
    ) -> Result<OrderLinkContext, AppError> {
        if !is_well_formed(code.as_str(), LinkCategory::Order) {
            debug!(code = %code, "Malformed order link code");
            return Ok(OrderLinkContext::invalid(code.clone()));
        }

        let unpacked = with_deadline(
            self.lookup_timeout,
            "unpack_order_code",
            self.order_repository.unpack_code(code),
        )
        .await?;

        match unpacked {
            UnpackedOrderLink::NotFound => {
                debug!(code = %code, "Order link not found");
                Ok(OrderLinkContext::not_exist(code.clone()))
            }
            UnpackedOrderLink::Expired { registered } => {
                debug!(code = %code, registered, "Order link expired");
                Ok(OrderLinkContext::expired(code.clone(), registered))
            }
            UnpackedOrderLink::Found { owner_id, order_id } => {
                let owner = with_deadline(
                    self.lookup_timeout,
                    "load_owner",
                    self.owner_repository.load(owner_id),
                )
                .await?;

                let order = if load_target {
                    Some(
                        with_deadline(
                            self.lookup_timeout,
                            "load_order",
                            self.order_repository.load(&owner, order_id),
                        )
                        .await?,
                    )
                } else {
                    None
                };

                debug!(code = %code, owner_id, order_id, "Order link resolved");
                Ok(OrderLinkContext::valid(code.clone(), owner, order))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Owner;
    use crate::domain::link::LinkStatus;
    use crate::domain::repositories::{MockOrderRepository, MockOwnerRepository};
    use chrono::Utc;
    use serde_json::json;

    const CODE: &str = "0123456789ABCDEF0123456789ABCDEF";

    fn create_test_owner(id: i64, has_password: bool) -> Owner {
        Owner::new(id, "Acme".to_string(), has_password, Utc::now())
    }

    fn create_test_order(id: i64, owner_id: i64) -> Order {
        Order::new(id, owner_id, format!("A-{id}"), Utc::now())
    }

    fn resolver(owners: MockOwnerRepository, orders: MockOrderRepository) -> OrderLinkResolver {
        OrderLinkResolver::new(Arc::new(owners), Arc::new(orders))
    }

    #[tokio::test]
    async fn test_malformed_code_is_invalid_without_store_calls() {
        let mut owners = MockOwnerRepository::new();
        let mut orders = MockOrderRepository::new();
        owners.expect_load().times(0);
        orders.expect_unpack_code().times(0);
        orders.expect_load().times(0);

        let resolver = resolver(owners, orders);
        let lowercase = CODE.to_lowercase();

        for code in [
            "",
            "abc",
            lowercase.as_str(),
            "0123ABCD-4567-89AB-CDEF-0123456789AB",
        ] {
            let ctx = resolver.resolve(&LinkCode::new(code), true).await.unwrap();
            assert_eq!(ctx.status(), LinkStatus::Invalid);
            assert!(ctx.owner().is_none());
            assert!(ctx.target().is_none());
        }
    }

    #[tokio::test]
    async fn test_not_found_sentinel_is_not_exist() {
        let mut owners = MockOwnerRepository::new();
        let mut orders = MockOrderRepository::new();
        orders
            .expect_unpack_code()
            .times(1)
            .returning(|_| Ok(UnpackedOrderLink::from_raw(-1, -1, 0)));
        owners.expect_load().times(0);
        orders.expect_load().times(0);

        let ctx = resolver(owners, orders)
            .resolve(&LinkCode::new(CODE), true)
            .await
            .unwrap();

        assert_eq!(ctx.status(), LinkStatus::NotExist);
        assert!(ctx.owner().is_none());
        assert!(ctx.target().is_none());
    }

    #[tokio::test]
    async fn test_half_negative_pair_is_not_exist_without_loads() {
        let mut owners = MockOwnerRepository::new();
        let mut orders = MockOrderRepository::new();
        orders
            .expect_unpack_code()
            .times(1)
            .returning(|_| Ok(UnpackedOrderLink::from_raw(42, -1, 1)));
        owners.expect_load().times(0);
        orders.expect_load().times(0);

        let ctx = resolver(owners, orders)
            .resolve(&LinkCode::new(CODE), true)
            .await
            .unwrap();

        assert_eq!(ctx.status(), LinkStatus::NotExist);
        assert!(ctx.owner().is_none());
        assert!(!ctx.is_registered());
    }

    #[tokio::test]
    async fn test_expired_sentinel_reports_registration() {
        let mut owners = MockOwnerRepository::new();
        let mut orders = MockOrderRepository::new();
        orders
            .expect_unpack_code()
            .times(1)
            .returning(|_| Ok(UnpackedOrderLink::from_raw(-2, 0, 1)));
        owners.expect_load().times(0);

        let ctx = resolver(owners, orders)
            .resolve(&LinkCode::new(CODE), true)
            .await
            .unwrap();

        assert_eq!(ctx.status(), LinkStatus::Expired);
        assert!(ctx.is_registered());
        assert!(ctx.owner().is_none());
        assert!(ctx.target().is_none());
    }

    #[tokio::test]
    async fn test_valid_without_loading_target() {
        let mut owners = MockOwnerRepository::new();
        let mut orders = MockOrderRepository::new();
        orders
            .expect_unpack_code()
            .withf(|code| code.as_str() == CODE)
            .times(1)
            .returning(|_| Ok(UnpackedOrderLink::from_raw(42, 7, 0)));
        owners
            .expect_load()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|id| Ok(create_test_owner(id, false)));
        orders.expect_load().times(0);

        let ctx = resolver(owners, orders)
            .resolve(&LinkCode::new(CODE), false)
            .await
            .unwrap();

        assert_eq!(ctx.status(), LinkStatus::Valid);
        assert_eq!(ctx.owner().map(|o| o.id), Some(42));
        assert!(ctx.target().is_none());
        assert!(!ctx.is_registered());
    }

    #[tokio::test]
    async fn test_valid_with_loading_target() {
        let mut owners = MockOwnerRepository::new();
        let mut orders = MockOrderRepository::new();
        orders
            .expect_unpack_code()
            .times(1)
            .returning(|_| Ok(UnpackedOrderLink::from_raw(42, 7, 0)));
        owners
            .expect_load()
            .times(1)
            .returning(|id| Ok(create_test_owner(id, true)));
        orders
            .expect_load()
            .withf(|owner, order_id| owner.id == 42 && *order_id == 7)
            .times(1)
            .returning(|owner, order_id| Ok(create_test_order(order_id, owner.id)));

        let ctx = resolver(owners, orders)
            .resolve(&LinkCode::new(CODE), true)
            .await
            .unwrap();

        assert_eq!(ctx.status(), LinkStatus::Valid);
        assert!(ctx.is_registered());
        let order = ctx.target().unwrap();
        assert_eq!(order.id, 7);
        assert_eq!(order.owner_id, 42);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let owners = MockOwnerRepository::new();
        let mut orders = MockOrderRepository::new();
        orders
            .expect_unpack_code()
            .times(1)
            .returning(|_| Err(AppError::unavailable("Data store unavailable", json!({}))));

        let result = resolver(owners, orders)
            .resolve(&LinkCode::new(CODE), false)
            .await;

        assert!(result.unwrap_err().is_unavailable());
    }

    #[test]
    fn test_category() {
        let resolver = resolver(MockOwnerRepository::new(), MockOrderRepository::new());
        assert_eq!(resolver.category(), LinkCategory::Order);
    }
}
