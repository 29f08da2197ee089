//! PostgreSQL implementation of order repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Order, Owner};
use crate::domain::link::{LinkCode, UnpackedOrderLink};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::rows::OrderRow;

/// PostgreSQL repository for order links and orders.
///
/// Code unpacking is delegated to the `direct_link_unpack` SQL function, which
/// answers with an `(owner_id, order_id, registered)` triple.
pub struct PgOrderRepository {
    pool: Arc<PgPool>,
}

impl PgOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn unpack_code(&self, code: &LinkCode) -> Result<UnpackedOrderLink, AppError> {
        let (owner_id, order_id, registered) = sqlx::query_as::<_, (i64, i64, i32)>(
            "SELECT owner_id, order_id, registered FROM direct_link_unpack($1)",
        )
        .bind(code.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(UnpackedOrderLink::from_raw(owner_id, order_id, registered))
    }

    async fn load(&self, owner: &Owner, order_id: i64) -> Result<Order, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, client_id, number, created_at
            FROM orders
            WHERE id = $1 AND client_id = $2
            "#,
        )
        .bind(order_id)
        .bind(owner.id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
