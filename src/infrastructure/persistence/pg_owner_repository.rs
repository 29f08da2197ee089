//! PostgreSQL implementation of owner repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Invoice, Owner};
use crate::domain::repositories::OwnerRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::rows::OwnerRow;

const SELECT_OWNER_BY_ID: &str = r#"
    SELECT id, name, password_hash IS NOT NULL AS has_password, created_at
    FROM clients
    WHERE id = $1
    "#;

/// PostgreSQL repository for client accounts.
pub struct PgOwnerRepository {
    pool: Arc<PgPool>,
}

impl PgOwnerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnerRepository for PgOwnerRepository {
    async fn load(&self, owner_id: i64) -> Result<Owner, AppError> {
        let row = sqlx::query_as::<_, OwnerRow>(SELECT_OWNER_BY_ID)
            .bind(owner_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_invoice(&self, invoice: &Invoice) -> Result<Owner, AppError> {
        let row = sqlx::query_as::<_, OwnerRow>(SELECT_OWNER_BY_ID)
            .bind(invoice.client_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }
}
