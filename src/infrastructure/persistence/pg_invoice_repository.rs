//! PostgreSQL implementation of invoice repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Invoice;
use crate::domain::repositories::InvoiceRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::rows::InvoiceRow;

/// PostgreSQL repository for invoices.
pub struct PgInvoiceRepository {
    pool: Arc<PgPool>,
}

impl PgInvoiceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceRepository for PgInvoiceRepository {
    async fn find_by_code(&self, id: Uuid) -> Result<Option<Invoice>, AppError> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            r#"
            SELECT id, client_id, amount_minor, currency, created_at
            FROM invoices
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Invoice::from))
    }
}
