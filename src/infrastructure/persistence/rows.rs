//! Row types shared by the PostgreSQL repositories.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{Invoice, Order, Owner};

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct OwnerRow {
    pub id: i64,
    pub name: String,
    pub has_password: bool,
    pub created_at: DateTime<Utc>,
}

impl From<OwnerRow> for Owner {
    fn from(r: OwnerRow) -> Self {
        Owner::new(r.id, r.name, r.has_password, r.created_at)
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct OrderRow {
    pub id: i64,
    pub client_id: i64,
    pub number: String,
    pub created_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(r: OrderRow) -> Self {
        Order::new(r.id, r.client_id, r.number, r.created_at)
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct InvoiceRow {
    pub id: Uuid,
    pub client_id: i64,
    pub amount_minor: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl From<InvoiceRow> for Invoice {
    fn from(r: InvoiceRow) -> Self {
        Invoice::new(r.id, r.client_id, r.amount_minor, r.currency, r.created_at)
    }
}
