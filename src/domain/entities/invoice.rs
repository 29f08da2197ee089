//! Invoice entity referenced by invoice direct links.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An invoice issued to a client.
///
/// The invoice id doubles as its direct link code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub id: Uuid,
    pub client_id: i64,
    pub amount_minor: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    /// Creates a new Invoice instance.
    pub fn new(
        id: Uuid,
        client_id: i64,
        amount_minor: i64,
        currency: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            client_id,
            amount_minor,
            currency,
            created_at,
        }
    }
}
