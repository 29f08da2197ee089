//! Order entity referenced by order direct links.

use chrono::{DateTime, Utc};

/// An order placed by an owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    pub owner_id: i64,
    pub number: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new Order instance.
    pub fn new(id: i64, owner_id: i64, number: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            owner_id,
            number,
            created_at,
        }
    }
}
