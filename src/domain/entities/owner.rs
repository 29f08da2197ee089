//! Owner entity: the client account a direct link belongs to.

use chrono::{DateTime, Utc};

/// A client account.
///
/// `has_password` is set once the client has completed account setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub id: i64,
    pub name: String,
    pub has_password: bool,
    pub created_at: DateTime<Utc>,
}

impl Owner {
    /// Creates a new Owner instance.
    pub fn new(id: i64, name: String, has_password: bool, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            has_password,
            created_at,
        }
    }

    /// Returns true if the owner has finished registration.
    pub fn is_registered(&self) -> bool {
        self.has_password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_creation() {
        let now = Utc::now();
        let owner = Owner::new(42, "Acme".to_string(), true, now);

        assert_eq!(owner.id, 42);
        assert_eq!(owner.name, "Acme");
        assert_eq!(owner.created_at, now);
        assert!(owner.is_registered());
    }

    #[test]
    fn test_owner_without_password_is_not_registered() {
        let owner = Owner::new(1, "Guest".to_string(), false, Utc::now());
        assert!(!owner.is_registered());
    }
}
