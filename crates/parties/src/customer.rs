use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use brewsim_core::{CustomerId, DomainError, DomainResult};

/// A loyalty-card customer.
///
/// Loyalty points are set at seed time and never change afterwards; orders
/// may reference a customer or be walk-ins with no customer at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub loyalty_points: i64,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Validate and build a customer that has not been persisted yet.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        loyalty_points: i64,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let email = email.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !email.contains('@') {
            return Err(DomainError::validation("email must contain '@'"));
        }
        if loyalty_points < 0 {
            return Err(DomainError::validation("loyalty points cannot be negative"));
        }
        Ok(Self {
            id: CustomerId::unassigned(),
            name,
            email,
            phone: phone.into(),
            loyalty_points,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_valid_customer() {
        let c = Customer::new("Ada Mills", "ada@example.com", "555-0101", 10, Utc::now()).unwrap();
        assert_eq!(c.id, CustomerId::unassigned());
        assert_eq!(c.loyalty_points, 10);
    }

    #[test]
    fn rejects_empty_name() {
        let err = Customer::new("  ", "a@example.com", "555-0101", 0, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_malformed_email() {
        let err = Customer::new("Ada", "not-an-email", "555-0101", 0, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_negative_loyalty_points() {
        let err = Customer::new("Ada", "a@example.com", "555-0101", -1, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
