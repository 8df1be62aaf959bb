//! User role and status enumerations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a user does on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    /// Orders food.
    Customer,

    /// Delivers it.
    Rider,
}

impl UserRole {
    /// Returns the role name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "Customer",
            UserRole::Rider => "Rider",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account status of a user.
///
/// ```text
/// Active -> Deactivated
/// ```
///
/// Deactivation is one-way; there is no reactivation path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    /// The account is usable.
    #[default]
    Active,

    /// The account has been shut off.
    Deactivated,
}

impl UserStatus {
    /// Returns true if the account can still be deactivated.
    pub fn can_deactivate(&self) -> bool {
        matches!(self, UserStatus::Active)
    }

    /// Returns true if the account is active.
    pub fn is_active(&self) -> bool {
        matches!(self, UserStatus::Active)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Deactivated => "Deactivated",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display() {
        assert_eq!(UserRole::Customer.to_string(), "Customer");
        assert_eq!(UserRole::Rider.to_string(), "Rider");
    }

    #[test]
    fn test_status_default_is_active() {
        assert_eq!(UserStatus::default(), UserStatus::Active);
        assert!(UserStatus::Active.is_active());
        assert!(!UserStatus::Deactivated.is_active());
    }

    #[test]
    fn test_deactivation_is_one_way() {
        assert!(UserStatus::Active.can_deactivate());
        assert!(!UserStatus::Deactivated.can_deactivate());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&UserRole::Rider).unwrap();
        assert_eq!(json, "\"Rider\"");
        let back: UserRole = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UserRole::Rider);
    }
}
