//! Restaurant status machine.

use serde::{Deserialize, Serialize};

/// The status of a restaurant on the platform.
///
/// Status transitions:
/// ```text
/// PendingApproval ──► Active ──► Suspended
/// ```
///
/// `Closed` is a defined status with no transition into it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RestaurantStatus {
    /// Registered but not yet approved by the platform.
    #[default]
    PendingApproval,

    /// Approved and able to take orders.
    Active,

    /// Taken off the platform by an operator.
    Suspended,

    /// Permanently closed.
    Closed,
}

impl RestaurantStatus {
    /// Returns true if the restaurant can be approved in this status.
    pub fn can_approve(&self) -> bool {
        matches!(self, RestaurantStatus::PendingApproval)
    }

    /// Returns true if the restaurant can be suspended in this status.
    pub fn can_suspend(&self) -> bool {
        matches!(self, RestaurantStatus::Active)
    }

    /// Returns true if the restaurant can accept orders in this status.
    pub fn can_accept_orders(&self) -> bool {
        matches!(self, RestaurantStatus::Active)
    }

    /// Returns true if no further transitions are defined from this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RestaurantStatus::Suspended | RestaurantStatus::Closed)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RestaurantStatus::PendingApproval => "PendingApproval",
            RestaurantStatus::Active => "Active",
            RestaurantStatus::Suspended => "Suspended",
            RestaurantStatus::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for RestaurantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_pending_approval() {
        assert_eq!(RestaurantStatus::default(), RestaurantStatus::PendingApproval);
    }

    #[test]
    fn test_only_pending_can_be_approved() {
        assert!(RestaurantStatus::PendingApproval.can_approve());
        assert!(!RestaurantStatus::Active.can_approve());
        assert!(!RestaurantStatus::Suspended.can_approve());
        assert!(!RestaurantStatus::Closed.can_approve());
    }

    #[test]
    fn test_only_active_can_be_suspended() {
        assert!(!RestaurantStatus::PendingApproval.can_suspend());
        assert!(RestaurantStatus::Active.can_suspend());
        assert!(!RestaurantStatus::Suspended.can_suspend());
        assert!(!RestaurantStatus::Closed.can_suspend());
    }

    #[test]
    fn test_only_active_accepts_orders() {
        assert!(!RestaurantStatus::PendingApproval.can_accept_orders());
        assert!(RestaurantStatus::Active.can_accept_orders());
        assert!(!RestaurantStatus::Suspended.can_accept_orders());
        assert!(!RestaurantStatus::Closed.can_accept_orders());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!RestaurantStatus::PendingApproval.is_terminal());
        assert!(!RestaurantStatus::Active.is_terminal());
        assert!(RestaurantStatus::Suspended.is_terminal());
        assert!(RestaurantStatus::Closed.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(RestaurantStatus::PendingApproval.to_string(), "PendingApproval");
        assert_eq!(RestaurantStatus::Active.to_string(), "Active");
        assert_eq!(RestaurantStatus::Suspended.to_string(), "Suspended");
        assert_eq!(RestaurantStatus::Closed.to_string(), "Closed");
    }

    #[test]
    fn test_serialization() {
        let status = RestaurantStatus::Active;
        let json = serde_json::to_string(&status).unwrap();
        let deserialized: RestaurantStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, deserialized);
    }
}
