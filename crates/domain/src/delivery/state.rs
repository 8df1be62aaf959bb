//! Delivery status state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a delivery in its lifecycle.
///
/// ```text
/// Assigned -> EnRouteToPickup -> PickedUp -> EnRouteToCustomer -> Delivered
///     |              |              |                |
///     +--------------+------- Cancelled ------------+
/// ```
///
/// Delivered and Cancelled are terminal. Location updates stop once a
/// delivery reaches a terminal status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    /// A rider has been assigned but has not started moving.
    #[default]
    Assigned,

    /// The rider is on the way to the restaurant.
    EnRouteToPickup,

    /// The rider has the order in hand.
    PickedUp,

    /// The rider is on the way to the customer.
    EnRouteToCustomer,

    /// The order was handed to the customer.
    Delivered,

    /// The delivery was called off.
    Cancelled,
}

impl DeliveryStatus {
    /// Returns true if the rider can start moving toward the restaurant.
    pub fn can_start(&self) -> bool {
        matches!(self, DeliveryStatus::Assigned)
    }

    /// Returns true if pickup can be confirmed.
    pub fn can_confirm_pickup(&self) -> bool {
        matches!(self, DeliveryStatus::EnRouteToPickup)
    }

    /// Returns true if the customer leg can begin.
    pub fn can_start_delivery_to_customer(&self) -> bool {
        matches!(self, DeliveryStatus::PickedUp)
    }

    /// Returns true if the delivery can be completed.
    pub fn can_complete(&self) -> bool {
        matches!(self, DeliveryStatus::EnRouteToCustomer)
    }

    /// Returns true if rider location updates are still accepted.
    pub fn can_update_location(&self) -> bool {
        !self.is_terminal()
    }

    /// Returns true if the delivery can be cancelled.
    pub fn can_cancel(&self) -> bool {
        !self.is_terminal()
    }

    /// Returns true if this is a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeliveryStatus::Delivered | DeliveryStatus::Cancelled)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Assigned => "Assigned",
            DeliveryStatus::EnRouteToPickup => "EnRouteToPickup",
            DeliveryStatus::PickedUp => "PickedUp",
            DeliveryStatus::EnRouteToCustomer => "EnRouteToCustomer",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DeliveryStatus; 6] = [
        DeliveryStatus::Assigned,
        DeliveryStatus::EnRouteToPickup,
        DeliveryStatus::PickedUp,
        DeliveryStatus::EnRouteToCustomer,
        DeliveryStatus::Delivered,
        DeliveryStatus::Cancelled,
    ];

    #[test]
    fn test_default_is_assigned() {
        assert_eq!(DeliveryStatus::default(), DeliveryStatus::Assigned);
    }

    #[test]
    fn test_each_leg_has_one_entry_status() {
        for status in ALL {
            assert_eq!(status.can_start(), status == DeliveryStatus::Assigned);
            assert_eq!(
                status.can_confirm_pickup(),
                status == DeliveryStatus::EnRouteToPickup
            );
            assert_eq!(
                status.can_start_delivery_to_customer(),
                status == DeliveryStatus::PickedUp
            );
            assert_eq!(
                status.can_complete(),
                status == DeliveryStatus::EnRouteToCustomer
            );
        }
    }

    #[test]
    fn test_terminal_statuses() {
        for status in ALL {
            let terminal = matches!(
                status,
                DeliveryStatus::Delivered | DeliveryStatus::Cancelled
            );
            assert_eq!(status.is_terminal(), terminal);
            assert_eq!(status.can_update_location(), !terminal);
            assert_eq!(status.can_cancel(), !terminal);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(DeliveryStatus::EnRouteToPickup.to_string(), "EnRouteToPickup");
        assert_eq!(DeliveryStatus::Delivered.to_string(), "Delivered");
    }

    #[test]
    fn test_serde_round_trip() {
        for status in ALL {
            let json = serde_json::to_string(&status).unwrap();
            let back: DeliveryStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }
}
