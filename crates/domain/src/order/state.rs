//! Order status machine.

use serde::{Deserialize, Serialize};

/// The status of an order in its lifecycle.
///
/// Status transitions:
/// ```text
/// Created ──► Placed ──► Confirmed ──► InPreparation ──► ReadyForPickup ──► OutForDelivery ──► Delivered
///    │           │           │               │                  │                   │
///    └───────────┴───────────┴───────────────┴──────────────────┴───────────────────┴──► Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order is being assembled, items can be added and removed.
    #[default]
    Created,

    /// Customer has placed the order; pricing is locked in.
    Placed,

    /// Restaurant has accepted the order.
    Confirmed,

    /// Kitchen is preparing the order.
    InPreparation,

    /// Food is ready and waiting for a rider.
    ReadyForPickup,

    /// A rider is carrying the order to the customer.
    OutForDelivery,

    /// Order reached the customer (terminal).
    Delivered,

    /// Order was cancelled (terminal).
    Cancelled,
}

impl OrderStatus {
    /// Returns true if items can be modified in this status.
    pub fn can_modify_items(&self) -> bool {
        matches!(self, OrderStatus::Created)
    }

    /// Returns true if the order can be placed in this status.
    pub fn can_place(&self) -> bool {
        matches!(self, OrderStatus::Created)
    }

    /// Returns true if the restaurant can confirm the order in this status.
    pub fn can_confirm(&self) -> bool {
        matches!(self, OrderStatus::Placed)
    }

    /// Returns true if preparation can start in this status.
    pub fn can_start_preparation(&self) -> bool {
        matches!(self, OrderStatus::Confirmed)
    }

    /// Returns true if preparation can be completed in this status.
    pub fn can_complete_preparation(&self) -> bool {
        matches!(self, OrderStatus::InPreparation)
    }

    /// Returns true if a rider can be assigned in this status.
    pub fn can_assign_rider(&self) -> bool {
        matches!(self, OrderStatus::ReadyForPickup)
    }

    /// Returns true if delivery can be completed in this status.
    pub fn can_complete_delivery(&self) -> bool {
        matches!(self, OrderStatus::OutForDelivery)
    }

    /// Returns true if the order can be cancelled in this status.
    pub fn can_cancel(&self) -> bool {
        !self.is_terminal()
    }

    /// Returns true if this is a terminal status (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "Created",
            OrderStatus::Placed => "Placed",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::InPreparation => "InPreparation",
            OrderStatus::ReadyForPickup => "ReadyForPickup",
            OrderStatus::OutForDelivery => "OutForDelivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
