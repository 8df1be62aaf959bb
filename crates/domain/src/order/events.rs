//! Order domain events.

use chrono::{DateTime, Utc};
use hotplate_common::{MenuItemId, Money, OrderId, RestaurantId, UserId};
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

/// Events recorded by the order aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    /// Order was created and is open for item edits.
    Created(OrderCreatedData),

    /// A line was added (or merged into) the order.
    ItemAdded(OrderItemAddedData),

    /// A line was removed from the order.
    ItemRemoved(OrderItemRemovedData),

    /// A line's quantity was changed.
    ItemQuantityUpdated(OrderItemQuantityUpdatedData),

    /// Order was placed; pricing is final.
    Placed(OrderPlacedData),

    /// Restaurant confirmed the order.
    Confirmed(OrderConfirmedData),

    /// Kitchen started preparing the order.
    PreparationStarted(OrderPreparationStartedData),

    /// Order is ready for rider pickup.
    ReadyForPickup(OrderReadyForPickupData),

    /// A rider was assigned and took the order out.
    AssignedToRider(OrderAssignedToRiderData),

    /// Order was delivered to the customer.
    Delivered(OrderDeliveredData),

    /// Order was cancelled.
    Cancelled(OrderCancelledData),
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::Created(_) => "OrderCreated",
            OrderEvent::ItemAdded(_) => "OrderItemAdded",
            OrderEvent::ItemRemoved(_) => "OrderItemRemoved",
            OrderEvent::ItemQuantityUpdated(_) => "OrderItemQuantityUpdated",
            OrderEvent::Placed(_) => "OrderPlaced",
            OrderEvent::Confirmed(_) => "OrderConfirmed",
            OrderEvent::PreparationStarted(_) => "OrderPreparationStarted",
            OrderEvent::ReadyForPickup(_) => "OrderReadyForPickup",
            OrderEvent::AssignedToRider(_) => "OrderAssignedToRider",
            OrderEvent::Delivered(_) => "OrderDelivered",
            OrderEvent::Cancelled(_) => "OrderCancelled",
        }
    }
}

/// Data for the OrderCreated event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreatedData {
    /// The new order.
    pub order_id: OrderId,

    /// The customer who opened the order.
    pub customer_id: UserId,

    /// The restaurant the order is against.
    pub restaurant_id: RestaurantId,
}

/// Data for the OrderItemAdded event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemAddedData {
    /// The order the item was added to.
    pub order_id: OrderId,

    /// The menu item that was added.
    pub menu_item_id: MenuItemId,

    /// Quantity added by this call (not the merged line total).
    pub quantity: u32,
}

/// Data for the OrderItemRemoved event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRemovedData {
    /// The order the item was removed from.
    pub order_id: OrderId,

    /// The menu item that was removed.
    pub menu_item_id: MenuItemId,
}

/// Data for the OrderItemQuantityUpdated event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemQuantityUpdatedData {
    /// The order containing the line.
    pub order_id: OrderId,

    /// The menu item whose line changed.
    pub menu_item_id: MenuItemId,

    /// The new line quantity.
    pub new_quantity: u32,
}

/// Data for the OrderPlaced event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPlacedData {
    /// The order that was placed.
    pub order_id: OrderId,

    /// The ordering customer.
    pub customer_id: UserId,

    /// The restaurant receiving the order.
    pub restaurant_id: RestaurantId,

    /// Final total including fee and tax.
    pub total_amount: Money,
}

/// Data for the OrderConfirmed event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmedData {
    /// The confirmed order.
    pub order_id: OrderId,

    /// Estimated delivery time based on the restaurant's preparation
    /// estimate.
    pub estimated_delivery_time: DateTime<Utc>,
}

/// Data for the OrderPreparationStarted event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPreparationStartedData {
    /// The order being prepared.
    pub order_id: OrderId,
}

/// Data for the OrderReadyForPickup event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReadyForPickupData {
    /// The order awaiting pickup.
    pub order_id: OrderId,
}

/// Data for the OrderAssignedToRider event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderAssignedToRiderData {
    /// The order taken out for delivery.
    pub order_id: OrderId,

    /// The rider carrying it.
    pub rider_id: UserId,
}

/// Data for the OrderDelivered event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDeliveredData {
    /// The delivered order.
    pub order_id: OrderId,

    /// When the order reached the customer.
    pub delivery_time: DateTime<Utc>,
}

/// Data for the OrderCancelled event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCancelledData {
    /// The cancelled order.
    pub order_id: OrderId,

    /// Trimmed cancellation reason.
    pub reason: String,
}

// Convenience constructors for events
impl OrderEvent {
    /// Creates an OrderCreated event.
    pub fn created(order_id: OrderId, customer_id: UserId, restaurant_id: RestaurantId) -> Self {
        OrderEvent::Created(OrderCreatedData {
            order_id,
            customer_id,
            restaurant_id,
        })
    }

    /// Creates an OrderItemAdded event.
    pub fn item_added(order_id: OrderId, menu_item_id: MenuItemId, quantity: u32) -> Self {
        OrderEvent::ItemAdded(OrderItemAddedData {
            order_id,
            menu_item_id,
            quantity,
        })
    }

    /// Creates an OrderItemRemoved event.
    pub fn item_removed(order_id: OrderId, menu_item_id: MenuItemId) -> Self {
        OrderEvent::ItemRemoved(OrderItemRemovedData {
            order_id,
            menu_item_id,
        })
    }

    /// Creates an OrderItemQuantityUpdated event.
    pub fn item_quantity_updated(
        order_id: OrderId,
        menu_item_id: MenuItemId,
        new_quantity: u32,
    ) -> Self {
        OrderEvent::ItemQuantityUpdated(OrderItemQuantityUpdatedData {
            order_id,
            menu_item_id,
            new_quantity,
        })
    }

    /// Creates an OrderPlaced event.
    pub fn placed(
        order_id: OrderId,
        customer_id: UserId,
        restaurant_id: RestaurantId,
        total_amount: Money,
    ) -> Self {
        OrderEvent::Placed(OrderPlacedData {
            order_id,
            customer_id,
            restaurant_id,
            total_amount,
        })
    }

    /// Creates an OrderConfirmed event.
    pub fn confirmed(order_id: OrderId, estimated_delivery_time: DateTime<Utc>) -> Self {
        OrderEvent::Confirmed(OrderConfirmedData {
            order_id,
            estimated_delivery_time,
        })
    }

    /// Creates an OrderPreparationStarted event.
    pub fn preparation_started(order_id: OrderId) -> Self {
        OrderEvent::PreparationStarted(OrderPreparationStartedData { order_id })
    }

    /// Creates an OrderReadyForPickup event.
    pub fn ready_for_pickup(order_id: OrderId) -> Self {
        OrderEvent::ReadyForPickup(OrderReadyForPickupData { order_id })
    }

    /// Creates an OrderAssignedToRider event.
    pub fn assigned_to_rider(order_id: OrderId, rider_id: UserId) -> Self {
        OrderEvent::AssignedToRider(OrderAssignedToRiderData { order_id, rider_id })
    }

    /// Creates an OrderDelivered event.
    pub fn delivered(order_id: OrderId, delivery_time: DateTime<Utc>) -> Self {
        OrderEvent::Delivered(OrderDeliveredData {
            order_id,
            delivery_time,
        })
    }

    /// Creates an OrderCancelled event.
    pub fn cancelled(order_id: OrderId, reason: impl Into<String>) -> Self {
        OrderEvent::Cancelled(OrderCancelledData {
            order_id,
            reason: reason.into(),
        })
    }
}
