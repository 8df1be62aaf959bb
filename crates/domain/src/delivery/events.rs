//! Delivery domain events.

use chrono::{DateTime, Utc};
use hotplate_common::{DeliveryId, OrderId, UserId};
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

/// Events recorded by the delivery aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DeliveryEvent {
    /// A rider was assigned to an order.
    Assigned(DeliveryAssignedData),

    /// The rider started moving toward the restaurant.
    Started(DeliveryStartedData),

    /// The rider picked the order up.
    PickedUp(OrderPickedUpData),

    /// The rider started the customer leg.
    EnRouteToCustomer(DeliveryEnRouteToCustomerData),

    /// The order reached the customer.
    Completed(DeliveryCompletedData),

    /// The delivery was called off.
    Cancelled(DeliveryCancelledData),

    /// The rider reported a new position.
    RiderLocationUpdated(RiderLocationUpdatedData),
}

impl DeliveryEvent {
    pub fn assigned(delivery_id: DeliveryId, order_id: OrderId, rider_id: UserId) -> Self {
        DeliveryEvent::Assigned(DeliveryAssignedData {
            delivery_id,
            order_id,
            rider_id,
        })
    }

    pub fn started(delivery_id: DeliveryId, rider_id: UserId) -> Self {
        DeliveryEvent::Started(DeliveryStartedData {
            delivery_id,
            rider_id,
        })
    }

    pub fn picked_up(delivery_id: DeliveryId, order_id: OrderId, pickup_time: DateTime<Utc>) -> Self {
        DeliveryEvent::PickedUp(OrderPickedUpData {
            delivery_id,
            order_id,
            pickup_time,
        })
    }

    pub fn en_route_to_customer(delivery_id: DeliveryId) -> Self {
        DeliveryEvent::EnRouteToCustomer(DeliveryEnRouteToCustomerData { delivery_id })
    }

    pub fn completed(
        delivery_id: DeliveryId,
        order_id: OrderId,
        delivery_time: DateTime<Utc>,
    ) -> Self {
        DeliveryEvent::Completed(DeliveryCompletedData {
            delivery_id,
            order_id,
            delivery_time,
        })
    }

    pub fn cancelled(delivery_id: DeliveryId, order_id: OrderId, reason: impl Into<String>) -> Self {
        DeliveryEvent::Cancelled(DeliveryCancelledData {
            delivery_id,
            order_id,
            reason: reason.into(),
        })
    }

    pub fn rider_location_updated(
        delivery_id: DeliveryId,
        rider_id: UserId,
        latitude: f64,
        longitude: f64,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        DeliveryEvent::RiderLocationUpdated(RiderLocationUpdatedData {
            delivery_id,
            rider_id,
            latitude,
            longitude,
            recorded_at,
        })
    }
}

impl DomainEvent for DeliveryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            DeliveryEvent::Assigned(_) => "DeliveryAssigned",
            DeliveryEvent::Started(_) => "DeliveryStarted",
            DeliveryEvent::PickedUp(_) => "OrderPickedUp",
            DeliveryEvent::EnRouteToCustomer(_) => "DeliveryEnRouteToCustomer",
            DeliveryEvent::Completed(_) => "DeliveryCompleted",
            DeliveryEvent::Cancelled(_) => "DeliveryCancelled",
            DeliveryEvent::RiderLocationUpdated(_) => "RiderLocationUpdated",
        }
    }
}

/// Data for the DeliveryAssigned event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAssignedData {
    pub delivery_id: DeliveryId,
    pub order_id: OrderId,
    pub rider_id: UserId,
}

/// Data for the DeliveryStarted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryStartedData {
    pub delivery_id: DeliveryId,
    pub rider_id: UserId,
}

/// Data for the OrderPickedUp event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPickedUpData {
    pub delivery_id: DeliveryId,
    pub order_id: OrderId,
    pub pickup_time: DateTime<Utc>,
}

/// Data for the DeliveryEnRouteToCustomer event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryEnRouteToCustomerData {
    pub delivery_id: DeliveryId,
}

/// Data for the DeliveryCompleted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryCompletedData {
    pub delivery_id: DeliveryId,
    pub order_id: OrderId,
    pub delivery_time: DateTime<Utc>,
}

/// Data for the DeliveryCancelled event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryCancelledData {
    pub delivery_id: DeliveryId,
    pub order_id: OrderId,
    pub reason: String,
}

/// Data for the RiderLocationUpdated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderLocationUpdatedData {
    pub delivery_id: DeliveryId,
    pub rider_id: UserId,
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: DateTime<Utc>,
}
