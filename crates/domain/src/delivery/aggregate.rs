//! Delivery aggregate root.

use chrono::{DateTime, Duration, Utc};
use hotplate_common::{DeliveryId, Money, OrderId, UserId};
use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregateRoot, EventBuffer};
use crate::error::DomainError;
use crate::value_objects::{Address, Location, LocationUpdate};

use super::events::DeliveryEvent;
use super::state::DeliveryStatus;

/// A rider's trip for one order, from assignment to handoff.
///
/// The delivery keeps an append-only trail of rider location updates;
/// `current_location` reads the newest entry. The trail grows without
/// bound for the lifetime of the delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    id: DeliveryId,
    order_id: OrderId,
    rider_id: UserId,
    status: DeliveryStatus,
    assigned_at: DateTime<Utc>,
    picked_up_at: Option<DateTime<Utc>>,
    delivered_at: Option<DateTime<Utc>>,
    pickup_address: Address,
    delivery_address: Address,
    delivery_fee: Money,
    estimated_duration_minutes: u32,
    delivery_notes: Option<String>,
    location_updates: Vec<LocationUpdate>,
    #[serde(skip)]
    events: EventBuffer<DeliveryEvent>,
}

impl Delivery {
    /// Assigns a rider to an order, opening a new delivery.
    pub fn assign(
        order_id: OrderId,
        rider_id: UserId,
        pickup_address: Address,
        delivery_address: Address,
        delivery_fee: Money,
        estimated_duration_minutes: u32,
    ) -> Result<Self, DomainError> {
        if delivery_fee.is_negative() {
            return Err(DomainError::validation("Delivery fee cannot be negative"));
        }
        if estimated_duration_minutes == 0 {
            return Err(DomainError::validation(
                "Estimated duration must be positive",
            ));
        }

        let mut delivery = Self {
            id: DeliveryId::new(),
            order_id,
            rider_id,
            status: DeliveryStatus::Assigned,
            assigned_at: Utc::now(),
            picked_up_at: None,
            delivered_at: None,
            pickup_address,
            delivery_address,
            delivery_fee,
            estimated_duration_minutes,
            delivery_notes: None,
            location_updates: Vec::new(),
            events: EventBuffer::new(),
        };

        delivery
            .events
            .record(DeliveryEvent::assigned(delivery.id, order_id, rider_id));
        Ok(delivery)
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn rider_id(&self) -> UserId {
        self.rider_id
    }

    pub fn status(&self) -> DeliveryStatus {
        self.status
    }

    pub fn assigned_at(&self) -> DateTime<Utc> {
        self.assigned_at
    }

    pub fn picked_up_at(&self) -> Option<DateTime<Utc>> {
        self.picked_up_at
    }

    pub fn delivered_at(&self) -> Option<DateTime<Utc>> {
        self.delivered_at
    }

    pub fn pickup_address(&self) -> &Address {
        &self.pickup_address
    }

    pub fn delivery_address(&self) -> &Address {
        &self.delivery_address
    }

    pub fn delivery_fee(&self) -> Money {
        self.delivery_fee
    }

    pub fn estimated_duration_minutes(&self) -> u32 {
        self.estimated_duration_minutes
    }

    pub fn delivery_notes(&self) -> Option<&str> {
        self.delivery_notes.as_deref()
    }

    /// Returns the location trail in the order the updates arrived.
    pub fn location_updates(&self) -> &[LocationUpdate] {
        &self.location_updates
    }

    /// The rider starts moving toward the restaurant.
    pub fn start(&mut self) -> Result<(), DomainError> {
        if !self.status.can_start() {
            return Err(DomainError::business_rule(
                "Only assigned deliveries can be started",
            ));
        }

        self.status = DeliveryStatus::EnRouteToPickup;
        self.events
            .record(DeliveryEvent::started(self.id, self.rider_id));
        Ok(())
    }

    /// Confirms the rider has the order.
    ///
    /// The notes replace whatever was there before, including replacing
    /// existing notes with nothing when none are given.
    pub fn confirm_pickup(&mut self, notes: Option<&str>) -> Result<(), DomainError> {
        if !self.status.can_confirm_pickup() {
            return Err(DomainError::business_rule(
                "Can only confirm pickup when en route to pickup",
            ));
        }

        let picked_up_at = Utc::now();
        self.status = DeliveryStatus::PickedUp;
        self.picked_up_at = Some(picked_up_at);
        self.delivery_notes = notes.map(|n| n.trim().to_string());

        self.events
            .record(DeliveryEvent::picked_up(self.id, self.order_id, picked_up_at));
        Ok(())
    }

    /// The rider starts the customer leg.
    pub fn start_delivery_to_customer(&mut self) -> Result<(), DomainError> {
        if !self.status.can_start_delivery_to_customer() {
            return Err(DomainError::business_rule(
                "Can only start delivery after pickup",
            ));
        }

        self.status = DeliveryStatus::EnRouteToCustomer;
        self.events
            .record(DeliveryEvent::en_route_to_customer(self.id));
        Ok(())
    }

    /// Completes the delivery.
    ///
    /// A non-blank confirmation is appended to the notes with a
    /// `" | Delivery: "` separator, or becomes the notes if none exist.
    pub fn complete(&mut self, confirmation: Option<&str>) -> Result<(), DomainError> {
        if !self.status.can_complete() {
            return Err(DomainError::business_rule(
                "Can only complete delivery when en route to customer",
            ));
        }

        let delivered_at = Utc::now();
        self.status = DeliveryStatus::Delivered;
        self.delivered_at = Some(delivered_at);

        if let Some(confirmation) = confirmation {
            let confirmation = confirmation.trim();
            if !confirmation.is_empty() {
                self.delivery_notes = match self.delivery_notes.as_deref() {
                    Some(notes) if !notes.trim().is_empty() => {
                        Some(format!("{notes} | Delivery: {confirmation}"))
                    }
                    _ => Some(confirmation.to_string()),
                };
            }
        }

        self.events.record(DeliveryEvent::completed(
            self.id,
            self.order_id,
            delivered_at,
        ));
        Ok(())
    }

    /// Appends a rider position to the location trail.
    pub fn update_location(
        &mut self,
        latitude: f64,
        longitude: f64,
        address: Option<&str>,
    ) -> Result<(), DomainError> {
        if !self.status.can_update_location() {
            return Err(DomainError::business_rule(
                "Cannot update location for completed deliveries",
            ));
        }

        let update = LocationUpdate::new(latitude, longitude, address)?;
        let recorded_at = update.recorded_at();
        self.location_updates.push(update);

        self.events.record(DeliveryEvent::rider_location_updated(
            self.id,
            self.rider_id,
            latitude,
            longitude,
            recorded_at,
        ));
        Ok(())
    }

    /// Cancels the delivery with a reason.
    pub fn cancel(&mut self, reason: &str) -> Result<(), DomainError> {
        if !self.status.can_cancel() {
            return Err(DomainError::business_rule(
                "Cannot cancel completed deliveries",
            ));
        }
        if reason.trim().is_empty() {
            return Err(DomainError::validation("Cancellation reason is required"));
        }

        self.status = DeliveryStatus::Cancelled;
        self.events.record(DeliveryEvent::cancelled(
            self.id,
            self.order_id,
            reason.trim(),
        ));
        Ok(())
    }

    /// Returns the rider's latest reported position, if any.
    ///
    /// The newest update by timestamp wins; among equal timestamps the
    /// most recently appended wins.
    pub fn current_location(&self) -> Option<Location> {
        self.location_updates
            .iter()
            .max_by_key(|update| update.recorded_at())
            .map(LocationUpdate::location)
    }

    /// Time between pickup and handoff, once both have happened.
    pub fn actual_duration(&self) -> Option<Duration> {
        match (self.delivered_at, self.picked_up_at) {
            (Some(delivered), Some(picked_up)) => Some(delivered - picked_up),
            _ => None,
        }
    }

    /// Time since assignment, capped at the delivery time once delivered.
    pub fn total_duration(&self) -> Duration {
        self.delivered_at.unwrap_or_else(Utc::now) - self.assigned_at
    }
}

impl AggregateRoot for Delivery {
    type Id = DeliveryId;
    type Event = DeliveryEvent;

    fn aggregate_type() -> &'static str {
        "Delivery"
    }

    fn id(&self) -> Self::Id {
        self.id
    }

    fn domain_events(&self) -> &[Self::Event] {
        self.events.as_slice()
    }

    fn clear_domain_events(&mut self) {
        self.events.clear();
    }
}
