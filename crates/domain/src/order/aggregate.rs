//! Order aggregate root.

use chrono::{DateTime, Duration, Utc};
use hotplate_common::{MenuItemId, Money, OrderId, RestaurantId, UserId};
use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregateRoot, EventBuffer};
use crate::error::DomainError;
use crate::value_objects::Address;

use super::events::OrderEvent;
use super::item::OrderItem;
use super::state::OrderStatus;

/// Tax rate applied when the caller does not choose one.
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// Delivery estimate stamped at placement, before the restaurant confirms.
const PLACEMENT_ESTIMATE_MINUTES: i64 = 45;

/// A customer's order against a single restaurant.
///
/// While `Created`, the order is an editable cart; placing it locks the
/// items and computes the final price. From there the order moves through
/// the restaurant and delivery statuses one step at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: UserId,
    restaurant_id: RestaurantId,
    status: OrderStatus,
    order_date: DateTime<Utc>,
    estimated_delivery_time: Option<DateTime<Utc>>,
    actual_delivery_time: Option<DateTime<Utc>>,
    delivery_address: Address,
    special_instructions: Option<String>,
    assigned_rider_id: Option<UserId>,
    sub_total: Money,
    delivery_fee: Money,
    tax_amount: Money,
    total_amount: Money,
    order_items: Vec<OrderItem>,
    #[serde(skip)]
    events: EventBuffer<OrderEvent>,
}

impl Order {
    /// Opens a new order for a customer at a restaurant.
    pub fn create(
        customer_id: UserId,
        restaurant_id: RestaurantId,
        delivery_address: Address,
        special_instructions: Option<&str>,
    ) -> Self {
        let mut order = Self {
            id: OrderId::new(),
            customer_id,
            restaurant_id,
            status: OrderStatus::Created,
            order_date: Utc::now(),
            estimated_delivery_time: None,
            actual_delivery_time: None,
            delivery_address,
            special_instructions: special_instructions.map(|s| s.trim().to_string()),
            assigned_rider_id: None,
            sub_total: Money::zero(),
            delivery_fee: Money::zero(),
            tax_amount: Money::zero(),
            total_amount: Money::zero(),
            order_items: Vec::new(),
            events: EventBuffer::new(),
        };

        order
            .events
            .record(OrderEvent::created(order.id, customer_id, restaurant_id));
        order
    }

    pub fn customer_id(&self) -> UserId {
        self.customer_id
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    pub fn estimated_delivery_time(&self) -> Option<DateTime<Utc>> {
        self.estimated_delivery_time
    }

    pub fn actual_delivery_time(&self) -> Option<DateTime<Utc>> {
        self.actual_delivery_time
    }

    pub fn delivery_address(&self) -> &Address {
        &self.delivery_address
    }

    pub fn special_instructions(&self) -> Option<&str> {
        self.special_instructions.as_deref()
    }

    pub fn assigned_rider_id(&self) -> Option<UserId> {
        self.assigned_rider_id
    }

    pub fn sub_total(&self) -> Money {
        self.sub_total
    }

    pub fn delivery_fee(&self) -> Money {
        self.delivery_fee
    }

    pub fn tax_amount(&self) -> Money {
        self.tax_amount
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Returns the order lines in insertion order.
    pub fn order_items(&self) -> &[OrderItem] {
        &self.order_items
    }

    /// Returns the line for a menu item, if present.
    pub fn order_item(&self, menu_item_id: MenuItemId) -> Option<&OrderItem> {
        self.order_items
            .iter()
            .find(|item| item.menu_item_id() == menu_item_id)
    }

    /// Returns the number of lines in the order.
    pub fn item_count(&self) -> usize {
        self.order_items.len()
    }

    /// Returns true if items can still be added, removed, or changed.
    pub fn can_be_modified(&self) -> bool {
        self.status.can_modify_items()
    }

    /// Adds a menu item to the order.
    ///
    /// If a line for the same menu item already exists, its quantity is
    /// increased instead of adding a duplicate line. The recorded event
    /// carries the quantity added by this call.
    pub fn add_item(
        &mut self,
        menu_item_id: MenuItemId,
        item_name: &str,
        unit_price: Money,
        quantity: u32,
        special_requests: Option<&str>,
    ) -> Result<(), DomainError> {
        self.ensure_modifiable()?;

        if quantity == 0 {
            return Err(DomainError::validation(
                "Quantity must be greater than zero",
            ));
        }
        if unit_price.is_negative() {
            return Err(DomainError::validation("Unit price cannot be negative"));
        }
        if item_name.trim().is_empty() {
            return Err(DomainError::validation("Item name cannot be empty"));
        }

        match self
            .order_items
            .iter_mut()
            .find(|item| item.menu_item_id() == menu_item_id)
        {
            Some(existing) => {
                let merged = existing.quantity() + quantity;
                existing.update_quantity(merged)?;
            }
            None => {
                let item =
                    OrderItem::new(menu_item_id, item_name, unit_price, quantity, special_requests)?;
                self.order_items.push(item);
            }
        }

        self.recalculate_amounts();
        self.events
            .record(OrderEvent::item_added(self.id, menu_item_id, quantity));
        Ok(())
    }

    /// Removes the line for a menu item.
    pub fn remove_item(&mut self, menu_item_id: MenuItemId) -> Result<(), DomainError> {
        self.ensure_modifiable()?;

        let index = self
            .order_items
            .iter()
            .position(|item| item.menu_item_id() == menu_item_id)
            .ok_or_else(|| DomainError::not_found("OrderItem", menu_item_id))?;

        self.order_items.remove(index);
        self.recalculate_amounts();
        self.events
            .record(OrderEvent::item_removed(self.id, menu_item_id));
        Ok(())
    }

    /// Replaces the quantity on the line for a menu item.
    pub fn update_item_quantity(
        &mut self,
        menu_item_id: MenuItemId,
        new_quantity: u32,
    ) -> Result<(), DomainError> {
        self.ensure_modifiable()?;

        if new_quantity == 0 {
            return Err(DomainError::validation(
                "Quantity must be greater than zero",
            ));
        }

        let item = self
            .order_items
            .iter_mut()
            .find(|item| item.menu_item_id() == menu_item_id)
            .ok_or_else(|| DomainError::not_found("OrderItem", menu_item_id))?;

        item.update_quantity(new_quantity)?;
        self.recalculate_amounts();
        self.events.record(OrderEvent::item_quantity_updated(
            self.id,
            menu_item_id,
            new_quantity,
        ));
        Ok(())
    }

    /// Places the order, locking items and computing the final price.
    ///
    /// Tax is taken from the subtotal, the total is subtotal plus fee plus
    /// tax, and a default 45-minute delivery estimate is stamped.
    pub fn place(&mut self, delivery_fee: Money, tax_rate: f64) -> Result<(), DomainError> {
        if !self.status.can_place() {
            return Err(DomainError::business_rule("Order has already been placed"));
        }
        if self.order_items.is_empty() {
            return Err(DomainError::business_rule(
                "Cannot place order without items",
            ));
        }
        if delivery_fee.is_negative() {
            return Err(DomainError::validation("Delivery fee cannot be negative"));
        }
        if !(0.0..=1.0).contains(&tax_rate) {
            return Err(DomainError::validation("Tax rate must be between 0 and 1"));
        }

        self.delivery_fee = delivery_fee;
        self.tax_amount = self.sub_total.apply_rate(tax_rate);
        self.total_amount = self.sub_total + self.delivery_fee + self.tax_amount;
        self.status = OrderStatus::Placed;
        self.estimated_delivery_time =
            Some(Utc::now() + Duration::minutes(PLACEMENT_ESTIMATE_MINUTES));

        self.events.record(OrderEvent::placed(
            self.id,
            self.customer_id,
            self.restaurant_id,
            self.total_amount,
        ));
        Ok(())
    }

    /// Restaurant accepts the order with a preparation estimate.
    pub fn confirm_by_restaurant(
        &mut self,
        estimated_preparation_minutes: u32,
    ) -> Result<(), DomainError> {
        if !self.status.can_confirm() {
            return Err(DomainError::business_rule(
                "Only placed orders can be confirmed by restaurant",
            ));
        }
        if estimated_preparation_minutes == 0 {
            return Err(DomainError::validation(
                "Estimated preparation time must be positive",
            ));
        }

        let estimated = Utc::now() + Duration::minutes(i64::from(estimated_preparation_minutes));
        self.status = OrderStatus::Confirmed;
        self.estimated_delivery_time = Some(estimated);

        self.events.record(OrderEvent::confirmed(self.id, estimated));
        Ok(())
    }

    /// Kitchen starts preparing the order.
    pub fn start_preparation(&mut self) -> Result<(), DomainError> {
        if !self.status.can_start_preparation() {
            return Err(DomainError::business_rule(
                "Only confirmed orders can start preparation",
            ));
        }

        self.status = OrderStatus::InPreparation;
        self.events.record(OrderEvent::preparation_started(self.id));
        Ok(())
    }

    /// Kitchen finishes; the order waits for a rider.
    pub fn complete_preparation(&mut self) -> Result<(), DomainError> {
        if !self.status.can_complete_preparation() {
            return Err(DomainError::business_rule(
                "Only orders in preparation can be completed",
            ));
        }

        self.status = OrderStatus::ReadyForPickup;
        self.events.record(OrderEvent::ready_for_pickup(self.id));
        Ok(())
    }

    /// Hands the order to a rider and sends it out.
    pub fn assign_to_rider(&mut self, rider_id: UserId) -> Result<(), DomainError> {
        if !self.status.can_assign_rider() {
            return Err(DomainError::business_rule(
                "Only orders ready for pickup can be assigned to riders",
            ));
        }

        self.assigned_rider_id = Some(rider_id);
        self.status = OrderStatus::OutForDelivery;
        self.events
            .record(OrderEvent::assigned_to_rider(self.id, rider_id));
        Ok(())
    }

    /// Marks the order as delivered, stamping the actual delivery time.
    pub fn complete_delivery(&mut self) -> Result<(), DomainError> {
        if !self.status.can_complete_delivery() {
            return Err(DomainError::business_rule(
                "Only orders out for delivery can be completed",
            ));
        }

        let delivered_at = Utc::now();
        self.status = OrderStatus::Delivered;
        self.actual_delivery_time = Some(delivered_at);
        self.events
            .record(OrderEvent::delivered(self.id, delivered_at));
        Ok(())
    }

    /// Cancels the order with a reason.
    pub fn cancel(&mut self, reason: &str) -> Result<(), DomainError> {
        if !self.status.can_cancel() {
            return Err(DomainError::business_rule(
                "Cannot cancel delivered or already cancelled orders",
            ));
        }
        if reason.trim().is_empty() {
            return Err(DomainError::validation("Cancellation reason is required"));
        }

        self.status = OrderStatus::Cancelled;
        self.events
            .record(OrderEvent::cancelled(self.id, reason.trim()));
        Ok(())
    }

    fn ensure_modifiable(&self) -> Result<(), DomainError> {
        if !self.status.can_modify_items() {
            return Err(DomainError::business_rule(
                "Cannot modify order items after order has been placed",
            ));
        }
        Ok(())
    }

    fn recalculate_amounts(&mut self) {
        self.sub_total = self.order_items.iter().map(OrderItem::total_price).sum();
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;
    type Event = OrderEvent;

    fn aggregate_type() -> &'static str {
        "Order"
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
