//! Order commands.

use hotplate_common::{MenuItemId, Money, OrderId, RestaurantId, UserId};

use crate::command::Command;
use crate::value_objects::Address;

use super::{DEFAULT_TAX_RATE, Order};

/// Command to open a new order.
///
/// Carries no order ID; the aggregate factory generates one.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    /// The customer placing the order.
    pub customer_id: UserId,

    /// The restaurant the order is against.
    pub restaurant_id: RestaurantId,

    /// Where the order should be delivered.
    pub delivery_address: Address,

    /// Optional instructions for the rider.
    pub special_instructions: Option<String>,
}

impl CreateOrder {
    /// Creates a new CreateOrder command.
    pub fn new(
        customer_id: UserId,
        restaurant_id: RestaurantId,
        delivery_address: Address,
        special_instructions: Option<&str>,
    ) -> Self {
        Self {
            customer_id,
            restaurant_id,
            delivery_address,
            special_instructions: special_instructions.map(str::to_string),
        }
    }
}

/// Command to add a menu item to an order.
#[derive(Debug, Clone)]
pub struct AddItem {
    /// The order to add the item to.
    pub order_id: OrderId,

    /// The menu item being ordered.
    pub menu_item_id: MenuItemId,

    /// Display name of the menu item.
    pub item_name: String,

    /// Price per unit.
    pub unit_price: Money,

    /// How many units to add.
    pub quantity: u32,

    /// Optional free-text requests for this line.
    pub special_requests: Option<String>,
}

impl AddItem {
    /// Creates a new AddItem command.
    pub fn new(
        order_id: OrderId,
        menu_item_id: MenuItemId,
        item_name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
        special_requests: Option<&str>,
    ) -> Self {
        Self {
            order_id,
            menu_item_id,
            item_name: item_name.into(),
            unit_price,
            quantity,
            special_requests: special_requests.map(str::to_string),
        }
    }
}

impl Command for AddItem {
    type Aggregate = Order;

    fn aggregate_id(&self) -> OrderId {
        self.order_id
    }
}

/// Command to remove an item from an order.
#[derive(Debug, Clone)]
pub struct RemoveItem {
    /// The order to remove the item from.
    pub order_id: OrderId,

    /// The menu item to remove.
    pub menu_item_id: MenuItemId,
}

impl RemoveItem {
    /// Creates a new RemoveItem command.
    pub fn new(order_id: OrderId, menu_item_id: MenuItemId) -> Self {
        Self {
            order_id,
            menu_item_id,
        }
    }
}

impl Command for RemoveItem {
    type Aggregate = Order;

    fn aggregate_id(&self) -> OrderId {
        self.order_id
    }
}

/// Command to update the quantity of an item.
#[derive(Debug, Clone)]
pub struct UpdateItemQuantity {
    /// The order containing the item.
    pub order_id: OrderId,

    /// The menu item to update.
    pub menu_item_id: MenuItemId,

    /// The new quantity.
    pub new_quantity: u32,
}

impl UpdateItemQuantity {
    /// Creates a new UpdateItemQuantity command.
    pub fn new(order_id: OrderId, menu_item_id: MenuItemId, new_quantity: u32) -> Self {
        Self {
            order_id,
            menu_item_id,
            new_quantity,
        }
    }
}

impl Command for UpdateItemQuantity {
    type Aggregate = Order;

    fn aggregate_id(&self) -> OrderId {
        self.order_id
    }
}

/// Command to place an order.
#[derive(Debug, Clone)]
pub struct PlaceOrder {
    /// The order to place.
    pub order_id: OrderId,

    /// Delivery fee charged for this order.
    pub delivery_fee: Money,

    /// Tax rate to apply to the subtotal, in [0, 1].
    pub tax_rate: f64,
}

impl PlaceOrder {
    /// Creates a new PlaceOrder command.
    pub fn new(order_id: OrderId, delivery_fee: Money, tax_rate: f64) -> Self {
        Self {
            order_id,
            delivery_fee,
            tax_rate,
        }
    }

    /// Creates a new PlaceOrder command with the default tax rate.
    pub fn with_default_tax_rate(order_id: OrderId, delivery_fee: Money) -> Self {
        Self {
            order_id,
            delivery_fee,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl Command for PlaceOrder {
    type Aggregate = Order;

    fn aggregate_id(&self) -> OrderId {
        self.order_id
    }
}

/// Command for the restaurant to confirm an order.
#[derive(Debug, Clone)]
pub struct ConfirmOrder {
    /// The order to confirm.
    pub order_id: OrderId,

    /// How long the kitchen expects to take.
    pub estimated_preparation_minutes: u32,
}

impl ConfirmOrder {
    /// Creates a new ConfirmOrder command.
    pub fn new(order_id: OrderId, estimated_preparation_minutes: u32) -> Self {
        Self {
            order_id,
            estimated_preparation_minutes,
        }
    }
}

impl Command for ConfirmOrder {
    type Aggregate = Order;

    fn aggregate_id(&self) -> OrderId {
        self.order_id
    }
}

/// Command to start preparing an order.
#[derive(Debug, Clone)]
pub struct StartPreparation {
    /// The order to start preparing.
    pub order_id: OrderId,
}

impl StartPreparation {
    /// Creates a new StartPreparation command.
    pub fn new(order_id: OrderId) -> Self {
        Self { order_id }
    }
}

impl Command for StartPreparation {
    type Aggregate = Order;

    fn aggregate_id(&self) -> OrderId {
        self.order_id
    }
}

/// Command to mark an order ready for pickup.
#[derive(Debug, Clone)]
pub struct CompletePreparation {
    /// The order that finished preparation.
    pub order_id: OrderId,
}

impl CompletePreparation {
    /// Creates a new CompletePreparation command.
    pub fn new(order_id: OrderId) -> Self {
        Self { order_id }
    }
}

impl Command for CompletePreparation {
    type Aggregate = Order;

    fn aggregate_id(&self) -> OrderId {
        self.order_id
    }
}

/// Command to hand an order to a rider.
#[derive(Debug, Clone)]
pub struct AssignRider {
    /// The order to assign.
    pub order_id: OrderId,

    /// The rider taking the order.
    pub rider_id: UserId,
}

impl AssignRider {
    /// Creates a new AssignRider command.
    pub fn new(order_id: OrderId, rider_id: UserId) -> Self {
        Self { order_id, rider_id }
    }
}

impl Command for AssignRider {
    type Aggregate = Order;

    fn aggregate_id(&self) -> OrderId {
        self.order_id
    }
}

/// Command to mark an order as delivered.
#[derive(Debug, Clone)]
pub struct CompleteDelivery {
    /// The order that was delivered.
    pub order_id: OrderId,
}

impl CompleteDelivery {
    /// Creates a new CompleteDelivery command.
    pub fn new(order_id: OrderId) -> Self {
        Self { order_id }
    }
}

impl Command for CompleteDelivery {
    type Aggregate = Order;

    fn aggregate_id(&self) -> OrderId {
        self.order_id
    }
}

/// Command to cancel an order.
#[derive(Debug, Clone)]
pub struct CancelOrder {
    /// The order to cancel.
    pub order_id: OrderId,

    /// Reason for cancellation.
    pub reason: String,
}

impl CancelOrder {
    /// Creates a new CancelOrder command.
    pub fn new(order_id: OrderId, reason: impl Into<String>) -> Self {
        Self {
            order_id,
            reason: reason.into(),
        }
    }
}

impl Command for CancelOrder {
    type Aggregate = Order;

    fn aggregate_id(&self) -> OrderId {
        self.order_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order_command() {
        let customer_id = UserId::new();
        let restaurant_id = RestaurantId::new();
        let address =
            Address::new("123 Main St", "Springfield", "12345", "USA", 40.0, -74.0, false)
                .unwrap();

        let cmd = CreateOrder::new(customer_id, restaurant_id, address, Some("no onions"));
        assert_eq!(cmd.customer_id, customer_id);
        assert_eq!(cmd.restaurant_id, restaurant_id);
        assert_eq!(cmd.special_instructions.as_deref(), Some("no onions"));
    }

    #[test]
    fn test_add_item_command() {
        let order_id = OrderId::new();
        let menu_item_id = MenuItemId::new();

        let cmd = AddItem::new(
            order_id,
            menu_item_id,
            "Pad Thai",
            Money::from_cents(1299),
            2,
            None,
        );
        assert_eq!(cmd.aggregate_id(), order_id);
        assert_eq!(cmd.menu_item_id, menu_item_id);
        assert_eq!(cmd.quantity, 2);
    }

    #[test]
    fn test_remove_item_command() {
        let order_id = OrderId::new();
        let menu_item_id = MenuItemId::new();

        let cmd = RemoveItem::new(order_id, menu_item_id);
        assert_eq!(cmd.aggregate_id(), order_id);
        assert_eq!(cmd.menu_item_id, menu_item_id);
    }

    #[test]
    fn test_place_order_with_default_tax_rate() {
        let order_id = OrderId::new();

        let cmd = PlaceOrder::with_default_tax_rate(order_id, Money::from_cents(299));
        assert_eq!(cmd.aggregate_id(), order_id);
        assert_eq!(cmd.delivery_fee.cents(), 299);
        assert!((cmd.tax_rate - DEFAULT_TAX_RATE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cancel_order_command() {
        let order_id = OrderId::new();

        let cmd = CancelOrder::new(order_id, "Customer request");
        assert_eq!(cmd.aggregate_id(), order_id);
        assert_eq!(cmd.reason, "Customer request");
    }
}
