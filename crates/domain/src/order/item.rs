//! Order line item entity.

use hotplate_common::{MenuItemId, Money, OrderItemId};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, require_text};

fn validate_quantity(quantity: u32) -> Result<u32, DomainError> {
    if quantity == 0 {
        return Err(DomainError::validation(
            "Quantity must be greater than zero",
        ));
    }
    Ok(quantity)
}

/// A line in an order, snapshotting the menu item's name and price at
/// order time.
///
/// The snapshot decouples the order from later menu edits: renaming a dish
/// or changing its price never changes an order that already references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    menu_item_id: MenuItemId,
    item_name: String,
    unit_price: Money,
    quantity: u32,
    special_requests: Option<String>,
}

impl OrderItem {
    /// Creates an order line for a menu item.
    pub fn new(
        menu_item_id: MenuItemId,
        item_name: &str,
        unit_price: Money,
        quantity: u32,
        special_requests: Option<&str>,
    ) -> Result<Self, DomainError> {
        if unit_price.is_negative() {
            return Err(DomainError::validation("Price cannot be negative"));
        }

        Ok(Self {
            id: OrderItemId::new(),
            menu_item_id,
            item_name: require_text(item_name, "item_name")?,
            unit_price,
            quantity: validate_quantity(quantity)?,
            special_requests: special_requests.map(|s| s.trim().to_string()),
        })
    }

    pub fn id(&self) -> OrderItemId {
        self.id
    }

    pub fn menu_item_id(&self) -> MenuItemId {
        self.menu_item_id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn special_requests(&self) -> Option<&str> {
        self.special_requests.as_deref()
    }

    /// Returns the line total (unit price times quantity).
    pub fn total_price(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }

    /// Replaces the quantity after checking it is greater than zero.
    pub fn update_quantity(&mut self, new_quantity: u32) -> Result<(), DomainError> {
        self.quantity = validate_quantity(new_quantity)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> OrderItem {
        OrderItem::new(MenuItemId::new(), "Pad Thai", Money::from_cents(1299), 2, None).unwrap()
    }

    #[test]
    fn test_new_snapshots_name_and_price() {
        let menu_item_id = MenuItemId::new();
        let item = OrderItem::new(
            menu_item_id,
            "  Pad Thai  ",
            Money::from_cents(1299),
            2,
            Some("  extra spicy  "),
        )
        .unwrap();

        assert_eq!(item.menu_item_id(), menu_item_id);
        assert_eq!(item.item_name(), "Pad Thai");
        assert_eq!(item.unit_price().cents(), 1299);
        assert_eq!(item.quantity(), 2);
        assert_eq!(item.special_requests(), Some("extra spicy"));
    }

    #[test]
    fn test_total_price() {
        assert_eq!(item().total_price().cents(), 2598);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err =
            OrderItem::new(MenuItemId::new(), "  ", Money::from_cents(1299), 1, None).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "item_name cannot be empty");
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let err =
            OrderItem::new(MenuItemId::new(), "Pad Thai", Money::from_cents(-1), 1, None)
                .unwrap_err();
        assert_eq!(err.to_string(), "Price cannot be negative");
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let err =
            OrderItem::new(MenuItemId::new(), "Pad Thai", Money::from_cents(1299), 0, None)
                .unwrap_err();
        assert_eq!(err.to_string(), "Quantity must be greater than zero");
    }

    #[test]
    fn test_update_quantity_revalidates() {
        let mut item = item();

        item.update_quantity(5).unwrap();
        assert_eq!(item.quantity(), 5);
        assert_eq!(item.total_price().cents(), 6495);

        let err = item.update_quantity(0).unwrap_err();
        assert_eq!(err.to_string(), "Quantity must be greater than zero");
        assert_eq!(item.quantity(), 5);
    }

    #[test]
    fn test_serialization_round_trip() {
        let item = item();
        let json = serde_json::to_string(&item).unwrap();
        let deserialized: OrderItem = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, item);
    }
}
