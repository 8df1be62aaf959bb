//! Menu entities owned by the restaurant aggregate.

use chrono::{DateTime, Utc};
use hotplate_common::{MenuCategoryId, MenuItemId, Money};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, require_text};

fn validate_price(price: Money) -> Result<Money, DomainError> {
    if price.is_negative() {
        return Err(DomainError::validation("Price cannot be negative"));
    }
    Ok(price)
}

fn validate_display_order(order: i32) -> Result<i32, DomainError> {
    if order < 0 {
        return Err(DomainError::validation("Display order cannot be negative"));
    }
    Ok(order)
}

/// A dish offered within a menu category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    id: MenuItemId,
    name: String,
    description: String,
    price: Money,
    is_available: bool,
    created_at: DateTime<Utc>,
}

impl MenuItem {
    /// Creates a menu item with a trimmed name and description and a
    /// non-negative price.
    pub fn new(
        name: &str,
        description: &str,
        price: Money,
        is_available: bool,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: MenuItemId::new(),
            name: require_text(name, "name")?,
            description: require_text(description, "description")?,
            price: validate_price(price)?,
            is_available,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> MenuItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the price after checking it is not negative.
    pub fn update_price(&mut self, new_price: Money) -> Result<(), DomainError> {
        self.price = validate_price(new_price)?;
        Ok(())
    }

    /// Marks the item available or unavailable for ordering.
    pub fn set_availability(&mut self, available: bool) {
        self.is_available = available;
    }
}

/// A named grouping of menu items, ordered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    id: MenuCategoryId,
    name: String,
    description: String,
    display_order: i32,
    is_active: bool,
    menu_items: Vec<MenuItem>,
}

impl MenuCategory {
    /// Creates an active category with no items.
    pub fn new(name: &str, description: &str, display_order: i32) -> Result<Self, DomainError> {
        Ok(Self {
            id: MenuCategoryId::new(),
            name: require_text(name, "name")?,
            description: require_text(description, "description")?,
            display_order: validate_display_order(display_order)?,
            is_active: true,
            menu_items: Vec::new(),
        })
    }

    pub fn id(&self) -> MenuCategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn display_order(&self) -> i32 {
        self.display_order
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    /// Adds an item to the category.
    ///
    /// Item names are unique within a category, compared case-insensitively.
    pub fn add_menu_item(
        &mut self,
        name: &str,
        description: &str,
        price: Money,
        is_available: bool,
    ) -> Result<MenuItemId, DomainError> {
        if self
            .menu_items
            .iter()
            .any(|item| item.name.eq_ignore_ascii_case(name))
        {
            return Err(DomainError::business_rule(format!(
                "Menu item '{name}' already exists in this category"
            )));
        }

        let item = MenuItem::new(name, description, price, is_available)?;
        let item_id = item.id;
        self.menu_items.push(item);
        Ok(item_id)
    }

    /// Changes the display position of the category.
    pub fn update_display_order(&mut self, new_order: i32) -> Result<(), DomainError> {
        self.display_order = validate_display_order(new_order)?;
        Ok(())
    }
}
