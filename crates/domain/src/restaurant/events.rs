//! Restaurant domain events.

use hotplate_common::{MenuCategoryId, MenuItemId, Money, RestaurantId, UserId};
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

/// Events recorded by the restaurant aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RestaurantEvent {
    /// Restaurant was registered and is awaiting approval.
    Registered(RestaurantRegisteredData),

    /// Restaurant was approved by the platform.
    Approved(RestaurantApprovedData),

    /// Restaurant was suspended by an operator.
    Suspended(RestaurantSuspendedData),

    /// A menu category was added.
    MenuCategoryAdded(MenuCategoryAddedData),

    /// A menu item was added to a category.
    MenuItemAdded(MenuItemAddedData),
}

impl DomainEvent for RestaurantEvent {
    fn event_type(&self) -> &'static str {
        match self {
            RestaurantEvent::Registered(_) => "RestaurantRegistered",
            RestaurantEvent::Approved(_) => "RestaurantApproved",
            RestaurantEvent::Suspended(_) => "RestaurantSuspended",
            RestaurantEvent::MenuCategoryAdded(_) => "MenuCategoryAdded",
            RestaurantEvent::MenuItemAdded(_) => "MenuItemAdded",
        }
    }
}

/// Data for the RestaurantRegistered event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantRegisteredData {
    /// The restaurant that was registered.
    pub restaurant_id: RestaurantId,

    /// Restaurant name at registration time.
    pub name: String,

    /// The user who owns the restaurant.
    pub owner_id: UserId,
}

/// Data for the RestaurantApproved event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantApprovedData {
    /// The restaurant that was approved.
    pub restaurant_id: RestaurantId,
}

/// Data for the RestaurantSuspended event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantSuspendedData {
    /// The restaurant that was suspended.
    pub restaurant_id: RestaurantId,
}

/// Data for the MenuCategoryAdded event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategoryAddedData {
    /// The restaurant the category belongs to.
    pub restaurant_id: RestaurantId,

    /// The new category.
    pub category_id: MenuCategoryId,

    /// Category name.
    pub name: String,
}

/// Data for the MenuItemAdded event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemAddedData {
    /// The restaurant the item belongs to.
    pub restaurant_id: RestaurantId,

    /// The category the item was added to.
    pub category_id: MenuCategoryId,

    /// The new item.
    pub item_id: MenuItemId,

    /// Item name.
    pub item_name: String,

    /// Item price.
    pub price: Money,
}

// Convenience constructors for events
impl RestaurantEvent {
    /// Creates a RestaurantRegistered event.
    pub fn registered(restaurant_id: RestaurantId, name: impl Into<String>, owner_id: UserId) -> Self {
        RestaurantEvent::Registered(RestaurantRegisteredData {
            restaurant_id,
            name: name.into(),
            owner_id,
        })
    }

    /// Creates a RestaurantApproved event.
    pub fn approved(restaurant_id: RestaurantId) -> Self {
        RestaurantEvent::Approved(RestaurantApprovedData { restaurant_id })
    }

    /// Creates a RestaurantSuspended event.
    pub fn suspended(restaurant_id: RestaurantId) -> Self {
        RestaurantEvent::Suspended(RestaurantSuspendedData { restaurant_id })
    }

    /// Creates a MenuCategoryAdded event.
    pub fn menu_category_added(
        restaurant_id: RestaurantId,
        category_id: MenuCategoryId,
        name: impl Into<String>,
    ) -> Self {
        RestaurantEvent::MenuCategoryAdded(MenuCategoryAddedData {
            restaurant_id,
            category_id,
            name: name.into(),
        })
    }

    /// Creates a MenuItemAdded event.
    pub fn menu_item_added(
        restaurant_id: RestaurantId,
        category_id: MenuCategoryId,
        item_id: MenuItemId,
        item_name: impl Into<String>,
        price: Money,
    ) -> Self {
        RestaurantEvent::MenuItemAdded(MenuItemAddedData {
            restaurant_id,
            category_id,
            item_id,
            item_name: item_name.into(),
            price,
        })
    }
}
