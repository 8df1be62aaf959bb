//! Restaurant aggregate root.

use chrono::{DateTime, NaiveTime, Utc};
use hotplate_common::{MenuCategoryId, MenuItemId, Money, RestaurantId, UserId};
use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregateRoot, EventBuffer};
use crate::error::DomainError;
use crate::value_objects::{Address, BusinessHours};

use super::events::RestaurantEvent;
use super::menu::MenuCategory;
use super::state::RestaurantStatus;

/// A restaurant registered on the platform, owning its menu.
///
/// Registration validates the submitted profile and leaves the restaurant
/// in `PendingApproval`. Approval and suspension are guarded by the status
/// machine; menu edits are allowed in any status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    id: RestaurantId,
    name: String,
    description: String,
    phone_number: String,
    email: String,
    address: Address,
    owner_id: UserId,
    status: RestaurantStatus,
    business_hours: BusinessHours,
    delivery_fee: Money,
    minimum_order_amount: Money,
    estimated_delivery_minutes: u32,
    created_at: DateTime<Utc>,
    menu_categories: Vec<MenuCategory>,
    cuisine_types: Vec<String>,
    #[serde(skip)]
    events: EventBuffer<RestaurantEvent>,
}

impl Restaurant {
    /// Registers a new restaurant pending platform approval.
    ///
    /// Profile fields are stored as submitted; validation rejects blank
    /// fields without altering them.
    #[allow(clippy::too_many_arguments)]
    pub fn register(
        name: &str,
        description: &str,
        phone_number: &str,
        email: &str,
        address: Address,
        owner_id: UserId,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
        delivery_fee: Money,
        minimum_order_amount: Money,
        estimated_delivery_minutes: u32,
    ) -> Result<Self, DomainError> {
        validate_basic_info(name, description, phone_number, email)?;
        let business_hours = BusinessHours::new(opening_time, closing_time)?;
        validate_business_rules(delivery_fee, minimum_order_amount, estimated_delivery_minutes)?;

        let mut restaurant = Self {
            id: RestaurantId::new(),
            name: name.to_string(),
            description: description.to_string(),
            phone_number: phone_number.to_string(),
            email: email.to_string(),
            address,
            owner_id,
            status: RestaurantStatus::PendingApproval,
            business_hours,
            delivery_fee,
            minimum_order_amount,
            estimated_delivery_minutes,
            created_at: Utc::now(),
            menu_categories: Vec::new(),
            cuisine_types: Vec::new(),
            events: EventBuffer::new(),
        };

        restaurant
            .events
            .record(RestaurantEvent::registered(restaurant.id, name, owner_id));
        Ok(restaurant)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn status(&self) -> RestaurantStatus {
        self.status
    }

    pub fn business_hours(&self) -> BusinessHours {
        self.business_hours
    }

    pub fn delivery_fee(&self) -> Money {
        self.delivery_fee
    }

    pub fn minimum_order_amount(&self) -> Money {
        self.minimum_order_amount
    }

    pub fn estimated_delivery_minutes(&self) -> u32 {
        self.estimated_delivery_minutes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn menu_categories(&self) -> &[MenuCategory] {
        &self.menu_categories
    }

    /// Looks up a menu category by id.
    pub fn menu_category(&self, category_id: MenuCategoryId) -> Option<&MenuCategory> {
        self.menu_categories.iter().find(|c| c.id() == category_id)
    }

    pub fn cuisine_types(&self) -> &[String] {
        &self.cuisine_types
    }

    /// Adds a menu category.
    ///
    /// Category names are unique per restaurant, compared case-insensitively.
    pub fn add_menu_category(
        &mut self,
        name: &str,
        description: &str,
        display_order: i32,
    ) -> Result<MenuCategoryId, DomainError> {
        if self
            .menu_categories
            .iter()
            .any(|c| c.name().eq_ignore_ascii_case(name))
        {
            return Err(DomainError::business_rule(format!(
                "Menu category '{name}' already exists"
            )));
        }

        let category = MenuCategory::new(name, description, display_order)?;
        let category_id = category.id();
        self.menu_categories.push(category);

        self.events
            .record(RestaurantEvent::menu_category_added(self.id, category_id, name));
        Ok(category_id)
    }

    /// Adds a menu item to an existing category.
    ///
    /// Item validation and per-category name uniqueness are handled by the
    /// category.
    pub fn add_menu_item(
        &mut self,
        category_id: MenuCategoryId,
        name: &str,
        description: &str,
        price: Money,
        is_available: bool,
    ) -> Result<MenuItemId, DomainError> {
        let category = self
            .menu_categories
            .iter_mut()
            .find(|c| c.id() == category_id)
            .ok_or_else(|| DomainError::not_found("MenuCategory", category_id))?;

        let item_id = category.add_menu_item(name, description, price, is_available)?;

        self.events.record(RestaurantEvent::menu_item_added(
            self.id,
            category_id,
            item_id,
            name,
            price,
        ));
        Ok(item_id)
    }

    /// Adds a cuisine type tag.
    ///
    /// Duplicates (case-insensitive) are skipped silently. No event is
    /// recorded.
    pub fn add_cuisine_type(&mut self, cuisine_type: &str) -> Result<(), DomainError> {
        let trimmed = cuisine_type.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Cuisine type cannot be empty"));
        }

        if !self
            .cuisine_types
            .iter()
            .any(|c| c.eq_ignore_ascii_case(trimmed))
        {
            self.cuisine_types.push(trimmed.to_string());
        }
        Ok(())
    }

    /// Approves a pending restaurant, making it active.
    pub fn approve(&mut self) -> Result<(), DomainError> {
        if !self.status.can_approve() {
            return Err(DomainError::business_rule(
                "Only pending restaurants can be approved",
            ));
        }

        self.status = RestaurantStatus::Active;
        self.events.record(RestaurantEvent::approved(self.id));
        Ok(())
    }

    /// Suspends an active restaurant.
    pub fn suspend(&mut self) -> Result<(), DomainError> {
        if !self.status.can_suspend() {
            return Err(DomainError::business_rule(
                "Only active restaurants can be suspended",
            ));
        }

        self.status = RestaurantStatus::Suspended;
        self.events.record(RestaurantEvent::suspended(self.id));
        Ok(())
    }

    /// Returns true if the restaurant is active and the given instant falls
    /// within its business hours.
    ///
    /// Hours do not span midnight; only the time of day is considered.
    pub fn is_open_at(&self, at: DateTime<Utc>) -> bool {
        self.status.can_accept_orders() && self.business_hours.contains(at.time())
    }

    /// Replaces the business hours.
    ///
    /// Allowed in any status. No event is recorded.
    pub fn update_business_hours(
        &mut self,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
    ) -> Result<(), DomainError> {
        self.business_hours = BusinessHours::new(opening_time, closing_time)?;
        Ok(())
    }
}

impl AggregateRoot for Restaurant {
    type Id = RestaurantId;
    type Event = RestaurantEvent;

    fn aggregate_type() -> &'static str {
        "Restaurant"
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

fn validate_basic_info(
    name: &str,
    description: &str,
    phone_number: &str,
    email: &str,
) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("Restaurant name cannot be empty"));
    }
    if description.trim().is_empty() {
        return Err(DomainError::validation(
            "Restaurant description cannot be empty",
        ));
    }
    if phone_number.trim().is_empty() {
        return Err(DomainError::validation("Phone number cannot be empty"));
    }
    if email.trim().is_empty() || !email.contains('@') {
        return Err(DomainError::validation("Valid email is required"));
    }
    Ok(())
}

fn validate_business_rules(
    delivery_fee: Money,
    minimum_order_amount: Money,
    estimated_delivery_minutes: u32,
) -> Result<(), DomainError> {
    if delivery_fee.is_negative() {
        return Err(DomainError::validation("Delivery fee cannot be negative"));
    }
    if minimum_order_amount.is_negative() {
        return Err(DomainError::validation(
            "Minimum order amount cannot be negative",
        ));
    }
    if estimated_delivery_minutes == 0 {
        return Err(DomainError::validation(
            "Estimated delivery time must be positive",
        ));
    }
    Ok(())
}
