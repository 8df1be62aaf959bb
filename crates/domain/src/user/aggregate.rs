//! User aggregate root.

use chrono::{DateTime, Utc};
use hotplate_common::UserId;
use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregateRoot, EventBuffer};
use crate::error::DomainError;
use crate::value_objects::Address;

use super::events::UserEvent;
use super::state::{UserRole, UserStatus};

/// A platform account, either a customer or a rider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: String,
    first_name: String,
    last_name: String,
    phone_number: String,
    role: UserRole,
    status: UserStatus,
    created_at: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
    addresses: Vec<Address>,
    #[serde(skip)]
    events: EventBuffer<UserEvent>,
}

impl User {
    /// Registers a new customer account.
    pub fn register_customer(
        email: &str,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> Result<Self, DomainError> {
        Self::register(email, first_name, last_name, phone_number, UserRole::Customer)
    }

    /// Registers a new rider account.
    pub fn register_rider(
        email: &str,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> Result<Self, DomainError> {
        Self::register(email, first_name, last_name, phone_number, UserRole::Rider)
    }

    fn register(
        email: &str,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
        role: UserRole,
    ) -> Result<Self, DomainError> {
        validate_email(email)?;
        validate_name(first_name, "first_name")?;
        validate_name(last_name, "last_name")?;
        validate_phone_number(phone_number)?;

        let mut user = Self {
            id: UserId::new(),
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone_number: phone_number.to_string(),
            role,
            status: UserStatus::Active,
            created_at: Utc::now(),
            last_login_at: None,
            addresses: Vec::new(),
            events: EventBuffer::new(),
        };

        user.events
            .record(UserEvent::registered(user.id, email, role));
        Ok(user)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_login_at(&self) -> Option<DateTime<Utc>> {
        self.last_login_at
    }

    /// Returns the addresses in the order they were added.
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Returns first and last name joined with a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the address flagged as default, if any.
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|address| address.is_default())
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn is_customer(&self) -> bool {
        self.role == UserRole::Customer
    }

    pub fn is_rider(&self) -> bool {
        self.role == UserRole::Rider
    }

    /// Adds an address to the account.
    ///
    /// A new default address demotes every existing address first, so at
    /// most one address is the default at any time.
    #[allow(clippy::too_many_arguments)]
    pub fn add_address(
        &mut self,
        street: &str,
        city: &str,
        postal_code: &str,
        country: &str,
        latitude: f64,
        longitude: f64,
        is_default: bool,
    ) -> Result<(), DomainError> {
        let address = Address::new(
            street, city, postal_code, country, latitude, longitude, is_default,
        )?;

        if is_default {
            for existing in &mut self.addresses {
                existing.set_as_non_default();
            }
        }

        self.addresses.push(address.clone());
        self.events.record(UserEvent::address_added(self.id, address));
        Ok(())
    }

    /// Stamps the last login time. Records no event.
    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(Utc::now());
    }

    /// Shuts the account off. One-way.
    pub fn deactivate(&mut self) -> Result<(), DomainError> {
        if !self.status.can_deactivate() {
            return Err(DomainError::business_rule("User is already deactivated"));
        }

        self.status = UserStatus::Deactivated;
        self.events.record(UserEvent::deactivated(self.id));
        Ok(())
    }
}

impl AggregateRoot for User {
    type Id = UserId;
    type Event = UserEvent;

    fn aggregate_type() -> &'static str {
        "User"
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

fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.trim().is_empty() {
        return Err(DomainError::validation("Email cannot be empty"));
    }
    if !email.contains('@') {
        return Err(DomainError::validation("Invalid email format"));
    }
    Ok(())
}

fn validate_name(name: &str, field: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    if name.chars().count() < 2 {
        return Err(DomainError::validation(format!(
            "{field} must be at least 2 characters"
        )));
    }
    Ok(())
}

fn validate_phone_number(phone_number: &str) -> Result<(), DomainError> {
    if phone_number.trim().is_empty() {
        return Err(DomainError::validation("Phone number cannot be empty"));
    }
    if phone_number.chars().count() < 10 {
        return Err(DomainError::validation(
            "Phone number must be at least 10 digits",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::DomainEvent;

    fn customer() -> User {
        User::register_customer("cat@example.com", "Felix", "Whiskers", "+1-555-0100").unwrap()
    }

    #[test]
    fn test_register_customer() {
        let user = customer();

        assert_eq!(user.email(), "cat@example.com");
        assert_eq!(user.full_name(), "Felix Whiskers");
        assert_eq!(user.role(), UserRole::Customer);
        assert_eq!(user.status(), UserStatus::Active);
        assert!(user.is_active());
        assert!(user.is_customer());
        assert!(!user.is_rider());
        assert!(user.last_login_at().is_none());
        assert!(user.addresses().is_empty());

        let events = user.domain_events();
        assert_eq!(events.len(), 1);
        if let UserEvent::Registered(data) = &events[0] {
            assert_eq!(data.email, "cat@example.com");
            assert_eq!(data.role, UserRole::Customer);
        } else {
            panic!("Expected UserRegistered event");
        }
    }

    #[test]
    fn test_register_rider() {
        let user =
            User::register_rider("rider@example.com", "Tom", "Paws", "+1-555-0101").unwrap();

        assert_eq!(user.role(), UserRole::Rider);
        assert!(user.is_rider());
        assert!(!user.is_customer());
    }

    #[test]
    fn test_register_validation_messages() {
        let cases = [
            (("", "Felix", "Whiskers", "+1-555-0100"), "Email cannot be empty"),
            (
                ("not-an-email", "Felix", "Whiskers", "+1-555-0100"),
                "Invalid email format",
            ),
            (
                ("cat@example.com", "  ", "Whiskers", "+1-555-0100"),
                "first_name cannot be empty",
            ),
            (
                ("cat@example.com", "F", "Whiskers", "+1-555-0100"),
                "first_name must be at least 2 characters",
            ),
            (
                ("cat@example.com", "Felix", "W", "+1-555-0100"),
                "last_name must be at least 2 characters",
            ),
            (
                ("cat@example.com", "Felix", "Whiskers", ""),
                "Phone number cannot be empty",
            ),
            (
                ("cat@example.com", "Felix", "Whiskers", "555-0100"),
                "Phone number must be at least 10 digits",
            ),
        ];

        for ((email, first, last, phone), expected) in cases {
            let err = User::register_customer(email, first, last, phone).unwrap_err();
            assert!(err.is_validation(), "{expected}");
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_add_address_records_event_with_whole_address() {
        let mut user = customer();
        user.clear_domain_events();

        user.add_address("123 Main St", "Springfield", "12345", "USA", 40.0, -74.0, true)
            .unwrap();

        assert_eq!(user.addresses().len(), 1);
        let events = user.domain_events();
        assert_eq!(events.len(), 1);
        if let UserEvent::AddressAdded(data) = &events[0] {
            assert_eq!(data.address.street(), "123 Main St");
            assert!(data.address.is_default());
        } else {
            panic!("Expected AddressAdded event");
        }
    }

    #[test]
    fn test_new_default_address_demotes_existing_ones() {
        let mut user = customer();
        user.add_address("123 Main St", "Springfield", "12345", "USA", 40.0, -74.0, true)
            .unwrap();
        user.add_address("9 Oak Ave", "Springfield", "12346", "USA", 40.1, -74.1, true)
            .unwrap();

        let defaults: Vec<_> = user
            .addresses()
            .iter()
            .filter(|a| a.is_default())
            .collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(user.default_address().unwrap().street(), "9 Oak Ave");
        assert!(!user.addresses()[0].is_default());
    }

    #[test]
    fn test_non_default_address_leaves_default_alone() {
        let mut user = customer();
        user.add_address("123 Main St", "Springfield", "12345", "USA", 40.0, -74.0, true)
            .unwrap();
        user.add_address("9 Oak Ave", "Springfield", "12346", "USA", 40.1, -74.1, false)
            .unwrap();

        assert_eq!(user.default_address().unwrap().street(), "123 Main St");
    }

    #[test]
    fn test_rejected_address_leaves_user_unchanged() {
        let mut user = customer();
        user.add_address("123 Main St", "Springfield", "12345", "USA", 40.0, -74.0, true)
            .unwrap();
        user.clear_domain_events();

        let err = user
            .add_address("9 Oak Ave", "Springfield", "12346", "USA", 91.0, -74.1, true)
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(user.addresses().len(), 1);
        assert!(user.addresses()[0].is_default());
        assert!(user.domain_events().is_empty());
    }

    #[test]
    fn test_update_last_login_records_no_event() {
        let mut user = customer();
        user.clear_domain_events();

        user.update_last_login();

        assert!(user.last_login_at().is_some());
        assert!(user.domain_events().is_empty());
    }

    #[test]
    fn test_deactivate_is_one_way() {
        let mut user = customer();
        user.clear_domain_events();

        user.deactivate().unwrap();
        assert!(!user.is_active());
        assert_eq!(user.domain_events()[0].event_type(), "UserDeactivated");

        let err = user.deactivate().unwrap_err();
        assert!(err.is_business_rule());
        assert_eq!(err.to_string(), "User is already deactivated");
    }

    #[test]
    fn test_rehydration_preserves_addresses_with_empty_buffer() {
        let mut user = customer();
        user.add_address("123 Main St", "Springfield", "12345", "USA", 40.0, -74.0, true)
            .unwrap();
        user.update_last_login();

        let json = serde_json::to_string(&user).unwrap();
        let restored: User = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.id(), user.id());
        assert_eq!(restored.addresses().len(), 1);
        assert!(restored.last_login_at().is_some());
        assert!(restored.domain_events().is_empty());
    }
}
