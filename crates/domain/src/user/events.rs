//! User domain events.

use hotplate_common::UserId;
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;
use crate::value_objects::Address;

use super::state::UserRole;

/// Events recorded by the user aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UserEvent {
    /// A new account was registered.
    Registered(UserRegisteredData),

    /// An address was added to the account.
    ///
    /// Carries the whole address, not just an identifier.
    AddressAdded(AddressAddedData),

    /// The account was shut off.
    Deactivated(UserDeactivatedData),
}

impl UserEvent {
    pub fn registered(user_id: UserId, email: impl Into<String>, role: UserRole) -> Self {
        UserEvent::Registered(UserRegisteredData {
            user_id,
            email: email.into(),
            role,
        })
    }

    pub fn address_added(user_id: UserId, address: Address) -> Self {
        UserEvent::AddressAdded(AddressAddedData { user_id, address })
    }

    pub fn deactivated(user_id: UserId) -> Self {
        UserEvent::Deactivated(UserDeactivatedData { user_id })
    }
}

impl DomainEvent for UserEvent {
    fn event_type(&self) -> &'static str {
        match self {
            UserEvent::Registered(_) => "UserRegistered",
            UserEvent::AddressAdded(_) => "AddressAdded",
            UserEvent::Deactivated(_) => "UserDeactivated",
        }
    }
}

/// Data for the UserRegistered event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRegisteredData {
    pub user_id: UserId,
    pub email: String,
    pub role: UserRole,
}

/// Data for the AddressAdded event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressAddedData {
    pub user_id: UserId,
    pub address: Address,
}

/// Data for the UserDeactivated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDeactivatedData {
    pub user_id: UserId,
}
