//! Domain layer for the food-delivery platform.
//!
//! This crate provides the core domain model including:
//! - AggregateRoot trait with domain-event accumulation
//! - Restaurant, Order, Delivery and User aggregates with their state machines
//! - Command trait and CommandHandler for command processing
//! - Shared value objects (addresses, locations, business hours)

pub mod aggregate;
pub mod command;
pub mod delivery;
pub mod error;
pub mod order;
pub mod restaurant;
pub mod user;
pub mod value_objects;

pub use aggregate::{AggregateRoot, DomainEvent, EventBuffer};
pub use command::{
    Command, CommandHandler, CommandOutcome, EventPublisher, InMemoryEventPublisher,
    InMemoryRepository, Repository,
};
pub use delivery::{Delivery, DeliveryEvent, DeliveryStatus};
pub use error::DomainError;
pub use order::{
    AddItem, AssignRider, CancelOrder, CompleteDelivery, CompletePreparation, ConfirmOrder,
    CreateOrder, Order, OrderEvent, OrderItem, OrderService, OrderStatus, PlaceOrder, RemoveItem,
    StartPreparation, UpdateItemQuantity, DEFAULT_TAX_RATE,
};
pub use restaurant::{MenuCategory, MenuItem, Restaurant, RestaurantEvent, RestaurantStatus};
pub use user::{User, UserEvent, UserRole, UserStatus};
pub use value_objects::{Address, BusinessHours, Location, LocationUpdate};
