//! Shared kernel for the delivery platform.
//!
//! This crate provides the types every bounded context agrees on:
//! - One typed identifier per entity kind, so ids of different kinds
//!   cannot be mixed up at compile time
//! - `Money`, an exact cent-based amount used for all prices and fees

pub mod ids;
pub mod money;

pub use ids::{
    DeliveryId, MenuCategoryId, MenuItemId, OrderId, OrderItemId, RestaurantId, UserId,
};
pub use money::Money;
