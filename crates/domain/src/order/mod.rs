//! Order aggregate and related types.

mod aggregate;
mod commands;
mod events;
mod item;
mod service;
mod state;

pub use aggregate::{DEFAULT_TAX_RATE, Order};
pub use commands::*;
pub use events::{
    OrderAssignedToRiderData, OrderCancelledData, OrderConfirmedData, OrderCreatedData,
    OrderDeliveredData, OrderEvent, OrderItemAddedData, OrderItemQuantityUpdatedData,
    OrderItemRemovedData, OrderPlacedData, OrderPreparationStartedData, OrderReadyForPickupData,
};
pub use item::OrderItem;
pub use service::OrderService;
pub use state::OrderStatus;
