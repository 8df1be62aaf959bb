//! Delivery aggregate and related types.

mod aggregate;
mod events;
mod state;

pub use aggregate::Delivery;
pub use events::{
    DeliveryAssignedData, DeliveryCancelledData, DeliveryCompletedData,
    DeliveryEnRouteToCustomerData, DeliveryEvent, DeliveryStartedData, OrderPickedUpData,
    RiderLocationUpdatedData,
};
pub use state::DeliveryStatus;
