//! Restaurant aggregate and related types.

mod aggregate;
mod events;
mod menu;
mod state;

pub use aggregate::Restaurant;
pub use events::{
    MenuCategoryAddedData, MenuItemAddedData, RestaurantApprovedData, RestaurantEvent,
    RestaurantRegisteredData, RestaurantSuspendedData,
};
pub use menu::{MenuCategory, MenuItem};
pub use state::RestaurantStatus;
