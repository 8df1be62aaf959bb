//! User accounts for customers and riders.

mod aggregate;
mod events;
mod state;

pub use aggregate::User;
pub use events::{AddressAddedData, UserDeactivatedData, UserEvent, UserRegisteredData};
pub use state::{UserRole, UserStatus};
