/// Account models
pub mod account;
/// Developer registration models
pub mod developer_registration;
/// Serialization utilities for API responses
pub mod serialization;
/// User models
pub mod user;

pub use account::{Account, TimeZone};
pub use developer_registration::DeveloperRegistration;
pub use user::{AccessRight, User, UserState};
