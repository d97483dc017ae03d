/// Accounts service interface
pub mod accounts;
/// Developer registration service interface
pub mod developer_registration;
/// Users service interface
pub mod users;
