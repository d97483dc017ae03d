/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing resource name builders
pub mod resource;

pub use logger::*;
pub use resource::*;
