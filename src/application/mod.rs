/// Credential discovery and token caching
pub mod auth;
/// Typed Merchant API client
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits implemented by the client
pub mod interfaces;
