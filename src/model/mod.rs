/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
/// Credential and token models
pub mod auth;
/// HTTP transport with bearer authentication
pub mod http;
/// Lazy paged sequences
pub mod pagination;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
