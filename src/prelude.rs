/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! # Merchant API Samples Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! of the library. By importing this prelude, you get access to everything a sample needs:
//! configuration, the client and its service traits, request and response models.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use merchant_api_samples::prelude::*;
//!
//! let config = Config::new();
//! let client = Client::new(config);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Merchant API client
pub use crate::application::config::{Config, MerchantInfo};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION
// ============================================================================

/// Credential discovery and token cache
pub use crate::application::auth::{Auth, discover_credentials};

/// Credential models
pub use crate::model::auth::{AccessToken, Credentials};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Typed Merchant API client
pub use crate::application::client::Client;

/// Service traits implemented by the client
pub use crate::application::interfaces::accounts::AccountsService;
pub use crate::application::interfaces::developer_registration::DeveloperRegistrationService;
pub use crate::application::interfaces::users::UserService;

/// HTTP transport
pub use crate::model::http::HttpClient;

// ============================================================================
// REQUEST AND RESPONSE MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{
    CreateUserRequest, DeleteUserRequest, GetAccountRequest, GetUserRequest, ListAccountsRequest,
    ListSubAccountsRequest, ListUsersRequest, RegisterGcpRequest, UpdateUserRequest,
};

/// Page envelopes
pub use crate::model::responses::{ListAccountsResponse, ListUsersResponse};

/// Paged sequences
pub use crate::model::pagination::{Page, paginate};

/// Resource models
pub use crate::presentation::{
    AccessRight, Account, DeveloperRegistration, TimeZone, User, UserState,
};

// ============================================================================
// SAMPLES AND UTILITIES
// ============================================================================

/// Sample error boundary and output helpers
pub use crate::samples::runner::{print_all, report_outcome};

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Resource name builders
pub use crate::utils::resource::{account_name, developer_registration_name, user_name};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use futures::{StreamExt, TryStreamExt};
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
