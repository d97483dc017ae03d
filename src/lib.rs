//! # Merchant API Samples
//!
//! A small, typed client for the Google Merchant API (Accounts sub-API, `v1`) together
//! with the sample routines used by the binaries under `samples/`.
//!
//! Every sample follows the same linear shape:
//!
//! 1. load the configuration and `merchant-info.json`,
//! 2. acquire credentials (service account, stored refresh token or a raw access token),
//! 3. build one request,
//! 4. invoke one remote operation (list operations return a lazy paged stream),
//! 5. print the result, or print the error message.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use merchant_api_samples::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new())?;
//!
//!     let mut accounts = client.list_accounts(ListAccountsRequest::new());
//!     while let Some(account) = accounts.try_next().await? {
//!         println!("{account:?}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! Values are read from the environment (and from a `.env` file when present):
//!
//! | Variable | Default |
//! |---|---|
//! | `MERCHANT_CONFIG_DIR` | `$HOME/shopping-samples/content` |
//! | `MERCHANT_API_BASE_URL` | `https://merchantapi.googleapis.com` |
//! | `MERCHANT_API_TIMEOUT` | `30` |
//! | `MERCHANT_API_ACCESS_TOKEN` | unset |
//! | `GOOGLE_APPLICATION_CREDENTIALS` | unset |
//! | `GOOGLE_OAUTH_TOKEN_URI` | `https://oauth2.googleapis.com/token` |
//! | `LOGLEVEL` | `INFO` |

/// Application layer: configuration, authentication, the typed client and service traits
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by the whole crate
pub mod error;
/// Wire-level models: requests, page envelopes, credentials and the HTTP transport
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Resource models returned by the API
pub mod presentation;
/// Sample routines executed by the sample binaries
pub mod samples;
/// Utilities: environment helpers, logging and resource names
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
