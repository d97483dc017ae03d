/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::model::pagination::Page;
use crate::presentation::account::Account;
use crate::presentation::user::User;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// One page of accounts, returned by both list and list-sub-accounts calls
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAccountsResponse {
    /// Accounts on this page
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// Token of the next page; absent or empty on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl Page for ListAccountsResponse {
    type Item = Account;

    fn into_parts(self) -> (Vec<Account>, Option<String>) {
        (self.accounts, self.next_page_token)
    }
}

/// One page of users
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersResponse {
    /// Users on this page
    #[serde(default)]
    pub users: Vec<User>,
    /// Token of the next page; absent or empty on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl Page for ListUsersResponse {
    type Item = User;

    fn into_parts(self) -> (Vec<User>, Option<String>) {
        (self.users, self.next_page_token)
    }
}

/// Empty response body, returned by delete calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// Error envelope returned by Google APIs
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    /// Error details
    pub error: ErrorDetails,
}

/// Details of an API error
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetails {
    /// HTTP status code
    #[serde(default)]
    pub code: u16,
    /// Human readable message
    #[serde(default)]
    pub message: String,
    /// Canonical status, e.g. `NOT_FOUND`
    #[serde(default)]
    pub status: String,
}
