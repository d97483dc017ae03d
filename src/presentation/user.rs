use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A user with access to a Merchant Center account
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Resource name, `accounts/{account}/users/{email}`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Verification state, output only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<UserState>,
    /// Access rights granted to the user
    #[serde(default)]
    pub access_rights: Vec<AccessRight>,
}

impl User {
    /// Creates a user carrying only access rights, as expected by create calls
    #[must_use]
    pub fn with_access_rights(access_rights: Vec<AccessRight>) -> Self {
        Self {
            access_rights,
            ..Default::default()
        }
    }

    /// Email part of the resource name
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.name
            .split_once("/users/")
            .map(|(_, email)| email)
            .filter(|email| !email.is_empty())
    }
}

/// Verification state of a user
#[derive(Debug, Copy, Clone, DisplaySimple, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserState {
    /// Invitation sent, not accepted yet
    Pending,
    /// The user accepted the invitation
    Verified,
    /// Unknown or not reported
    #[serde(other)]
    StateUnspecified,
}

/// Access right a user holds on an account
#[derive(Debug, Copy, Clone, DisplaySimple, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessRight {
    /// Standard access
    Standard,
    /// Read-only access
    ReadOnly,
    /// Administrator access
    Admin,
    /// Access to performance reports
    PerformanceReporting,
    /// Access to API developer settings
    ApiDeveloper,
    /// Unknown or not reported
    #[serde(other)]
    AccessRightUnspecified,
}
