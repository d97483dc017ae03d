use crate::presentation::serialization::string_or_number_opt;
use crate::utils::resource::account_id_from_name;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A Merchant Center account
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Resource name, `accounts/{account}`
    #[serde(default)]
    pub name: String,
    /// Numeric account id (int64, transported as a string)
    #[serde(
        default,
        deserialize_with = "string_or_number_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub account_id: Option<String>,
    /// Human readable account name
    #[serde(default)]
    pub account_name: String,
    /// Whether the account contains adult content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adult_content: Option<bool>,
    /// Whether this is a test account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_account: Option<bool>,
    /// Time zone of the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,
    /// BCP-47 language code, e.g. `en-US`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl Account {
    /// Account id, taken from the explicit field or parsed from the resource name
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.account_id
            .as_deref()
            .or_else(|| account_id_from_name(&self.name))
    }
}

/// IANA time zone of an account
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZone {
    /// IANA time zone id, e.g. `America/New_York`
    #[serde(default)]
    pub id: String,
    /// Optional time zone database version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
