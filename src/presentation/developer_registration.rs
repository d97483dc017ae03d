use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Registration of GCP projects with a Merchant Center account
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperRegistration {
    /// Resource name, `accounts/{account}/developerRegistration`
    #[serde(default)]
    pub name: String,
    /// GCP project ids registered with the account
    #[serde(default)]
    pub gcp_ids: Vec<String>,
}
