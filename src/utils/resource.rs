//! Resource name builders.
//!
//! Names are plain concatenations of the documented patterns; nothing is
//! validated or escaped locally, the API is the judge.

/// `accounts/{account_id}`
#[must_use]
pub fn account_name(account_id: &str) -> String {
    format!("accounts/{account_id}")
}

/// `accounts/{account_id}/users/{email}`
#[must_use]
pub fn user_name(account_id: &str, email: &str) -> String {
    format!("{}/users/{email}", account_name(account_id))
}

/// `accounts/{account_id}/developerRegistration`
#[must_use]
pub fn developer_registration_name(account_id: &str) -> String {
    format!("{}/developerRegistration", account_name(account_id))
}

/// Extracts the account id from a name such as `accounts/123` or `accounts/123/users/a@b.com`
#[must_use]
pub fn account_id_from_name(name: &str) -> Option<&str> {
    let mut segments = name.split('/');
    match (segments.next(), segments.next()) {
        (Some("accounts"), Some(id)) if !id.is_empty() => Some(id),
        _ => None,
    }
}
