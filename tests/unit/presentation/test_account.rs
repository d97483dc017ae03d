use merchant_api_samples::presentation::account::{Account, TimeZone};

#[test]
fn test_account_id_as_number() {
    let account: Account =
        serde_json::from_str(r#"{"name": "accounts/42", "accountId": 42}"#).unwrap();
    assert_eq!(account.account_id.as_deref(), Some("42"));
}

#[test]
fn test_account_id_from_name_when_missing() {
    let account: Account = serde_json::from_str(r#"{"name": "accounts/77"}"#).unwrap();
    assert!(account.account_id.is_none());
    assert_eq!(account.id(), Some("77"));
}

#[test]
fn test_account_debug_is_pretty_json() {
    let account = Account {
        name: "accounts/1".to_string(),
        account_name: "Shop".to_string(),
        time_zone: Some(TimeZone {
            id: "America/New_York".to_string(),
            version: None,
        }),
        ..Account::default()
    };
    let debug = format!("{account:?}");
    assert!(debug.contains('\n'));
    assert!(debug.contains("accountName"));
    assert!(debug.contains("Shop"));

    let display = account.to_string();
    assert!(!display.contains('\n'));
    assert!(display.contains("America/New_York"));
}

#[test]
fn test_account_ignores_unknown_fields() {
    let json = r#"{"name": "accounts/1", "accountName": "Shop", "somethingNew": {"a": 1}}"#;
    let account: Account = serde_json::from_str(json).unwrap();
    assert_eq!(account.account_name, "Shop");
}
