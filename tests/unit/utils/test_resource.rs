use merchant_api_samples::utils::resource::{
    account_id_from_name, account_name, developer_registration_name, user_name,
};

#[test]
fn test_account_name() {
    assert_eq!(account_name("123"), "accounts/123");
}

#[test]
fn test_user_name() {
    assert_eq!(user_name("123", "a@b.com"), "accounts/123/users/a@b.com");
    assert_eq!(user_name("123", "me"), "accounts/123/users/me");
}

#[test]
fn test_names_are_not_validated() {
    assert_eq!(user_name("", ""), "accounts//users/");
    assert_eq!(account_name("12 3"), "accounts/12 3");
}

#[test]
fn test_developer_registration_name() {
    assert_eq!(
        developer_registration_name("987"),
        "accounts/987/developerRegistration"
    );
}

#[test]
fn test_account_id_from_name() {
    assert_eq!(account_id_from_name("accounts/123"), Some("123"));
    assert_eq!(
        account_id_from_name("accounts/123/users/a@b.com"),
        Some("123")
    );
    assert_eq!(account_id_from_name("users/123"), None);
    assert_eq!(account_id_from_name("accounts/"), None);
}
