use merchant_api_samples::application::config::{Config, MerchantInfo};
use merchant_api_samples::error::AppError;
use nanoid::nanoid;
use std::fs;
use std::path::PathBuf;

fn temp_config_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("merchant-config-{}", nanoid!()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_merchant_info_from_config_dir() {
    let dir = temp_config_dir();
    fs::write(dir.join("merchant-info.json"), r#"{"merchantId": "5551234"}"#).unwrap();

    let config = Config::for_dir(&dir, "http://localhost");
    let info = config.merchant_info().unwrap();
    assert_eq!(info.merchant_id, "5551234");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_merchant_info_numeric_id() {
    let dir = temp_config_dir();
    let path = dir.join("merchant-info.json");
    fs::write(&path, r#"{"merchantId": 5551234, "accountSampleUser": "x@y.com"}"#).unwrap();

    let info = MerchantInfo::load(&path).unwrap();
    assert_eq!(info.merchant_id, "5551234");

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_merchant_info_missing() {
    let dir = temp_config_dir();
    let config = Config::for_dir(&dir, "http://localhost");
    let err = config.merchant_info().unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
    assert!(err.to_string().contains("merchant-info.json"));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_merchant_info_malformed() {
    let dir = temp_config_dir();
    let path = dir.join("merchant-info.json");
    fs::write(&path, "{not json").unwrap();

    let err = MerchantInfo::load(&path).unwrap_err();
    assert!(matches!(err, AppError::Json(_)));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_config_paths_follow_dir() {
    let dir = temp_config_dir();
    let config = Config::for_dir(&dir, "http://localhost");
    assert_eq!(config.paths.config_dir, dir);
    assert_eq!(config.paths.token_file, dir.join("token.json"));
    assert_eq!(
        config.paths.client_secrets_file,
        dir.join("client-secrets.json")
    );

    fs::remove_dir_all(dir).unwrap();
}
