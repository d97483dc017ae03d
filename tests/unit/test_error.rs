use merchant_api_samples::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_api() {
    let error = AppError::Api {
        code: 404,
        status: "NOT_FOUND".to_string(),
        message: "Account not found.".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "api error 404 (NOT_FOUND): Account not found."
    );
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_app_error_display_credentials() {
    let error = AppError::Credentials("no credentials found".to_string());
    assert_eq!(error.to_string(), "credentials error: no credentials found");
}

#[test]
fn test_app_error_display_config() {
    let error = AppError::Config("missing merchant-info.json".to_string());
    assert_eq!(error.to_string(), "config error: missing merchant-info.json");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("user name is required".to_string());
    assert_eq!(error.to_string(), "invalid input: user name is required");
}

#[test]
fn test_app_error_from_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.to_string().starts_with("json error: "));
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error: AppError = io_error.into();
    assert_eq!(error.to_string(), "io error: gone");
}

#[test]
fn test_app_error_status() {
    assert_eq!(
        AppError::Unauthorized.status(),
        Some(StatusCode::UNAUTHORIZED)
    );
    let api = AppError::Api {
        code: 403,
        status: "PERMISSION_DENIED".to_string(),
        message: String::new(),
    };
    assert_eq!(api.status(), Some(StatusCode::FORBIDDEN));
    assert_eq!(
        AppError::Unexpected(StatusCode::BAD_GATEWAY).status(),
        Some(StatusCode::BAD_GATEWAY)
    );
    assert_eq!(AppError::Config("x".to_string()).status(), None);
}
