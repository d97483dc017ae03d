// Integration tests for user endpoints

use crate::common::{BEARER, create_test_client};
use merchant_api_samples::prelude::*;
use merchant_api_samples::samples::users::{create_user, delete_user, list_users, update_user};
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_get_user() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/accounts/v1/accounts/123/users/a@b.com")
        .match_header("authorization", BEARER)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "name": "accounts/123/users/a@b.com",
                "state": "VERIFIED",
                "accessRights": ["STANDARD", "PERFORMANCE_REPORTING"]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let user = client
        .get_user(GetUserRequest::new(user_name("123", "a@b.com")))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(user.email(), Some("a@b.com"));
    assert_eq!(user.state, Some(UserState::Verified));
    assert_eq!(
        user.access_rights,
        vec![AccessRight::Standard, AccessRight::PerformanceReporting]
    );
}

#[tokio::test]
async fn test_list_users_follows_page_tokens() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/accounts/v1/accounts/123/users")
        .match_header("authorization", BEARER)
        .match_query(Matcher::Regex("^pageSize=1$".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "users": [{"name": "accounts/123/users/a@b.com"}],
                "nextPageToken": "u2"
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/accounts/v1/accounts/123/users")
        .match_query(Matcher::UrlEncoded("pageToken".to_string(), "u2".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "users": [{"name": "accounts/123/users/c@d.com"}],
                "nextPageToken": ""
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let users: Vec<User> = client
        .list_users(ListUsersRequest::new(account_name("123")).with_page_size(1))
        .try_collect()
        .await
        .unwrap();

    first.assert_async().await;
    second.assert_async().await;
    let emails: Vec<&str> = users.iter().filter_map(User::email).collect();
    assert_eq!(emails, vec!["a@b.com", "c@d.com"]);
}

#[tokio::test]
async fn test_list_users_sample() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/accounts/v1/accounts/123/users")
        .match_header("authorization", BEARER)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"users": [
                {"name": "accounts/123/users/a@b.com", "state": "VERIFIED"},
                {"name": "accounts/123/users/c@d.com", "state": "PENDING"}
            ]})
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let mut out = Vec::new();
    let count = list_users(&client, "123", &mut out).await.unwrap();

    mock.assert_async().await;
    assert_eq!(count, 2);
    let text = String::from_utf8(out).unwrap();
    assert!(text.find("a@b.com").unwrap() < text.find("c@d.com").unwrap());
    assert!(text.ends_with("Found 2 users.\n"));
}

#[tokio::test]
async fn test_create_user() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/accounts/v1/accounts/123/users")
        .match_header("authorization", BEARER)
        .match_query(Matcher::UrlEncoded("userId".to_string(), "a@b.com".to_string()))
        .match_body(Matcher::Json(
            json!({"accessRights": ["ADMIN", "PERFORMANCE_REPORTING"]}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "name": "accounts/123/users/a@b.com",
                "state": "PENDING",
                "accessRights": ["ADMIN", "PERFORMANCE_REPORTING"]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let mut out = Vec::new();
    let user = create_user(&client, "123", "a@b.com", &mut out).await.unwrap();

    mock.assert_async().await;
    assert_eq!(user.state, Some(UserState::Pending));
    assert_eq!(String::from_utf8(out).unwrap(), "accounts/123/users/a@b.com\n");
}

#[tokio::test]
async fn test_update_user() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/accounts/v1/accounts/123/users/a@b.com")
        .match_header("authorization", BEARER)
        .match_query(Matcher::UrlEncoded(
            "updateMask".to_string(),
            "access_rights".to_string(),
        ))
        .match_body(Matcher::Json(json!({
            "name": "accounts/123/users/a@b.com",
            "accessRights": ["ADMIN"]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "name": "accounts/123/users/a@b.com",
                "state": "VERIFIED",
                "accessRights": ["ADMIN"]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let mut out = Vec::new();
    let user = update_user(&client, "123", "a@b.com", vec![AccessRight::Admin], &mut out)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(user.access_rights, vec![AccessRight::Admin]);
    assert_eq!(String::from_utf8(out).unwrap(), "accounts/123/users/a@b.com\n");
}

#[tokio::test]
async fn test_update_user_requires_name() {
    let server = Server::new_async().await;
    let client = create_test_client(&server.url());

    let request = UpdateUserRequest::new(
        User::with_access_rights(vec![AccessRight::Admin]),
        vec!["access_rights".to_string()],
    );
    let err = client.update_user(request).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_delete_user_with_empty_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/accounts/v1/accounts/123/users/a@b.com")
        .match_header("authorization", BEARER)
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let mut out = Vec::new();
    delete_user(&client, "123", "a@b.com", &mut out).await.unwrap();

    mock.assert_async().await;
    assert_eq!(String::from_utf8(out).unwrap(), "Delete successful.\n");
}

#[tokio::test]
async fn test_delete_user_with_empty_object() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/accounts/v1/accounts/123/users/c@d.com")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    client
        .delete_user(DeleteUserRequest::new(user_name("123", "c@d.com")))
        .await
        .unwrap();

    mock.assert_async().await;
}
