/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::constants::{ACCOUNTS_API_PATH, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::QueryParams;
use crate::model::responses::ErrorEnvelope;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// HTTP transport for the Merchant API with automatic authentication
///
/// Every request carries a bearer token obtained from [`Auth`]. Requests are
/// sent once; failures are mapped to [`AppError`] and returned as they are.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new transport
    ///
    /// No credentials are touched here; the first request acquires the token.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credential locations and API settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Transport ready to use
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Builds the URL of an Accounts API resource, e.g. `accounts/1/users`
    pub fn url(&self, resource: &str) -> String {
        if resource.starts_with("http") {
            return resource.to_string();
        }
        format!(
            "{}/{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            ACCOUNTS_API_PATH,
            resource.trim_start_matches('/')
        )
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: QueryParams,
    ) -> Result<T, AppError> {
        self.request(Method::GET, resource, query, None::<()>).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        resource: &str,
        query: QueryParams,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, resource, query, Some(body)).await
    }

    /// Makes a PATCH request
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        resource: &str,
        query: QueryParams,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::PATCH, resource, query, Some(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, resource: &str) -> Result<T, AppError> {
        self.request(Method::DELETE, resource, Vec::new(), None::<()>)
            .await
    }

    /// Makes an authenticated request and parses the JSON answer
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        resource: &str,
        query: QueryParams,
        body: Option<B>,
    ) -> Result<T, AppError> {
        let token = self.auth.get_token().await?;
        let url = self.url(resource);
        let auth_header_value = format!("Bearer {}", token.token);

        let headers = vec![
            ("Authorization", auth_header_value.as_str()),
            ("Accept", "application/json"),
        ];

        let response =
            make_http_request(&self.http_client, method, &url, headers, &query, &body).await?;
        parse_response(response).await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Parses a successful response, treating an empty body as `{}`
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let body = response.text().await?;
    let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
    Ok(serde_json::from_str(body)?)
}

/// Makes a single HTTP request and maps non-success statuses to errors
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Query parameters, in order
/// * `body` - Optional request body (serialized to JSON)
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError)` - `Unauthorized` on 401, `Api` when the body carries a
///   Google error envelope, `Unexpected` otherwise
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: &[(&'static str, String)],
    body: &Option<B>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if !query.is_empty() {
        request = request.query(query);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body_text = response.text().await.unwrap_or_default();
    Err(error_from_body(status, &body_text))
}

/// Maps a failed response to an error
pub fn error_from_body(status: StatusCode, body: &str) -> AppError {
    if status == StatusCode::UNAUTHORIZED {
        error!("Unauthorized: {}", body);
        return AppError::Unauthorized;
    }

    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            error!(
                "Request failed with status {}: {}",
                status, envelope.error.message
            );
            AppError::Api {
                code: if envelope.error.code == 0 {
                    status.as_u16()
                } else {
                    envelope.error.code
                },
                status: envelope.error.status,
                message: envelope.error.message,
            }
        }
        Err(_) => {
            error!("Request failed with status {}: {}", status, body);
            AppError::Unexpected(status)
        }
    }
}
