/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Authentication module for the Merchant API
//!
//! This module turns local credential files into bearer tokens:
//! - Raw access token from the environment
//! - Application Default Credentials file (`GOOGLE_APPLICATION_CREDENTIALS`)
//! - Service account key (signed JWT assertion)
//! - Stored refresh token (`token.json`)
//!
//! Tokens are cached and reacquired shortly before they expire.

use crate::application::config::Config;
use crate::constants::{JWT_BEARER_GRANT_TYPE, JWT_LIFETIME_SECS, TOKEN_REFRESH_MARGIN_SECS};
use crate::error::AppError;
use crate::model::auth::{
    AccessToken, AuthorizedUser, ClientSecrets, Credentials, CredentialsFile, JwtClaims,
    ServiceAccountKey, TokenErrorResponse, TokenFile, TokenResponse,
};
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Looks for credentials in the documented order
///
/// 1. `auth.access_token` (from `MERCHANT_API_ACCESS_TOKEN`)
/// 2. `auth.application_credentials` (from `GOOGLE_APPLICATION_CREDENTIALS`)
/// 3. `service-account.json` in the configuration directory
/// 4. `token.json` in the configuration directory
///
/// # Returns
/// * `Ok(Credentials)` - The first credentials found
/// * `Err(AppError::Credentials)` - If none were found or a file was malformed
pub fn discover_credentials(config: &Config) -> Result<Credentials, AppError> {
    if let Some(token) = &config.auth.access_token {
        info!("Using access token from the environment.");
        return Ok(Credentials::AccessToken(token.clone()));
    }

    if let Some(path) = &config.auth.application_credentials {
        info!("Loading application default credentials from {}.", path.display());
        let file: CredentialsFile = read_json(path)?;
        return Ok(file.into());
    }

    let paths = &config.paths;
    info!("Attempting to load service account information...");
    if paths.service_account_file.is_file() {
        info!("Service account file exists, using service account.");
        let key: ServiceAccountKey = read_json(&paths.service_account_file)?;
        info!("Service account credentials for user {} found.", key.client_email);
        return Ok(Credentials::ServiceAccount(key));
    }

    info!("Service account file does not exist, attempting to load token file...");
    if paths.token_file.is_file() {
        info!("Token file exists, using token file.");
        let token: TokenFile = read_json(&paths.token_file)?;
        return authorized_user(token, &paths.client_secrets_file).map(Credentials::AuthorizedUser);
    }

    info!("Token file does not exist.");
    if paths.client_secrets_file.is_file() {
        return Err(AppError::Credentials(format!(
            "client secrets file ({}) exists, but token file ({}) does not; generate the token file using your client secrets",
            paths.client_secrets_file.display(),
            paths.token_file.display()
        )));
    }

    Err(AppError::Credentials(format!(
        "no credentials found. Checked:\n- {}\n- {}\n- {}",
        paths.service_account_file.display(),
        paths.token_file.display(),
        paths.client_secrets_file.display()
    )))
}

fn authorized_user(
    token: TokenFile,
    client_secrets_file: &Path,
) -> Result<AuthorizedUser, AppError> {
    if let (Some(client_id), Some(client_secret)) = (&token.client_id, &token.client_secret) {
        return Ok(AuthorizedUser {
            client_id: client_id.clone(),
            client_secret: client_secret.clone(),
            refresh_token: token.refresh_token,
        });
    }

    debug!("Token file has no client fields, completing them from client secrets");
    if !client_secrets_file.is_file() {
        return Err(AppError::Credentials(
            "token file is missing required fields (client_id, client_secret, refresh_token)"
                .to_string(),
        ));
    }
    let secrets: ClientSecrets = read_json(client_secrets_file)?;
    let keys = secrets.keys().ok_or_else(|| {
        AppError::Credentials(
            "invalid client secrets file format: missing \"installed\" or \"web\" key".to_string(),
        )
    })?;
    Ok(AuthorizedUser {
        client_id: token.client_id.unwrap_or_else(|| keys.client_id.clone()),
        client_secret: token.client_secret.unwrap_or_else(|| keys.client_secret.clone()),
        refresh_token: token.refresh_token,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        error!("Error reading or parsing {}: {}", path.display(), e);
        AppError::Credentials(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Signs a service account assertion for the given audience
pub fn sign_assertion(
    key: &ServiceAccountKey,
    scopes: &[String],
    audience: &str,
) -> Result<String, AppError> {
    let iat = Utc::now().timestamp();
    let claims = JwtClaims {
        iss: key.client_email.clone(),
        scope: scopes.join(" "),
        aud: audience.to_string(),
        iat,
        exp: iat + JWT_LIFETIME_SECS,
    };

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    Ok(encode(&header, &claims, &encoding_key)?)
}

/// Authentication manager for the Merchant API
///
/// Handles:
/// - Credential discovery
/// - Token exchange for service accounts and refresh tokens
/// - Token caching with refresh shortly before expiry
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    token: Arc<RwLock<Option<AccessToken>>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credential locations
    /// * `client` - HTTP client used for token exchanges
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets a valid access token, acquiring a new one when the cached one is stale
    ///
    /// # Returns
    /// * `Ok(AccessToken)` - Token valid for at least the refresh margin
    /// * `Err(AppError)` - If no credentials are found or the exchange fails
    pub async fn get_token(&self) -> Result<AccessToken, AppError> {
        {
            let cached = self.token.read().await;
            if let Some(token) = cached.as_ref() {
                if !token.is_expired(TOKEN_REFRESH_MARGIN_SECS) {
                    return Ok(token.clone());
                }
                debug!("Access token needs refresh");
            }
        }
        self.refresh_token().await
    }

    /// Acquires a fresh access token and caches it
    pub async fn refresh_token(&self) -> Result<AccessToken, AppError> {
        let mut cached = self.token.write().await;

        if let Some(token) = cached.as_ref() {
            if !token.is_expired(TOKEN_REFRESH_MARGIN_SECS) {
                return Ok(token.clone());
            }
        }

        let credentials = discover_credentials(&self.config)?;
        debug!("Acquiring access token with {} credentials", credentials.kind());

        let token = match credentials {
            Credentials::AccessToken(token) => AccessToken::static_token(token),
            Credentials::ServiceAccount(key) => self.exchange_assertion(&key).await?,
            Credentials::AuthorizedUser(user) => self.exchange_refresh_token(&user).await?,
        };

        *cached = Some(token.clone());
        info!("✓ Access token acquired");
        Ok(token)
    }

    /// Drops the cached token
    pub async fn clear(&self) {
        let mut cached = self.token.write().await;
        *cached = None;
    }

    async fn exchange_assertion(&self, key: &ServiceAccountKey) -> Result<AccessToken, AppError> {
        let token_uri = key
            .token_uri
            .as_deref()
            .unwrap_or(&self.config.auth.token_uri);
        let assertion = sign_assertion(key, &self.config.auth.scopes, token_uri)?;

        debug!("Exchanging service account assertion at {}", token_uri);
        self.request_token(
            token_uri,
            &[
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ],
        )
        .await
    }

    async fn exchange_refresh_token(&self, user: &AuthorizedUser) -> Result<AccessToken, AppError> {
        debug!("Exchanging refresh token at {}", self.config.auth.token_uri);
        self.request_token(
            &self.config.auth.token_uri,
            &[
                ("grant_type", "refresh_token"),
                ("client_id", user.client_id.as_str()),
                ("client_secret", user.client_secret.as_str()),
                ("refresh_token", user.refresh_token.as_str()),
            ],
        )
        .await
    }

    async fn request_token(
        &self,
        token_uri: &str,
        form: &[(&str, &str)],
    ) -> Result<AccessToken, AppError> {
        let response = self.client.post(token_uri).form(form).send().await?;
        let status = response.status();
        debug!("Token endpoint status: {}", status);

        if status.is_success() {
            let token: TokenResponse = response.json().await?;
            return Ok(token.into());
        }

        let body = response.text().await.unwrap_or_default();
        error!("Token exchange failed with status {}: {}", status, body);
        match serde_json::from_str::<TokenErrorResponse>(&body) {
            Ok(e) => Err(AppError::Credentials(format!("token exchange failed: {e}"))),
            Err(_) => Err(AppError::Unexpected(status)),
        }
    }
}
