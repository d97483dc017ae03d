/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::constants::JWT_LIFETIME_SECS;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials discovered on the local machine
#[derive(Clone)]
pub enum Credentials {
    /// A ready-to-use bearer token, never refreshed
    AccessToken(String),
    /// A service account key
    ServiceAccount(ServiceAccountKey),
    /// An OAuth client plus a stored refresh token
    AuthorizedUser(AuthorizedUser),
}

impl Credentials {
    /// Short description used in logs, never exposes secrets
    pub fn kind(&self) -> &'static str {
        match self {
            Credentials::AccessToken(_) => "access token",
            Credentials::ServiceAccount(_) => "service account",
            Credentials::AuthorizedUser(_) => "authorized user",
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::AccessToken(_) => f.write_str("AccessToken(***)"),
            Credentials::ServiceAccount(key) => write!(f, "ServiceAccount({})", key.client_email),
            Credentials::AuthorizedUser(user) => write!(f, "AuthorizedUser({})", user.client_id),
        }
    }
}

/// Credential file in Application Default Credentials format
#[derive(Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialsFile {
    /// `"type": "service_account"`
    ServiceAccount(ServiceAccountKey),
    /// `"type": "authorized_user"`
    AuthorizedUser(AuthorizedUser),
}

impl From<CredentialsFile> for Credentials {
    fn from(file: CredentialsFile) -> Self {
        match file {
            CredentialsFile::ServiceAccount(key) => Credentials::ServiceAccount(key),
            CredentialsFile::AuthorizedUser(user) => Credentials::AuthorizedUser(user),
        }
    }
}

/// Service account key as downloaded from the Cloud console
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    /// Email of the service account
    pub client_email: String,
    /// PEM encoded RSA private key
    pub private_key: String,
    /// Id of the private key, sent as `kid`
    #[serde(default)]
    pub private_key_id: Option<String>,
    /// Token endpoint; falls back to the configured one
    #[serde(default)]
    pub token_uri: Option<String>,
    /// Owning GCP project
    #[serde(default)]
    pub project_id: Option<String>,
}

/// OAuth client plus refresh token
#[derive(Clone, Deserialize)]
pub struct AuthorizedUser {
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Long-lived refresh token
    pub refresh_token: String,
}

/// Contents of `token.json`
///
/// Older token files carry only the refresh token; the client fields are then
/// completed from `client-secrets.json`.
#[derive(Clone, Deserialize)]
pub struct TokenFile {
    /// OAuth client id
    #[serde(default)]
    pub client_id: Option<String>,
    /// OAuth client secret
    #[serde(default)]
    pub client_secret: Option<String>,
    /// Long-lived refresh token
    pub refresh_token: String,
}

/// Contents of `client-secrets.json`
#[derive(Clone, Deserialize)]
pub struct ClientSecrets {
    /// Desktop application client
    #[serde(default)]
    pub installed: Option<ClientSecretKeys>,
    /// Web application client
    #[serde(default)]
    pub web: Option<ClientSecretKeys>,
}

impl ClientSecrets {
    /// Returns whichever client block is present, preferring `installed`
    pub fn keys(&self) -> Option<&ClientSecretKeys> {
        self.installed.as_ref().or(self.web.as_ref())
    }
}

/// Client id and secret of an OAuth client
#[derive(Clone, Deserialize)]
pub struct ClientSecretKeys {
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
}

/// Successful answer of the token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer token
    pub access_token: String,
    /// Lifetime of the token in seconds
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,
    /// Token type, normally `Bearer`
    #[serde(default)]
    pub token_type: Option<String>,
}

fn default_expires_in() -> i64 {
    3600
}

/// Error answer of the token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenErrorResponse {
    /// OAuth error code, e.g. `invalid_grant`
    pub error: String,
    /// Optional human readable description
    #[serde(default)]
    pub error_description: Option<String>,
}

impl fmt::Display for TokenErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_description {
            Some(description) => write!(f, "{}: {}", self.error, description),
            None => f.write_str(&self.error),
        }
    }
}

/// Claims of a service account assertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Issuer, the service account email
    pub iss: String,
    /// Space separated scopes
    pub scope: String,
    /// Audience, the token endpoint
    pub aud: String,
    /// Issued at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

/// Bearer token cached by the credential provider
#[derive(Clone)]
pub struct AccessToken {
    /// Bearer token
    pub token: String,
    /// Expiry instant; `None` for tokens that never expire locally
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Creates a token that expires `expires_in` seconds from now
    ///
    /// Lifetimes that do not fit in a timestamp fall back to `JWT_LIFETIME_SECS`.
    #[must_use]
    pub fn expiring_in(token: String, expires_in: i64) -> Self {
        let now = Utc::now();
        let expires_at = Duration::try_seconds(expires_in)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .unwrap_or_else(|| now + Duration::seconds(JWT_LIFETIME_SECS));
        Self {
            token,
            expires_at: Some(expires_at),
        }
    }

    /// Creates a token that is never refreshed
    #[must_use]
    pub fn static_token(token: String) -> Self {
        Self {
            token,
            expires_at: None,
        }
    }

    /// Checks if the token is expired or will expire within `margin_seconds`
    #[must_use]
    pub fn is_expired(&self, margin_seconds: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => Duration::try_seconds(margin_seconds)
                .and_then(|margin| expires_at.checked_sub_signed(margin))
                .is_none_or(|refresh_at| refresh_at <= Utc::now()),
            None => false,
        }
    }
}

impl From<TokenResponse> for AccessToken {
    fn from(response: TokenResponse) -> Self {
        AccessToken::expiring_in(response.access_token, response.expires_in)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"***")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
