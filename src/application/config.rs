/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/
use crate::constants::{
    CLIENT_SECRETS_FILE, CONFIG_SUBDIR, CONTENT_SCOPE, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_TOKEN_URI, MERCHANT_INFO_FILE, SERVICE_ACCOUNT_FILE, TOKEN_FILE,
};
use crate::error::AppError;
use crate::presentation::serialization::string_or_number;
use crate::utils::config::{get_env_or_default, get_env_or_none, get_env_path, home_dir};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Locations of the local configuration files
pub struct ConfigPaths {
    /// Directory holding every file below
    pub config_dir: PathBuf,
    /// Service account key
    pub service_account_file: PathBuf,
    /// Stored refresh token
    pub token_file: PathBuf,
    /// OAuth client secrets
    pub client_secrets_file: PathBuf,
    /// Merchant information (`merchantId`)
    pub merchant_info_file: PathBuf,
}

impl ConfigPaths {
    /// Derives every file location from the configuration directory
    pub fn in_dir(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        Self {
            service_account_file: config_dir.join(SERVICE_ACCOUNT_FILE),
            token_file: config_dir.join(TOKEN_FILE),
            client_secrets_file: config_dir.join(CLIENT_SECRETS_FILE),
            merchant_info_file: config_dir.join(MERCHANT_INFO_FILE),
            config_dir,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the Merchant API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for credential discovery and token exchange
pub struct AuthConfig {
    /// OAuth token endpoint
    pub token_uri: String,
    /// Scopes requested for service account tokens
    pub scopes: Vec<String>,
    /// Raw bearer token that bypasses credential discovery
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    /// Credential file in Application Default Credentials format
    pub application_credentials: Option<PathBuf>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Merchant API samples
pub struct Config {
    /// Local configuration files
    pub paths: ConfigPaths,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment and an optional `.env` file
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let config_dir = get_env_path("MERCHANT_CONFIG_DIR").unwrap_or_else(default_config_dir);

        Config {
            paths: ConfigPaths::in_dir(config_dir),
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "MERCHANT_API_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("MERCHANT_API_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig {
                token_uri: get_env_or_default(
                    "GOOGLE_OAUTH_TOKEN_URI",
                    String::from(DEFAULT_TOKEN_URI),
                ),
                scopes: vec![CONTENT_SCOPE.to_string()],
                access_token: get_env_or_none("MERCHANT_API_ACCESS_TOKEN"),
                application_credentials: get_env_path("GOOGLE_APPLICATION_CREDENTIALS"),
            },
        }
    }

    /// Creates a configuration reading its files from `config_dir` and calling `base_url`
    ///
    /// Nothing is read from the environment.
    pub fn for_dir(config_dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Config {
            paths: ConfigPaths::in_dir(config_dir),
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            auth: AuthConfig {
                token_uri: DEFAULT_TOKEN_URI.to_string(),
                scopes: vec![CONTENT_SCOPE.to_string()],
                access_token: None,
                application_credentials: None,
            },
        }
    }

    /// Reads `merchant-info.json` from the configuration directory
    pub fn merchant_info(&self) -> Result<MerchantInfo, AppError> {
        MerchantInfo::load(&self.paths.merchant_info_file)
    }
}

fn default_config_dir() -> PathBuf {
    let base = home_dir().unwrap_or_else(|| PathBuf::from("."));
    CONFIG_SUBDIR.iter().fold(base, |path, part| path.join(part))
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Contents of `merchant-info.json`
pub struct MerchantInfo {
    /// Merchant Center account id; `accountId` is accepted as an alias
    #[serde(alias = "accountId", deserialize_with = "string_or_number")]
    pub merchant_id: String,
}

impl MerchantInfo {
    /// Loads the merchant information from `path`
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.is_file() {
            return Err(AppError::Config(format!(
                "merchant info file not found at {}; add a merchant-info.json containing merchantId",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        let info: MerchantInfo = serde_json::from_str(&content)?;
        info!("Using Merchant with ID: {}", info.merchant_id);
        Ok(info)
    }
}
