/// Default base URL of the Merchant API REST surface
pub const DEFAULT_BASE_URL: &str = "https://merchantapi.googleapis.com";
/// Path prefix of the Accounts sub-API, version 1
pub const ACCOUNTS_API_PATH: &str = "accounts/v1";
/// Default OAuth 2.0 token endpoint
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
/// OAuth scope required by the Merchant API
pub const CONTENT_SCOPE: &str = "https://www.googleapis.com/auth/content";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string sent with every request
pub const USER_AGENT: &str = "merchant-api-samples/0.1.0";
/// Seconds before expiry at which a cached access token is considered stale
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;
/// Lifetime requested for service account assertions (1 hour)
pub const JWT_LIFETIME_SECS: i64 = 3600;
/// Grant type used to exchange a signed service account assertion
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
/// Directory under the home directory holding the sample configuration
pub const CONFIG_SUBDIR: [&str; 2] = ["shopping-samples", "content"];
/// File name of the service account key
pub const SERVICE_ACCOUNT_FILE: &str = "service-account.json";
/// File name of the stored refresh token
pub const TOKEN_FILE: &str = "token.json";
/// File name of the OAuth client secrets
pub const CLIENT_SECRETS_FILE: &str = "client-secrets.json";
/// File name of the merchant information
pub const MERCHANT_INFO_FILE: &str = "merchant-info.json";
