/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::accounts::AccountsService;
use crate::application::interfaces::developer_registration::DeveloperRegistrationService;
use crate::application::interfaces::users::UserService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{
    CreateUserRequest, DeleteUserRequest, GetAccountRequest, GetUserRequest, ListAccountsRequest,
    ListSubAccountsRequest, ListUsersRequest, RegisterGcpRequest, UpdateUserRequest,
};
use crate::model::responses::{Empty, ListAccountsResponse, ListUsersResponse};
use crate::presentation::account::Account;
use crate::presentation::developer_registration::DeveloperRegistration;
use crate::presentation::user::User;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Typed client for the Merchant Accounts API
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a new client; credentials are acquired on the first call
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Gets the underlying transport
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

#[async_trait]
impl AccountsService for Client {
    async fn get_account(&self, request: GetAccountRequest) -> Result<Account, AppError> {
        info!("Getting account: {}", request.name);
        let account: Account = self.http_client.get(&request.name, Vec::new()).await?;
        debug!("Account obtained: {}", account.name);
        Ok(account)
    }

    async fn list_accounts_page(
        &self,
        request: ListAccountsRequest,
    ) -> Result<ListAccountsResponse, AppError> {
        let page: ListAccountsResponse = self.http_client.get("accounts", request.query()).await?;
        debug!("{} accounts in page", page.accounts.len());
        Ok(page)
    }

    async fn list_sub_accounts_page(
        &self,
        request: ListSubAccountsRequest,
    ) -> Result<ListAccountsResponse, AppError> {
        let path = format!("{}:listSubaccounts", request.provider);
        let page: ListAccountsResponse = self.http_client.get(&path, request.query()).await?;
        debug!("{} sub-accounts in page", page.accounts.len());
        Ok(page)
    }
}

#[async_trait]
impl UserService for Client {
    async fn get_user(&self, request: GetUserRequest) -> Result<User, AppError> {
        info!("Getting user: {}", request.name);
        self.http_client.get(&request.name, Vec::new()).await
    }

    async fn list_users_page(
        &self,
        request: ListUsersRequest,
    ) -> Result<ListUsersResponse, AppError> {
        let path = format!("{}/users", request.parent);
        let page: ListUsersResponse = self.http_client.get(&path, request.query()).await?;
        debug!("{} users in page", page.users.len());
        Ok(page)
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User, AppError> {
        info!("Creating user {} in {}", request.user_id, request.parent);
        let path = format!("{}/users", request.parent);
        self.http_client
            .post(&path, request.query(), &request.user)
            .await
    }

    async fn update_user(&self, request: UpdateUserRequest) -> Result<User, AppError> {
        if request.user.name.is_empty() {
            return Err(AppError::InvalidInput(
                "user name is required for an update".to_string(),
            ));
        }
        info!("Updating user: {}", request.user.name);
        self.http_client
            .patch(&request.user.name, request.query(), &request.user)
            .await
    }

    async fn delete_user(&self, request: DeleteUserRequest) -> Result<(), AppError> {
        info!("Deleting user: {}", request.name);
        let _: Empty = self.http_client.delete(&request.name).await?;
        Ok(())
    }
}

#[async_trait]
impl DeveloperRegistrationService for Client {
    async fn register_gcp(
        &self,
        request: RegisterGcpRequest,
    ) -> Result<DeveloperRegistration, AppError> {
        info!("Registering GCP project for {}", request.name);
        let path = format!("{}:registerGcp", request.name);
        self.http_client
            .post(&path, Vec::new(), request.body())
            .await
    }
}
