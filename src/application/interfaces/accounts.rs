use crate::error::AppError;
use crate::model::pagination::paginate;
use crate::model::requests::{GetAccountRequest, ListAccountsRequest, ListSubAccountsRequest};
use crate::model::responses::ListAccountsResponse;
use crate::presentation::account::Account;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Interface for the accounts service
#[async_trait]
pub trait AccountsService: Send + Sync {
    /// Gets a single account by resource name, `accounts/{account}`
    async fn get_account(&self, request: GetAccountRequest) -> Result<Account, AppError>;

    /// Fetches one page of accessible accounts
    ///
    /// # Arguments
    /// * `request` - Filter, page size and the token of the page to fetch
    ///
    /// # Returns
    /// * The accounts of the page and the token of the next one
    async fn list_accounts_page(
        &self,
        request: ListAccountsRequest,
    ) -> Result<ListAccountsResponse, AppError>;

    /// Fetches one page of the sub-accounts of an advanced account
    async fn list_sub_accounts_page(
        &self,
        request: ListSubAccountsRequest,
    ) -> Result<ListAccountsResponse, AppError>;

    /// Lists every accessible account, fetching pages as the stream is polled
    ///
    /// The page token of `request` is ignored; the stream always starts from
    /// the first page.
    fn list_accounts(
        &self,
        request: ListAccountsRequest,
    ) -> BoxStream<'_, Result<Account, AppError>> {
        paginate(move |page_token| {
            self.list_accounts_page(request.clone().with_page_token(page_token))
        })
    }

    /// Lists every sub-account of `request.provider`, fetching pages as the stream is polled
    fn list_sub_accounts(
        &self,
        request: ListSubAccountsRequest,
    ) -> BoxStream<'_, Result<Account, AppError>> {
        paginate(move |page_token| {
            self.list_sub_accounts_page(request.clone().with_page_token(page_token))
        })
    }
}
