use async_trait::async_trait;
use merchant_api_samples::application::interfaces::accounts::AccountsService;
use merchant_api_samples::application::interfaces::developer_registration::DeveloperRegistrationService;
use merchant_api_samples::application::interfaces::users::UserService;
use merchant_api_samples::error::AppError;
use merchant_api_samples::model::requests::{
    CreateUserRequest, DeleteUserRequest, GetAccountRequest, GetUserRequest, ListAccountsRequest,
    ListSubAccountsRequest, ListUsersRequest, RegisterGcpRequest, UpdateUserRequest,
};
use merchant_api_samples::model::responses::{ListAccountsResponse, ListUsersResponse};
use merchant_api_samples::presentation::account::Account;
use merchant_api_samples::presentation::developer_registration::DeveloperRegistration;
use merchant_api_samples::presentation::user::{User, UserState};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Shared log of service calls and console writes, in the order they happen
pub type Events = Arc<Mutex<Vec<String>>>;

/// Console stand-in that records every write in the event log
pub struct RecordingWriter {
    events: Events,
    pub buffer: Vec<u8>,
}

impl RecordingWriter {
    pub fn new(events: Events) -> Self {
        Self {
            events,
            buffer: Vec::new(),
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.buffer.clone()).unwrap()
    }
}

impl Write for RecordingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.events.lock().unwrap().push("write".to_string());
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// In-memory Merchant API
///
/// Pages are addressed by the tokens `p1`, `p2`, ...; the last page has no token.
/// When `fail_on_page` is set, fetching that page (0-based) fails.
#[derive(Default)]
pub struct FakeMerchant {
    pub account_pages: Vec<Vec<Account>>,
    pub user_pages: Vec<Vec<User>>,
    pub fail: bool,
    pub fail_on_page: Option<usize>,
    pub events: Events,
    pub requests: Mutex<Vec<String>>,
}

pub fn account(id: u32) -> Account {
    Account {
        name: format!("accounts/{id}"),
        account_id: Some(id.to_string()),
        account_name: format!("Store {id}"),
        ..Account::default()
    }
}

pub fn user(account_id: &str, email: &str) -> User {
    User {
        name: format!("accounts/{account_id}/users/{email}"),
        state: Some(UserState::Verified),
        ..User::default()
    }
}

pub fn not_found() -> AppError {
    AppError::Api {
        code: 404,
        status: "NOT_FOUND".to_string(),
        message: "Requested entity was not found.".to_string(),
    }
}

impl FakeMerchant {
    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }

    fn request(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }

    fn check(&self, call: &str) -> Result<(), AppError> {
        self.record(format!("resolved {call}"));
        if self.fail { Err(not_found()) } else { Ok(()) }
    }

    fn page<T: Clone>(
        &self,
        pages: &[Vec<T>],
        token: Option<&str>,
    ) -> Result<(Vec<T>, Option<String>), AppError> {
        let index = match token {
            None => 0,
            Some(token) => token.trim_start_matches('p').parse::<usize>().unwrap(),
        };
        self.record(format!("page {index}"));
        if self.fail || self.fail_on_page == Some(index) {
            return Err(not_found());
        }
        let items = pages.get(index).cloned().unwrap_or_default();
        let next = (index + 1 < pages.len()).then(|| format!("p{}", index + 1));
        Ok((items, next))
    }
}

#[async_trait]
impl AccountsService for FakeMerchant {
    async fn get_account(&self, request: GetAccountRequest) -> Result<Account, AppError> {
        self.request(request.name.clone());
        self.check("get_account")?;
        Ok(Account {
            name: request.name,
            account_name: "Fake Store".to_string(),
            ..Account::default()
        })
    }

    async fn list_accounts_page(
        &self,
        request: ListAccountsRequest,
    ) -> Result<ListAccountsResponse, AppError> {
        self.request(request.filter.clone().unwrap_or_default());
        let (accounts, next_page_token) =
            self.page(&self.account_pages, request.page_token.as_deref())?;
        Ok(ListAccountsResponse {
            accounts,
            next_page_token,
        })
    }

    async fn list_sub_accounts_page(
        &self,
        request: ListSubAccountsRequest,
    ) -> Result<ListAccountsResponse, AppError> {
        self.request(request.provider.clone());
        let (accounts, next_page_token) =
            self.page(&self.account_pages, request.page_token.as_deref())?;
        Ok(ListAccountsResponse {
            accounts,
            next_page_token,
        })
    }
}

#[async_trait]
impl UserService for FakeMerchant {
    async fn get_user(&self, request: GetUserRequest) -> Result<User, AppError> {
        self.request(request.name.clone());
        self.check("get_user")?;
        Ok(User {
            name: request.name,
            state: Some(UserState::Verified),
            ..User::default()
        })
    }

    async fn list_users_page(
        &self,
        request: ListUsersRequest,
    ) -> Result<ListUsersResponse, AppError> {
        self.request(request.parent.clone());
        let (users, next_page_token) = self.page(&self.user_pages, request.page_token.as_deref())?;
        Ok(ListUsersResponse {
            users,
            next_page_token,
        })
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User, AppError> {
        self.request(format!("{} {} {}", request.parent, request.user_id, request.user));
        self.check("create_user")?;
        Ok(User {
            name: format!("{}/users/{}", request.parent, request.user_id),
            state: Some(UserState::Pending),
            access_rights: request.user.access_rights,
        })
    }

    async fn update_user(&self, request: UpdateUserRequest) -> Result<User, AppError> {
        self.request(format!("{} {}", request.update_mask.join(","), request.user));
        self.check("update_user")?;
        Ok(request.user)
    }

    async fn delete_user(&self, request: DeleteUserRequest) -> Result<(), AppError> {
        self.request(request.name.clone());
        self.check("delete_user")
    }
}

#[async_trait]
impl DeveloperRegistrationService for FakeMerchant {
    async fn register_gcp(
        &self,
        request: RegisterGcpRequest,
    ) -> Result<DeveloperRegistration, AppError> {
        self.request(format!("{} {}", request.name, request.developer_email));
        self.check("register_gcp")?;
        Ok(DeveloperRegistration {
            name: request.name,
            gcp_ids: vec!["123456789".to_string()],
        })
    }
}

/// Index of the first console write, if any
pub fn first_write(events: &Events) -> Option<usize> {
    events.lock().unwrap().iter().position(|e| e == "write")
}

/// Index of the first event starting with `prefix`
pub fn first_event(events: &Events, prefix: &str) -> Option<usize> {
    events
        .lock()
        .unwrap()
        .iter()
        .position(|e| e.starts_with(prefix))
}
