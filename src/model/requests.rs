/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::presentation::user::User;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Query parameters attached to a request, in the order they are sent
pub type QueryParams = Vec<(&'static str, String)>;

fn paging_query(page_size: Option<i32>, page_token: Option<&str>) -> QueryParams {
    let mut query = Vec::new();
    if let Some(size) = page_size {
        query.push(("pageSize", size.to_string()));
    }
    if let Some(token) = page_token.filter(|t| !t.is_empty()) {
        query.push(("pageToken", token.to_string()));
    }
    query
}

/// Lists every account the caller has access to
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize)]
pub struct ListAccountsRequest {
    /// Optional maximum number of accounts per page
    pub page_size: Option<i32>,
    /// Token of the page to fetch; `None` fetches the first page
    pub page_token: Option<String>,
    /// Optional filter expression, e.g. `accountName = "*store*"`
    pub filter: Option<String>,
}

impl ListAccountsRequest {
    /// Create a request listing all accessible accounts
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the page token
    pub fn with_page_token(mut self, page_token: Option<String>) -> Self {
        self.page_token = page_token;
        self
    }

    /// Set the filter expression
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Query parameters for the request
    pub fn query(&self) -> QueryParams {
        let mut query = paging_query(self.page_size, self.page_token.as_deref());
        if let Some(filter) = &self.filter {
            query.push(("filter", filter.clone()));
        }
        query
    }
}

/// Lists the sub-accounts of an advanced account
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize)]
pub struct ListSubAccountsRequest {
    /// Parent advanced account, `accounts/{account}`
    pub provider: String,
    /// Optional maximum number of accounts per page
    pub page_size: Option<i32>,
    /// Token of the page to fetch
    pub page_token: Option<String>,
}

impl ListSubAccountsRequest {
    /// Create a request for the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the page token
    pub fn with_page_token(mut self, page_token: Option<String>) -> Self {
        self.page_token = page_token;
        self
    }

    /// Query parameters for the request
    pub fn query(&self) -> QueryParams {
        paging_query(self.page_size, self.page_token.as_deref())
    }
}

/// Retrieves a single account
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize)]
pub struct GetAccountRequest {
    /// Account name, `accounts/{account}`
    pub name: String,
}

impl GetAccountRequest {
    /// Create a request for the given account name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Lists the users of an account
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize)]
pub struct ListUsersRequest {
    /// Parent account, `accounts/{account}`
    pub parent: String,
    /// Optional maximum number of users per page
    pub page_size: Option<i32>,
    /// Token of the page to fetch
    pub page_token: Option<String>,
}

impl ListUsersRequest {
    /// Create a request for the given parent account
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Default::default()
        }
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the page token
    pub fn with_page_token(mut self, page_token: Option<String>) -> Self {
        self.page_token = page_token;
        self
    }

    /// Query parameters for the request
    pub fn query(&self) -> QueryParams {
        paging_query(self.page_size, self.page_token.as_deref())
    }
}

/// Retrieves a single user
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize)]
pub struct GetUserRequest {
    /// User name, `accounts/{account}/users/{email}`
    pub name: String,
}

impl GetUserRequest {
    /// Create a request for the given user name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Invites a user to an account
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Parent account, `accounts/{account}`
    pub parent: String,
    /// Email address of the user to create
    pub user_id: String,
    /// Access rights to grant
    pub user: User,
}

impl CreateUserRequest {
    /// Create a request inviting `user_id` under `parent`
    pub fn new(parent: impl Into<String>, user_id: impl Into<String>, user: User) -> Self {
        Self {
            parent: parent.into(),
            user_id: user_id.into(),
            user,
        }
    }

    /// Query parameters for the request
    pub fn query(&self) -> QueryParams {
        vec![("userId", self.user_id.clone())]
    }
}

/// Updates the fields of a user named by `user.name`
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// User carrying the name and the new values
    pub user: User,
    /// Fields to update, in snake case, e.g. `access_rights`
    pub update_mask: Vec<String>,
}

impl UpdateUserRequest {
    /// Create a request updating `user` restricted to `update_mask`
    pub fn new(user: User, update_mask: Vec<String>) -> Self {
        Self { user, update_mask }
    }

    /// Query parameters for the request
    pub fn query(&self) -> QueryParams {
        if self.update_mask.is_empty() {
            Vec::new()
        } else {
            vec![("updateMask", self.update_mask.join(","))]
        }
    }
}

/// Deletes a user
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    /// User name, `accounts/{account}/users/{email}`
    pub name: String,
}

impl DeleteUserRequest {
    /// Create a request for the given user name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Registers the calling GCP project with a developer email
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize)]
pub struct RegisterGcpRequest {
    /// Registration name, `accounts/{account}/developerRegistration`
    pub name: String,
    /// Email of the developer to register
    pub developer_email: String,
}

impl RegisterGcpRequest {
    /// Create a request for the given registration name and email
    pub fn new(name: impl Into<String>, developer_email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            developer_email: developer_email.into(),
        }
    }

    /// JSON body sent to `:registerGcp`
    pub fn body(&self) -> RegisterGcpBody<'_> {
        RegisterGcpBody {
            developer_email: &self.developer_email,
        }
    }
}

/// Wire body of a register call
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterGcpBody<'a> {
    /// Email of the developer to register
    pub developer_email: &'a str,
}
