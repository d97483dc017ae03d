use crate::error::AppError;
use crate::model::pagination::paginate;
use crate::model::requests::{
    CreateUserRequest, DeleteUserRequest, GetUserRequest, ListUsersRequest, UpdateUserRequest,
};
use crate::model::responses::ListUsersResponse;
use crate::presentation::user::User;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Interface for the users service
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets a user by resource name, `accounts/{account}/users/{email}`
    ///
    /// The email part may be `me` to address the caller.
    async fn get_user(&self, request: GetUserRequest) -> Result<User, AppError>;

    /// Fetches one page of the users of an account
    async fn list_users_page(&self, request: ListUsersRequest)
    -> Result<ListUsersResponse, AppError>;

    /// Creates a user, the account owner receives an invitation
    ///
    /// # Arguments
    /// * `request` - Parent account, the user's email as `user_id` and the access rights
    ///
    /// # Returns
    /// * The created user, normally in the `PENDING` state
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, AppError>;

    /// Updates the fields of `request.user` named by the update mask
    async fn update_user(&self, request: UpdateUserRequest) -> Result<User, AppError>;

    /// Deletes a user
    async fn delete_user(&self, request: DeleteUserRequest) -> Result<(), AppError>;

    /// Lists every user of `request.parent`, fetching pages as the stream is polled
    fn list_users(&self, request: ListUsersRequest) -> BoxStream<'_, Result<User, AppError>> {
        paginate(move |page_token| {
            self.list_users_page(request.clone().with_page_token(page_token))
        })
    }
}
