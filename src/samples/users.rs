use crate::application::interfaces::users::UserService;
use crate::error::AppError;
use crate::model::requests::{
    CreateUserRequest, DeleteUserRequest, GetUserRequest, ListUsersRequest, UpdateUserRequest,
};
use crate::presentation::user::{AccessRight, User};
use crate::samples::runner::print_all;
use crate::utils::resource::{account_name, user_name};
use std::io::Write;
use tracing::info;

/// Field mask used when updating access rights
pub const ACCESS_RIGHTS_MASK: &str = "access_rights";

/// Gets the user `email` of `account_id` and writes it
///
/// `email` may be `me` to fetch the caller.
pub async fn get_user<S, W>(
    service: &S,
    account_id: &str,
    email: &str,
    out: &mut W,
) -> Result<User, AppError>
where
    S: UserService + ?Sized,
    W: Write,
{
    let request = GetUserRequest::new(user_name(account_id, email));
    info!("Sending get user request:");
    let user = service.get_user(request).await?;
    info!("Retrieved user below");
    writeln!(out, "{user:?}")?;
    Ok(user)
}

/// Lists every user of `account_id` and writes the total
pub async fn list_users<S, W>(service: &S, account_id: &str, out: &mut W) -> Result<usize, AppError>
where
    S: UserService + ?Sized,
    W: Write,
{
    let request = ListUsersRequest::new(account_name(account_id));
    info!("Sending list users request for {}:", request.parent);
    let count = print_all(service.list_users(request), out).await?;
    writeln!(out, "Found {count} users.")?;
    Ok(count)
}

/// Invites `email` to `account_id` as an admin with performance reporting access
pub async fn create_user<S, W>(
    service: &S,
    account_id: &str,
    email: &str,
    out: &mut W,
) -> Result<User, AppError>
where
    S: UserService + ?Sized,
    W: Write,
{
    let user = User::with_access_rights(vec![
        AccessRight::Admin,
        AccessRight::PerformanceReporting,
    ]);
    let request = CreateUserRequest::new(account_name(account_id), email, user);
    info!("Sending create user request:");
    let created = service.create_user(request).await?;
    info!("Inserted user below");
    writeln!(out, "{}", created.name)?;
    Ok(created)
}

/// Replaces the access rights of `email` in `account_id` with `access_rights`
pub async fn update_user<S, W>(
    service: &S,
    account_id: &str,
    email: &str,
    access_rights: Vec<AccessRight>,
    out: &mut W,
) -> Result<User, AppError>
where
    S: UserService + ?Sized,
    W: Write,
{
    let user = User {
        name: user_name(account_id, email),
        ..User::with_access_rights(access_rights)
    };
    let request = UpdateUserRequest::new(user, vec![ACCESS_RIGHTS_MASK.to_string()]);
    info!("Sending update user request:");
    let updated = service.update_user(request).await?;
    info!("Updated user below");
    writeln!(out, "{}", updated.name)?;
    Ok(updated)
}

/// Removes `email` from `account_id`
pub async fn delete_user<S, W>(
    service: &S,
    account_id: &str,
    email: &str,
    out: &mut W,
) -> Result<(), AppError>
where
    S: UserService + ?Sized,
    W: Write,
{
    let request = DeleteUserRequest::new(user_name(account_id, email));
    info!("Sending delete user request for {}:", request.name);
    service.delete_user(request).await?;
    writeln!(out, "Delete successful.")?;
    Ok(())
}
