use crate::application::interfaces::accounts::AccountsService;
use crate::error::AppError;
use crate::model::requests::{GetAccountRequest, ListAccountsRequest, ListSubAccountsRequest};
use crate::presentation::account::Account;
use crate::samples::runner::print_all;
use crate::utils::resource::account_name;
use std::io::Write;
use tracing::info;

/// Lists every account the caller can access and writes the total
pub async fn list_accounts<S, W>(service: &S, out: &mut W) -> Result<usize, AppError>
where
    S: AccountsService + ?Sized,
    W: Write,
{
    info!("Sending list accounts request:");
    let count = print_all(service.list_accounts(ListAccountsRequest::new()), out).await?;
    writeln!(out, "Found {count} accounts.")?;
    Ok(count)
}

/// Lists the accounts matching `filter`, e.g. `accountName = "*store*"`
pub async fn filter_accounts<S, W>(
    service: &S,
    filter: &str,
    out: &mut W,
) -> Result<usize, AppError>
where
    S: AccountsService + ?Sized,
    W: Write,
{
    info!("Sending list accounts request with filter: {}", filter);
    let request = ListAccountsRequest::new().with_filter(filter);
    let count = print_all(service.list_accounts(request), out).await?;
    writeln!(out, "Found {count} accounts.")?;
    Ok(count)
}

/// Lists the sub-accounts of the advanced account `account_id`
pub async fn list_sub_accounts<S, W>(
    service: &S,
    account_id: &str,
    out: &mut W,
) -> Result<usize, AppError>
where
    S: AccountsService + ?Sized,
    W: Write,
{
    let request = ListSubAccountsRequest::new(account_name(account_id));
    info!("Sending list sub-accounts request for {}:", request.provider);
    let count = print_all(service.list_sub_accounts(request), out).await?;
    writeln!(out, "Found {count} sub-accounts.")?;
    Ok(count)
}

/// Gets the account `account_id` and writes it
pub async fn get_account<S, W>(
    service: &S,
    account_id: &str,
    out: &mut W,
) -> Result<Account, AppError>
where
    S: AccountsService + ?Sized,
    W: Write,
{
    let request = GetAccountRequest::new(account_name(account_id));
    info!("Sending get account request:");
    let account = service.get_account(request).await?;
    info!("Retrieved account below");
    writeln!(out, "{account:?}")?;
    Ok(account)
}
