use crate::application::interfaces::developer_registration::DeveloperRegistrationService;
use crate::error::AppError;
use crate::model::requests::RegisterGcpRequest;
use crate::presentation::developer_registration::DeveloperRegistration;
use crate::utils::resource::developer_registration_name;
use std::io::Write;
use tracing::info;

/// Registers the caller's GCP project with `account_id`, naming `developer_email`
/// as the developer contact, and writes the resulting registration
pub async fn register_gcp<S, W>(
    service: &S,
    account_id: &str,
    developer_email: &str,
    out: &mut W,
) -> Result<DeveloperRegistration, AppError>
where
    S: DeveloperRegistrationService + ?Sized,
    W: Write,
{
    let request = RegisterGcpRequest::new(developer_registration_name(account_id), developer_email);
    info!("Sending register GCP request for {}:", request.name);
    let registration = service.register_gcp(request).await?;
    info!(
        "Registered developer email {} for account {}",
        developer_email, account_id
    );
    writeln!(out, "{registration:?}")?;
    Ok(registration)
}
