use crate::error::AppError;
use crate::model::requests::RegisterGcpRequest;
use crate::presentation::developer_registration::DeveloperRegistration;
use async_trait::async_trait;

/// Interface for the developer registration service
#[async_trait]
pub trait DeveloperRegistrationService: Send + Sync {
    /// Registers the GCP project of the caller's credentials with the account
    ///
    /// # Arguments
    /// * `request` - Registration name, `accounts/{account}/developerRegistration`,
    ///   and the developer email to attach
    ///
    /// # Returns
    /// * The registration, listing the GCP project ids now linked
    async fn register_gcp(
        &self,
        request: RegisterGcpRequest,
    ) -> Result<DeveloperRegistration, AppError>;
}
