use merchant_api_samples::prelude::*;
use merchant_api_samples::samples::developer_registration::register_gcp;
use std::io::{self, Write};
use tracing::info;

// Replace with the email of the developer to register.
const DEVELOPER_EMAIL: &str = "YOUR_EMAIL_HERE";

async fn run(out: &mut impl Write) -> Result<DeveloperRegistration, AppError> {
    let config = Config::new();
    let merchant = config.merchant_info()?;
    let client = Client::new(config)?;
    let registration = register_gcp(&client, &merchant.merchant_id, DEVELOPER_EMAIL, out).await?;
    info!("Linked GCP projects: {:?}", registration.gcp_ids);
    Ok(registration)
}

#[tokio::main]
async fn main() {
    setup_logger();
    let mut out = io::stdout();
    let result = run(&mut out).await;
    report_outcome(&mut out, "register GCP project", result);
}
