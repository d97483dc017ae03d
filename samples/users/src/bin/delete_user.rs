use merchant_api_samples::prelude::*;
use merchant_api_samples::samples::users::delete_user;
use std::io::{self, Write};

// Replace with the email of the user to remove.
const EMAIL: &str = "testUser@gmail.com";

async fn run(out: &mut impl Write) -> Result<(), AppError> {
    let config = Config::new();
    let merchant = config.merchant_info()?;
    let client = Client::new(config)?;
    delete_user(&client, &merchant.merchant_id, EMAIL, out).await
}

#[tokio::main]
async fn main() {
    setup_logger();
    let mut out = io::stdout();
    let result = run(&mut out).await;
    report_outcome(&mut out, "delete user", result);
}
