use merchant_api_samples::prelude::*;
use merchant_api_samples::samples::users::create_user;
use std::io::{self, Write};

// Replace with the email of the user to invite.
const EMAIL: &str = "testUser@gmail.com";

async fn run(out: &mut impl Write) -> Result<User, AppError> {
    let config = Config::new();
    let merchant = config.merchant_info()?;
    let client = Client::new(config)?;
    create_user(&client, &merchant.merchant_id, EMAIL, out).await
}

#[tokio::main]
async fn main() {
    setup_logger();
    let mut out = io::stdout();
    let result = run(&mut out).await;
    report_outcome(&mut out, "create user", result);
}
