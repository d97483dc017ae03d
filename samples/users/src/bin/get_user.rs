use merchant_api_samples::prelude::*;
use merchant_api_samples::samples::users::get_user;
use std::io::{self, Write};

// "me" addresses the caller; any invited email works as well, e.g. "testUser@gmail.com".
const EMAIL: &str = "me";

async fn run(out: &mut impl Write) -> Result<User, AppError> {
    let config = Config::new();
    let merchant = config.merchant_info()?;
    let client = Client::new(config)?;
    get_user(&client, &merchant.merchant_id, EMAIL, out).await
}

#[tokio::main]
async fn main() {
    setup_logger();
    let mut out = io::stdout();
    let result = run(&mut out).await;
    report_outcome(&mut out, "get user", result);
}
