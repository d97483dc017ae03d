use merchant_api_samples::prelude::*;
use merchant_api_samples::samples::accounts::get_account;
use std::io::{self, Write};

async fn run(out: &mut impl Write) -> Result<Account, AppError> {
    let config = Config::new();
    let merchant = config.merchant_info()?;
    let client = Client::new(config)?;
    get_account(&client, &merchant.merchant_id, out).await
}

#[tokio::main]
async fn main() {
    setup_logger();
    let mut out = io::stdout();
    let result = run(&mut out).await;
    report_outcome(&mut out, "get account", result);
}
