use merchant_api_samples::prelude::*;
use merchant_api_samples::samples::accounts::list_sub_accounts;
use std::io::{self, Write};

async fn run(out: &mut impl Write) -> Result<usize, AppError> {
    let config = Config::new();
    let merchant = config.merchant_info()?;
    let client = Client::new(config)?;
    list_sub_accounts(&client, &merchant.merchant_id, out).await
}

#[tokio::main]
async fn main() {
    setup_logger();
    let mut out = io::stdout();
    let result = run(&mut out).await;
    report_outcome(&mut out, "list sub-accounts", result);
}
