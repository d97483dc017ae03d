use merchant_api_samples::prelude::*;
use merchant_api_samples::samples::accounts::filter_accounts;
use std::io::{self, Write};

// Accounts whose name contains "store" and that have a relationship with provider 123.
const FILTER: &str = r#"accountName = "*store*" AND relationship(providerId = 123)"#;

async fn run(out: &mut impl Write) -> Result<usize, AppError> {
    let client = Client::new(Config::new())?;
    filter_accounts(&client, FILTER, out).await
}

#[tokio::main]
async fn main() {
    setup_logger();
    let mut out = io::stdout();
    let result = run(&mut out).await;
    report_outcome(&mut out, "filter accounts", result);
}
