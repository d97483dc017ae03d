use merchant_api_samples::prelude::*;
use merchant_api_samples::samples::accounts::list_accounts;
use std::io::{self, Write};

async fn run(out: &mut impl Write) -> Result<usize, AppError> {
    let client = Client::new(Config::new())?;
    list_accounts(&client, out).await
}

#[tokio::main]
async fn main() {
    setup_logger();
    let mut out = io::stdout();
    let result = run(&mut out).await;
    report_outcome(&mut out, "list accounts", result);
}
