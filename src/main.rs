use std::process::exit;

use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use contact_card::prelude::run_app;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run_app().await {
        eprintln!("{}", err);
        exit(1);
    }
}
