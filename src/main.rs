use contact_book::prelude::run_app;
use dotenv::dotenv;
use std::process::exit;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // .env values feed clap's env fallbacks
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_app().await {
        tracing::error!("{e}");
        exit(1);
    }
}
