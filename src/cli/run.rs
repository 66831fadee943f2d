use crate::{
    prelude::{AppError, ContactBook, command::Cli, serve},
    store::{StorageMediums, parse_storage_type},
};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;

pub async fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let medium = StorageMediums::from(&cli.storage_choice)?;
    let storage = parse_storage_type(&medium, &cli.storage_path)?;

    if medium.is_json() {
        tracing::info!(path = %cli.storage_path, "using json storage");
    } else {
        tracing::warn!("using in-memory storage, contacts are lost on exit");
    }

    let book = Arc::new(ContactBook::new(storage));

    let listener = TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    serve(listener, book).await
}
