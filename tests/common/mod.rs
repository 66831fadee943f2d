#![allow(dead_code)]

use contact_book::prelude::{ContactBook, JsonStore, serve};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;

pub struct TestServer {
    pub base_url: String,
    pub store_path: PathBuf,
    pub client: reqwest::Client,
    // Keeps the store directory alive for the length of the test
    _dir: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Starts a server on an ephemeral port backed by a JSON store in a fresh
/// temporary directory.
pub async fn spawn_server() -> TestServer {
    let dir = tempfile::tempdir().expect("temp dir");
    let store_path = dir.path().join("contacts.json");

    let store = JsonStore::new(&store_path.to_string_lossy());
    let book = Arc::new(ContactBook::new(Box::new(store)));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(serve(listener, book));

    TestServer {
        base_url: format!("http://{addr}/api"),
        store_path,
        client: reqwest::Client::new(),
        _dir: dir,
    }
}
