//! Shared testing harness for `rocketcart` integration tests.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated environment: a mock shop API plus a throwaway storage directory.
pub struct TestContext {
    root: TempDir,
    server: mockito::ServerGuard,
    // Keeps registered mocks alive for the lifetime of the context.
    mocks: Vec<mockito::Mock>,
}

impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("failed to create temp directory for tests");
        let server = mockito::Server::new();
        Self { root, server, mocks: Vec::new() }
    }

    /// Command for the rocketcart binary, pointed at this context's API and
    /// storage.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("rocketcart").expect("binary should build");
        cmd.env("ROCKETCART_API_URL", self.server.url());
        cmd.env("ROCKETCART_STORAGE_PATH", self.storage_dir());
        cmd.env("HOME", self.root.path());
        cmd
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.root.path().join("storage")
    }

    fn storage_file(&self) -> PathBuf {
        self.storage_dir().join("storage.json")
    }

    /// Stub `GET /stock/{id}`.
    pub fn mock_stock(&mut self, id: u64, amount: u32) {
        let mock = self
            .server
            .mock("GET", format!("/stock/{id}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"id": {id}, "amount": {amount}}}"#))
            .create();
        self.mocks.push(mock);
    }

    /// Stub `GET /products/{id}`.
    pub fn mock_product(&mut self, id: u64, name: &str, price: f64) {
        let mock = self
            .server
            .mock("GET", format!("/products/{id}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(
                r#"{{"id": {id}, "name": "{name}", "price": {price}, "imageUrl": "https://cdn/{id}.jpg"}}"#
            ))
            .create();
        self.mocks.push(mock);
    }

    /// Write a cart value directly into storage, as a previous session
    /// would have left it.
    pub fn seed_cart(&self, cart_json: &str) {
        fs::create_dir_all(self.storage_dir()).expect("failed to create storage dir");
        let document =
            serde_json::json!({ "@RocketShoes:cart": cart_json });
        fs::write(self.storage_file(), document.to_string())
            .expect("failed to seed storage file");
    }

    /// The persisted cart value, parsed back out of the storage file.
    pub fn persisted_cart(&self) -> serde_json::Value {
        let raw = fs::read_to_string(self.storage_file()).expect("storage file missing");
        let document: serde_json::Value =
            serde_json::from_str(&raw).expect("storage file is not JSON");
        let cart_raw = document["@RocketShoes:cart"]
            .as_str()
            .expect("cart key missing from storage");
        serde_json::from_str(cart_raw).expect("persisted cart is not JSON")
    }

    pub fn storage_file_exists(&self) -> bool {
        self.storage_file().exists()
    }
}
