//! Common test utilities and helpers
//!
//! Every integration test runs against the full router backed by the
//! in-memory store, with images written to a temporary directory.

#![allow(dead_code)]


pub use auth_helpers::*;

use axum::http::header::AUTHORIZATION;
use axum_test::{TestResponse, TestServer};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;

use inkwell::backend::auth::{PasswordHasher, TokenService};
use inkwell::backend::routes::create_router;
use inkwell::backend::server::AppState;
use inkwell::backend::store::MemoryStore;
use inkwell::backend::uploads::ImageStore;

pub const TEST_SECRET: &str = "integration-secret";

/// A running application plus handles the tests need to reach around it
pub struct TestApp {
    pub server: TestServer,
    pub tokens: TokenService,
    pub images: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let images = tempfile::tempdir().expect("Failed to create image directory");
        let tokens = TokenService::new(TEST_SECRET);

        let state = AppState::new(
            Arc::new(MemoryStore::new()),
            tokens.clone(),
            PasswordHasher::new(4),
            ImageStore::new(images.path()),
        );
        let server = TestServer::new(create_router(state)).expect("Failed to start test server");

        Self {
            server,
            tokens,
            images,
        }
    }

    /// Send one operation, optionally as an authenticated caller
    pub async fn operation(&self, body: Value, token: Option<&str>) -> TestResponse {
        let mut request = self.server.post("/graphql").json(&body);
        if let Some(token) = token {
            request = request.add_header(AUTHORIZATION, bearer(token));
        }
        request.await
    }

    /// Register a user and return the new user's id
    pub async fn signup(&self, email: &str, name: &str, password: &str) -> String {
        let response = self
            .operation(
                json!({
                    "operation": "createUser",
                    "variables": {
                        "userInput": { "email": email, "name": name, "password": password }
                    }
                }),
                None,
            )
            .await;
        let body: Value = response.json();
        body["data"]["createUser"]["_id"]
            .as_str()
            .unwrap_or_else(|| panic!("Signup failed: {body}"))
            .to_string()
    }

    /// Log in and return the bearer token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .operation(
                json!({
                    "operation": "login",
                    "variables": { "email": email, "password": password }
                }),
                None,
            )
            .await;
        let body: Value = response.json();
        body["data"]["login"]["token"]
            .as_str()
            .unwrap_or_else(|| panic!("Login failed: {body}"))
            .to_string()
    }

    /// Register and log in a fresh user
    pub async fn user(&self, email: &str, name: &str) -> TestUser {
        let id = self.signup(email, name, TEST_PASSWORD).await;
        let token = self.login(email, TEST_PASSWORD).await;
        TestUser {
            id,
            email: email.to_string(),
            token,
        }
    }

    /// Create a post and return its client view
    pub async fn create_post(&self, token: &str, title: &str, content: &str) -> Value {
        let response = self
            .operation(
                json!({
                    "operation": "createPost",
                    "variables": {
                        "postInput": { "title": title, "content": content, "imageUrl": "images/cover.png" }
                    }
                }),
                Some(token),
            )
            .await;
        let body: Value = response.json();
        body["data"]["createPost"].clone()
    }
}

/// First error of an error envelope
pub fn first_error(body: &Value) -> &Value {
    &body["errors"][0]
}
