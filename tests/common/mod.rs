// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use studyhelper::{
    config::{AiConfig, Config, parse_base_url},
    generation::{CompletionRequest, GenerationError, TextGenerator},
    routes,
    state::AppState,
    store::MemoryStore,
};

pub const JWT_SECRET: &str = "test_secret_for_integration_tests";

/// Text generator with a fixed reply that counts how often it was called.
pub struct StubGenerator {
    reply: Result<String, GenerationError>,
    calls: AtomicUsize,
}

impl StubGenerator {
    /// Always fails like an unreachable or over-quota API.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: Err(GenerationError::Upstream("429 quota exceeded".to_string())),
            calls: AtomicUsize::new(0),
        })
    }

    /// Always answers with `text`.
    pub fn scripted(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

fn test_config() -> Config {
    Config {
        database_url: None,
        jwt_secret: JWT_SECRET.to_string(),
        jwt_expiration: 600, // 10 minutes for tests
        rust_log: "error".to_string(),
        bind_addr: ([127, 0, 0, 1], 0).into(),
        static_dir: "tests/no-such-static-dir".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        ai: AiConfig {
            api_key: None,
            base_url: parse_base_url("http://127.0.0.1:9/v1").expect("valid test url"),
            model: "test-model".to_string(),
            timeout_secs: 1,
        },
    }
}

/// Spawns the app on a random port backed by an in-memory store.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
pub async fn spawn_app(generator: Arc<StubGenerator>) -> String {
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        generator,
        config: test_config(),
    };

    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// Client that neither follows redirects nor keeps cookies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

pub fn unique_email() -> String {
    format!("u_{}@example.com", &uuid::Uuid::new_v4().to_string()[..8])
}

/// Registers and logs in a fresh user, returning its bearer token.
pub async fn signed_in_user(client: &reqwest::Client, address: &str) -> String {
    let email = unique_email();
    let credentials = serde_json::json!({ "email": email, "password": "password123" });

    let response = client
        .post(format!("{}/api/auth/register", address))
        .json(&credentials)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 201);

    let response = client
        .post(format!("{}/api/auth/login", address))
        .json(&credentials)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    body["token"].as_str().unwrap().to_string()
}
