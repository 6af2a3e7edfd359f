#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::Router;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use swagstore::config::{ChatConfig, Config, EmailConfig, SheetsConfig, SheetsFormat};

/// A running service instance bound to an ephemeral port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit an order as JSON, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/v1/orders"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit an order as form-urlencoded data, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/v1/orders"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Spawn the app with the given config on a random port.
pub async fn spawn_app(config: Config) -> TestApp {
    let app = swagstore::build_app(config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}

/// Base config with every sink disabled.
pub fn base_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        log_level: "warn".to_string(),
        max_body_size: 65_536,
        sink_timeout_secs: 5,
        sheets: None,
        email: None,
        chat: None,
    }
}

pub fn sheets_json(url: &str) -> SheetsConfig {
    SheetsConfig {
        url: url.to_string(),
        format: SheetsFormat::Json,
    }
}

pub fn sheets_form(url: &str) -> SheetsConfig {
    SheetsConfig {
        url: url.to_string(),
        format: SheetsFormat::Form,
    }
}

pub fn email_config(url: &str) -> EmailConfig {
    EmailConfig {
        api_url: url.to_string(),
        api_key: "test-key".to_string(),
        from: "Swag Store <noreply@test.dev>".to_string(),
        recipients: vec!["orders@test.com".to_string(), "ops@test.com".to_string()],
    }
}

pub fn chat_config(url: &str, template: Option<&str>) -> ChatConfig {
    ChatConfig {
        webhook_url: url.to_string(),
        message_template: template.map(|s| s.to_string()),
    }
}

/// The worked example from the order form.
pub fn sample_order() -> Value {
    json!({
        "name": "Ada",
        "email": "ada@x.com",
        "address": "1 Main",
        "city": "X",
        "stateProvince": "Y",
        "zipCode": "00000",
        "country": "United States",
        "tshirtSize": "M",
        "hoodieSize": "M",
        "isEmployee": false,
        "manager": "",
        "firstChoice": "T-Shirt",
        "secondChoice": "Hoodie"
    })
}

#[derive(Clone)]
pub struct RecordedRequest {
    pub headers: HeaderMap,
    pub body: Value,
    pub raw: String,
}

#[derive(Clone)]
struct MockState {
    hits: Arc<Mutex<Vec<RecordedRequest>>>,
    status: StatusCode,
    body: &'static str,
}

/// A scripted sink endpoint: records every POST it receives and answers with
/// a fixed status and body.
pub struct MockSink {
    pub addr: SocketAddr,
    hits: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockSink {
    pub async fn spawn(status: StatusCode, body: &'static str) -> Self {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            hits: hits.clone(),
            status,
            body,
        };

        let app = Router::new().route("/", post(record)).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock sink");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockSink { addr, hits }
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.lock().unwrap().len()
    }

    pub fn last(&self) -> RecordedRequest {
        self.hits
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no requests recorded")
    }
}

async fn record(
    State(state): State<MockState>,
    headers: HeaderMap,
    raw: String,
) -> (StatusCode, &'static str) {
    let body = serde_json::from_str(&raw).unwrap_or(Value::Null);
    state.hits.lock().unwrap().push(RecordedRequest {
        headers,
        body,
        raw,
    });
    (state.status, state.body)
}
