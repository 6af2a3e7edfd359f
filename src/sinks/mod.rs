pub mod chat;
pub mod email;
pub mod sheets;
pub mod template;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::OrderSubmission;

/// Every sink the service knows about, in delivery order. Unconfigured sinks
/// are reported as `false` in the response details.
pub const SINK_IDS: [&str; 3] = ["sheets", "email", "chat"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkResult {
    pub status: SinkStatus,
    pub response: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SinkStatus {
    Success,
    Failed,
}

#[derive(Debug)]
pub struct SinkError {
    pub message: String,
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for SinkError {
    fn from(s: String) -> Self {
        SinkError { message: s }
    }
}

impl From<&str> for SinkError {
    fn from(s: &str) -> Self {
        SinkError {
            message: s.to_string(),
        }
    }
}

/// One notification destination. Delivery must never panic; any transport or
/// protocol problem comes back as a `SinkError` or a `Failed` result.
#[async_trait]
pub trait Sink: Send + Sync {
    fn id(&self) -> &'static str;
    async fn deliver(&self, order: &OrderSubmission) -> Result<SinkResult, SinkError>;
}

pub struct SinkRegistry {
    sinks: Vec<Arc<dyn Sink>>,
}

impl SinkRegistry {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn register(&mut self, sink: Arc<dyn Sink>) {
        self.sinks.push(sink);
    }

    pub fn list(&self) -> &[Arc<dyn Sink>] {
        &self.sinks
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to build reqwest client")
}

/// Read a sink response into a result. Non-JSON bodies are carried as raw
/// text; only the transport status decides success.
pub(crate) async fn capture_response(resp: reqwest::Response) -> SinkResult {
    let status_code = resp.status().as_u16();
    let text = resp
        .text()
        .await
        .unwrap_or_default()
        .chars()
        .take(1024)
        .collect::<String>();

    let body = serde_json::from_str::<serde_json::Value>(&text)
        .unwrap_or(serde_json::Value::String(text));

    let status = if status_code >= 200 && status_code < 300 {
        SinkStatus::Success
    } else {
        SinkStatus::Failed
    };

    SinkResult {
        status,
        response: Some(json!({
            "status_code": status_code,
            "body": body,
        })),
    }
}
