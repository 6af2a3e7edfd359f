use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use super::{capture_response, http_client, template, Sink, SinkError, SinkResult};
use crate::config::ChatConfig;
use crate::models::OrderSubmission;

pub const DEFAULT_MESSAGE_TEMPLATE: &str = "New swag order from {{name}} ({{email}}). \
     First choice: {{firstChoice}}. Second choice: {{secondChoice}}.";

/// Posts a human-readable announcement to a chat webhook.
pub struct ChatSink {
    client: reqwest::Client,
    config: ChatConfig,
}

impl ChatSink {
    pub fn new(config: ChatConfig, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            config,
        }
    }
}

#[async_trait]
impl Sink for ChatSink {
    fn id(&self) -> &'static str {
        "chat"
    }

    async fn deliver(&self, order: &OrderSubmission) -> Result<SinkResult, SinkError> {
        let tmpl = self
            .config
            .message_template
            .as_deref()
            .unwrap_or(DEFAULT_MESSAGE_TEMPLATE);
        let content = template::render(tmpl, order);

        let resp = self
            .client
            .post(&self.config.webhook_url)
            .json(&json!({ "content": content }))
            .send()
            .await
            .map_err(|e| SinkError::from(format!("Chat request failed: {e}")))?;

        Ok(capture_response(resp).await)
    }
}
