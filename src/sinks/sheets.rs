use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{capture_response, http_client, Sink, SinkError, SinkResult};
use crate::config::{SheetsConfig, SheetsFormat};
use crate::models::OrderSubmission;

/// Appends the order to a spreadsheet through its webhook. The Apps Script
/// deployment behind it may answer with HTML, which `capture_response`
/// tolerates.
pub struct SheetsSink {
    client: reqwest::Client,
    config: SheetsConfig,
}

impl SheetsSink {
    pub fn new(config: SheetsConfig, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            config,
        }
    }
}

#[async_trait]
impl Sink for SheetsSink {
    fn id(&self) -> &'static str {
        "sheets"
    }

    async fn deliver(&self, order: &OrderSubmission) -> Result<SinkResult, SinkError> {
        let req = match self.config.format {
            SheetsFormat::Json => self.client.post(&self.config.url).json(order),
            SheetsFormat::Form => self.client.post(&self.config.url).form(&form_fields(order)),
        };

        let resp = req
            .send()
            .await
            .map_err(|e| SinkError::from(format!("Sheets request failed: {e}")))?;

        Ok(capture_response(resp).await)
    }
}

/// Form-encoded variant stringifies every field, booleans included.
fn form_fields(order: &OrderSubmission) -> Vec<(String, String)> {
    let value = serde_json::to_value(order).unwrap_or_default();
    let Some(obj) = value.as_object() else {
        return Vec::new();
    };

    obj.iter()
        .map(|(k, v)| {
            let s = match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (k.clone(), s)
        })
        .collect()
}
