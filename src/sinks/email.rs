use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use super::{capture_response, http_client, Sink, SinkError, SinkResult};
use crate::config::EmailConfig;
use crate::models::OrderSubmission;

/// Sends an order notification through a Resend-style transactional email
/// API: one POST with a bearer token and an HTML body.
pub struct EmailSink {
    client: reqwest::Client,
    config: EmailConfig,
}

impl EmailSink {
    pub fn new(config: EmailConfig, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            config,
        }
    }
}

#[async_trait]
impl Sink for EmailSink {
    fn id(&self) -> &'static str {
        "email"
    }

    async fn deliver(&self, order: &OrderSubmission) -> Result<SinkResult, SinkError> {
        let payload = json!({
            "from": self.config.from,
            "to": self.config.recipients,
            "subject": format!("New Swag Order from {}", order.name),
            "html": render_html(order),
        });

        let resp = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SinkError::from(format!("Email request failed: {e}")))?;

        Ok(capture_response(resp).await)
    }
}

fn render_html(order: &OrderSubmission) -> String {
    let submitted = order
        .submitted_at
        .map(|t| t.to_rfc3339())
        .unwrap_or_default();
    let manager = if order.is_employee {
        format!("<p><strong>Manager:</strong> {}</p>", order.manager)
    } else {
        String::new()
    };

    format!(
        "<h2>New Swag Order Submitted</h2>\
         <p><strong>Submitted:</strong> {submitted}</p>\
         <h3>Personal Information</h3>\
         <p><strong>Name:</strong> {name}</p>\
         <p><strong>Email:</strong> {email}</p>\
         <h3>Shipping Address</h3>\
         <p><strong>Address:</strong> {address}</p>\
         <p><strong>City:</strong> {city}</p>\
         <p><strong>State/Province:</strong> {state}</p>\
         <p><strong>Zip Code:</strong> {zip}</p>\
         <p><strong>Country:</strong> {country}</p>\
         <h3>Sizing</h3>\
         <p><strong>T-Shirt Size:</strong> {tshirt}</p>\
         <p><strong>Hoodie Size:</strong> {hoodie}</p>\
         <h3>Employment</h3>\
         <p><strong>Employee:</strong> {employee}</p>{manager}\
         <h3>Merchandise Preferences</h3>\
         <p><strong>First Choice:</strong> {first}</p>\
         <p><strong>Second Choice:</strong> {second}</p>",
        name = order.name,
        email = order.email,
        address = order.address,
        city = order.city,
        state = order.state_province,
        zip = order.zip_code,
        country = order.country,
        tshirt = order.tshirt_size,
        hoodie = order.hoodie_size,
        employee = if order.is_employee { "Yes" } else { "No" },
        first = order.first_choice,
        second = order.second_choice,
    )
}
