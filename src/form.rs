//! In-memory order form: field state, per-field validation errors, and the
//! single submission request. This is the logic half of the store front end,
//! usable from any UI that embeds the crate.

use std::collections::HashMap;

use serde_json::Value;

use crate::models::{OrderSubmission, GARMENT_SIZES, MERCH_CHOICES};

#[derive(Debug, Clone, PartialEq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success,
    Error(String),
}

pub struct OrderForm {
    pub order: OrderSubmission,
    pub errors: HashMap<String, String>,
    pub status: FormStatus,
}

impl OrderForm {
    pub fn new() -> Self {
        Self {
            order: OrderSubmission::default(),
            errors: HashMap::new(),
            status: FormStatus::Idle,
        }
    }

    /// Update a text field by its wire name, clearing any recorded error for
    /// it. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: &str) {
        let slot = match name {
            "name" => &mut self.order.name,
            "email" => &mut self.order.email,
            "address" => &mut self.order.address,
            "city" => &mut self.order.city,
            "stateProvince" => &mut self.order.state_province,
            "zipCode" => &mut self.order.zip_code,
            "country" => &mut self.order.country,
            "tshirtSize" => &mut self.order.tshirt_size,
            "hoodieSize" => &mut self.order.hoodie_size,
            "manager" => &mut self.order.manager,
            "firstChoice" => &mut self.order.first_choice,
            "secondChoice" => &mut self.order.second_choice,
            _ => return,
        };
        *slot = value.to_string();
        self.errors.remove(name);
    }

    pub fn set_employee(&mut self, checked: bool) {
        self.order.is_employee = checked;
        self.errors.remove("isEmployee");
        self.errors.remove("manager");
    }

    /// Check every field, rebuilding the error map. Returns true when the
    /// form may be submitted.
    pub fn validate(&mut self) -> bool {
        let mut errors = HashMap::new();

        let required = [
            ("name", &self.order.name),
            ("email", &self.order.email),
            ("address", &self.order.address),
            ("city", &self.order.city),
            ("stateProvince", &self.order.state_province),
            ("zipCode", &self.order.zip_code),
            ("country", &self.order.country),
            ("tshirtSize", &self.order.tshirt_size),
            ("hoodieSize", &self.order.hoodie_size),
            ("firstChoice", &self.order.first_choice),
            ("secondChoice", &self.order.second_choice),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.insert(field.to_string(), "This field is required".to_string());
            }
        }

        let email = self.order.email.trim();
        if !email.is_empty() && !(email.contains('@') && email.contains('.')) {
            errors.insert(
                "email".to_string(),
                "Enter a valid email address".to_string(),
            );
        }

        if self.order.is_employee && self.order.manager.trim().is_empty() {
            errors.insert(
                "manager".to_string(),
                "Manager name is required for employees".to_string(),
            );
        }

        for (field, value) in [
            ("tshirtSize", &self.order.tshirt_size),
            ("hoodieSize", &self.order.hoodie_size),
        ] {
            let v = value.trim();
            if !v.is_empty() && !GARMENT_SIZES.contains(&v) {
                errors.insert(field.to_string(), "Choose a size from the list".to_string());
            }
        }

        for (field, value) in [
            ("firstChoice", &self.order.first_choice),
            ("secondChoice", &self.order.second_choice),
        ] {
            let v = value.trim();
            if !v.is_empty() && !MERCH_CHOICES.contains(&v) {
                errors.insert(
                    field.to_string(),
                    "Choose a preference from the list".to_string(),
                );
            }
        }

        let first = self.order.first_choice.trim();
        let second = self.order.second_choice.trim();
        if !first.is_empty() && first == second {
            errors.insert(
                "secondChoice".to_string(),
                "Second choice must differ from your first choice".to_string(),
            );
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Validate and, if clean, issue exactly one submission request. A
    /// validation failure leaves the form Idle with the error map populated.
    /// On success the fields reset to defaults; otherwise the server- or
    /// network-supplied message is surfaced verbatim.
    pub async fn submit(&mut self, client: &reqwest::Client, endpoint: &str) {
        if !self.validate() {
            self.status = FormStatus::Idle;
            return;
        }

        self.status = FormStatus::Submitting;

        match client.post(endpoint).json(&self.order).send().await {
            Ok(resp) => {
                let body: Value = resp.json().await.unwrap_or(Value::Null);
                if body["success"].as_bool().unwrap_or(false) {
                    self.order = OrderSubmission::default();
                    self.status = FormStatus::Success;
                } else {
                    let msg = body["error"]
                        .as_str()
                        .unwrap_or("Failed to submit order")
                        .to_string();
                    self.status = FormStatus::Error(msg);
                }
            }
            Err(_) => {
                self.status = FormStatus::Error("Network error. Please try again.".to_string());
            }
        }
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::new()
    }
}
