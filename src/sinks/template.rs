use std::sync::LazyLock;

use regex::Regex;

use crate::models::OrderSubmission;

static TEMPLATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").unwrap());

/// Replace {{field}} placeholders in a template string with values from the
/// order. Unknown fields render as empty.
pub fn render(template: &str, order: &OrderSubmission) -> String {
    TEMPLATE_RE
        .replace_all(template, |caps: &regex::Captures| {
            resolve(&caps[1], order).unwrap_or_default()
        })
        .to_string()
}

fn resolve(field: &str, order: &OrderSubmission) -> Option<String> {
    match field {
        "name" => Some(order.name.clone()),
        "email" => Some(order.email.clone()),
        "address" => Some(order.address.clone()),
        "city" => Some(order.city.clone()),
        "stateProvince" => Some(order.state_province.clone()),
        "zipCode" => Some(order.zip_code.clone()),
        "country" => Some(order.country.clone()),
        "tshirtSize" => Some(order.tshirt_size.clone()),
        "hoodieSize" => Some(order.hoodie_size.clone()),
        "isEmployee" => Some(if order.is_employee { "Yes" } else { "No" }.to_string()),
        "manager" => Some(order.manager.clone()),
        "firstChoice" => Some(order.first_choice.clone()),
        "secondChoice" => Some(order.second_choice.clone()),
        "submittedAt" => order.submitted_at.map(|t| t.to_rfc3339()),
        _ => None,
    }
}
