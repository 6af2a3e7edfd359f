use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Garment sizes offered on the order form.
pub const GARMENT_SIZES: [&str; 7] = ["XS", "S", "M", "L", "XL", "XXL", "XXXL"];

/// Merchandise preference options.
pub const MERCH_CHOICES: [&str; 3] = ["T-Shirt", "Hoodie", "Both"];

/// One swag order as it travels over the wire. `submittedAt` is never read
/// from the client; the handler stamps it at receipt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state_province: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub tshirt_size: String,
    #[serde(default)]
    pub hoodie_size: String,
    #[serde(default, deserialize_with = "bool_from_any")]
    pub is_employee: bool,
    #[serde(default)]
    pub manager: String,
    #[serde(default)]
    pub first_choice: String,
    #[serde(default)]
    pub second_choice: String,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Form-encoded bodies carry booleans as strings, JSON bodies as booleans.
fn bool_from_any<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Boolish {
        Bool(bool),
        Num(i64),
        Str(String),
    }

    Ok(match Boolish::deserialize(deserializer)? {
        Boolish::Bool(b) => b,
        Boolish::Num(n) => n != 0,
        Boolish::Str(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "on" | "yes"
        ),
    })
}
