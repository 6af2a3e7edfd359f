use std::net::IpAddr;

pub const DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com/emails";
pub const DEFAULT_EMAIL_FROM: &str = "Swag Store <noreply@resend.dev>";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub max_body_size: usize,
    pub sink_timeout_secs: u64,
    pub sheets: Option<SheetsConfig>,
    pub email: Option<EmailConfig>,
    pub chat: Option<ChatConfig>,
}

#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub url: String,
    pub format: SheetsFormat,
}

/// Payload encoding the spreadsheet webhook expects.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetsFormat {
    Json,
    Form,
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
    pub recipients: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub webhook_url: String,
    pub message_template: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("SWAGSTORE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SWAGSTORE_HOST: {e}"))?;

        let port: u16 = env_or("SWAGSTORE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid SWAGSTORE_PORT: {e}"))?;

        let log_level = env_or("SWAGSTORE_LOG_LEVEL", "info");

        let max_body_size: usize = env_or("SWAGSTORE_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid SWAGSTORE_MAX_BODY_SIZE: {e}"))?;

        let sink_timeout_secs: u64 = env_or("SWAGSTORE_SINK_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| format!("Invalid SWAGSTORE_SINK_TIMEOUT_SECS: {e}"))?;

        let sheets = std::env::var("SHEETS_WEBHOOK_URL").ok().map(|url| {
            let format = match env_or("SHEETS_FORMAT", "json").as_str() {
                "form" => SheetsFormat::Form,
                _ => SheetsFormat::Json,
            };
            SheetsConfig { url, format }
        });

        // Email needs both a key and at least one recipient; anything less
        // disables the sink.
        let email = match (
            std::env::var("RESEND_API_KEY").ok(),
            std::env::var("NOTIFICATION_EMAILS").ok(),
        ) {
            (Some(api_key), Some(emails)) => {
                let recipients: Vec<String> = emails
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if recipients.is_empty() {
                    None
                } else {
                    Some(EmailConfig {
                        api_url: env_or("EMAIL_API_URL", DEFAULT_EMAIL_API_URL),
                        api_key,
                        from: env_or("EMAIL_FROM", DEFAULT_EMAIL_FROM),
                        recipients,
                    })
                }
            }
            _ => None,
        };

        let chat = std::env::var("CHAT_WEBHOOK_URL")
            .ok()
            .map(|webhook_url| ChatConfig {
                webhook_url,
                message_template: std::env::var("CHAT_MESSAGE_TEMPLATE").ok(),
            });

        Ok(Config {
            host,
            port,
            log_level,
            max_body_size,
            sink_timeout_secs,
            sheets,
            email,
            chat,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
