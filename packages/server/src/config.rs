use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub gemini_api_key: String,
    pub bitrix_webhook_url: String,
    pub resend_api_key: String,
    /// Sender address for report emails, e.g. `Quiz <quiz@example.com>`.
    pub email_from: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            gemini_api_key: env::var("GEMINI_API_KEY")
                .context("GEMINI_API_KEY must be set")?,
            bitrix_webhook_url: env::var("BITRIX_WEBHOOK_URL")
                .context("BITRIX_WEBHOOK_URL must be set")?,
            resend_api_key: env::var("RESEND_API_KEY")
                .context("RESEND_API_KEY must be set")?,
            email_from: env::var("EMAIL_FROM")
                .context("EMAIL_FROM must be set")?,
        })
    }
}
