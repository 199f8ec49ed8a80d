//! Pure Resend REST API client.
//!
//! A minimal client for the Resend transactional email API. Supports sending
//! a single HTML email.
//!
//! # Example
//!
//! ```rust,ignore
//! use resend_client::{EmailMessage, ResendClient};
//!
//! let client = ResendClient::new("re_your_api_key".into());
//!
//! let id = client
//!     .send_email(&EmailMessage {
//!         from: "Quiz <quiz@example.com>".into(),
//!         to: vec!["olena@example.com".into()],
//!         subject: "Your results".into(),
//!         html: "<p>Hello!</p>".into(),
//!     })
//!     .await?;
//! ```

pub mod error;

pub use error::{ResendError, Result};

use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://api.resend.com";

/// One outbound email.
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Successful send response.
#[derive(Debug, Deserialize)]
pub struct SendResponse {
    /// Identifier Resend assigned to the queued email.
    pub id: String,
}

pub struct ResendClient {
    client: reqwest::Client,
    api_key: String,
}

impl ResendClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Send one email. Returns the Resend email id.
    pub async fn send_email(&self, message: &EmailMessage) -> Result<String> {
        tracing::info!(
            to = %message.to.join(", "),
            subject = %message.subject,
            "Sending email via Resend"
        );

        let resp = self
            .client
            .post(format!("{BASE_URL}/emails"))
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ResendError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let sent: SendResponse = resp.json().await?;
        tracing::info!(email_id = %sent.id, "Email accepted by Resend");
        Ok(sent.id)
    }
}
