//! Pure Bitrix24 REST API client.
//!
//! A minimal client for the inbound-webhook flavor of the Bitrix24 REST API.
//! Supports creating CRM leads with contact multifields, a comment, and UTM
//! attribution.
//!
//! # Example
//!
//! ```rust,ignore
//! use bitrix_client::{BitrixClient, LeadInfo, UtmArguments};
//!
//! let client = BitrixClient::new("https://example.bitrix24.eu/rest/1/token".into());
//!
//! let lead_id = client
//!     .add_lead("AI Quiz - Olena", &lead, &UtmArguments::new())
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{BitrixError, Result};
pub use types::{AddLeadResponse, CrmMultiField, LeadInfo, UtmArguments};

use serde_json::json;
use types::BitrixErrorBody;

pub struct BitrixClient {
    client: reqwest::Client,
    /// Inbound webhook base, e.g. `https://portal.bitrix24.eu/rest/1/abc123`.
    webhook_url: String,
}

impl BitrixClient {
    pub fn new(webhook_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }

    /// Create a CRM lead. Returns the new lead's identifier.
    pub async fn add_lead(
        &self,
        title: &str,
        lead: &LeadInfo,
        utm: &UtmArguments,
    ) -> Result<i64> {
        let url = format!(
            "{}/crm.lead.add.json",
            self.webhook_url.trim_end_matches('/')
        );
        let payload = build_lead_payload(title, lead, utm);

        tracing::info!(title, "Submitting lead to Bitrix24");

        let resp = self.client.post(&url).json(&payload).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(BitrixError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        // Bitrix reports some failures as 200 with an `error` body.
        let body: serde_json::Value = resp.json().await?;
        if let Ok(err) = serde_json::from_value::<BitrixErrorBody>(body.clone()) {
            return Err(BitrixError::Api {
                status: status.as_u16(),
                message: err.error_description.unwrap_or(err.error),
            });
        }

        let parsed: AddLeadResponse =
            serde_json::from_value(body).map_err(|e| BitrixError::Parse(e.to_string()))?;
        tracing::info!(lead_id = parsed.result, "Bitrix24 lead created");
        Ok(parsed.result)
    }
}

/// Assemble the `fields` object for crm.lead.add.
///
/// UTM keys arrive lowercased from the frontend and Bitrix expects its
/// UTM_SOURCE-style uppercase field names; values pass through unchanged.
/// An empty phone is omitted rather than sent as an empty multifield.
fn build_lead_payload(title: &str, lead: &LeadInfo, utm: &UtmArguments) -> serde_json::Value {
    let mut fields = serde_json::Map::new();
    fields.insert("TITLE".to_string(), json!(title));
    fields.insert("NAME".to_string(), json!(lead.name));
    fields.insert(
        "EMAIL".to_string(),
        json!([CrmMultiField::work(lead.email.clone())]),
    );
    if !lead.phone.is_empty() {
        fields.insert(
            "PHONE".to_string(),
            json!([CrmMultiField::work(lead.phone.clone())]),
        );
    }
    fields.insert("COMMENTS".to_string(), json!(lead.comment));

    for (key, value) in utm {
        fields.insert(key.to_uppercase(), json!(value));
    }

    json!({ "fields": fields })
}
