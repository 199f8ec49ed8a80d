use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Contact details and assembled comment for one lead.
#[derive(Debug, Clone, Serialize)]
pub struct LeadInfo {
    pub email: String,
    pub name: String,
    /// Empty string when the submitter gave no phone number.
    pub phone: String,
    pub comment: String,
}

/// Marketing attribution tags, passed through to the CRM unchanged.
pub type UtmArguments = HashMap<String, String>;

/// Bitrix multifield entry (EMAIL/PHONE fields take lists of these).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrmMultiField {
    #[serde(rename = "VALUE")]
    pub value: String,
    #[serde(rename = "VALUE_TYPE")]
    pub value_type: String,
}

impl CrmMultiField {
    pub fn work(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            value_type: "WORK".to_string(),
        }
    }
}

/// Successful crm.lead.add response.
#[derive(Debug, Deserialize)]
pub struct AddLeadResponse {
    /// Identifier of the created lead.
    pub result: i64,
}

/// Error payload Bitrix returns with HTTP 200 on some failures.
#[derive(Debug, Deserialize)]
pub struct BitrixErrorBody {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}
