use serde::Deserialize;
use std::collections::HashMap;

/// One quiz/landing submission from the web frontend. Lives only for the
/// duration of its request; nothing is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct LeadSubmission {
    #[serde(default)]
    pub name: String,
    /// Required; validated before any downstream call. Missing email
    /// deserializes to an empty string and fails validation.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// ISO 3166-1 alpha-2 region used to interpret a national phone number.
    #[serde(default)]
    pub country: Option<String>,
    /// Absent for plain landing-page submissions.
    #[serde(default)]
    pub answers: Option<Vec<QuizAnswer>>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default, rename = "userRole")]
    pub user_role: Option<String>,
    #[serde(default, rename = "educationLevel")]
    pub education_level: Option<String>,
    /// Marketing attribution, passed through to the CRM unchanged.
    #[serde(default)]
    pub utm: Option<HashMap<String, String>>,
}

/// A single answered question. Only `open-ended` answers are copied into the
/// CRM comment; choice answers are summarized by the AI report instead.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizAnswer {
    pub question: String,
    pub answer: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl QuizAnswer {
    pub fn is_open_ended(&self) -> bool {
        self.kind == "open-ended"
    }
}
