use serde::{Deserialize, Serialize};

/// One answered quiz question, as handed to the report prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ReportAnswer {
    pub question: String,
    pub answer: String,
}

/// Input for one report generation call.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRequest {
    pub answers: Vec<ReportAnswer>,
    /// ISO language code the report must be written in.
    pub language: String,
    pub user_role: Option<String>,
    pub education_level: Option<String>,
}

/// Top-level generateContent request body.
///
/// Gemini differs from the OpenAI-shaped APIs: the model goes in the URL
/// path, auth is the `x-goog-api-key` header, and the system prompt is a
/// separate `systemInstruction` field.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A content entry (user/model turn). `systemInstruction` entries carry no role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<GeminiPart>,
}

/// A text part within a content entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Top-level generateContent response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Gemini API error response.
#[derive(Debug, Deserialize)]
pub struct GeminiErrorResponse {
    pub error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct GeminiErrorDetail {
    pub message: String,
}
