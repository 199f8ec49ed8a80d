//! Pure Google Gemini REST API client.
//!
//! A minimal client for the generateContent API, scoped to what the lead
//! pipeline needs: turn a finished quiz into a localized HTML report.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, ReportAnswer, ReportRequest};
//!
//! let client = GeminiClient::new("your-api-key".into());
//!
//! let report = client
//!     .generate_report(&ReportRequest {
//!         answers: vec![ReportAnswer {
//!             question: "What do you enjoy most outside school?".into(),
//!             answer: "Drawing".into(),
//!         }],
//!         language: "en".into(),
//!         user_role: None,
//!         education_level: None,
//!     })
//!     .await?;
//! println!("{report}");
//! ```

pub mod error;
pub mod types;

pub use error::{GeminiError, Result};
pub use types::{ReportAnswer, ReportRequest};

use types::{
    GeminiContent, GeminiErrorResponse, GeminiPart, GeminiRequest, GeminiResponse,
    GenerationConfig,
};

const BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used for report generation.
const REPORT_MODEL: &str = "gemini-2.0-flash";

const SYSTEM_PROMPT: &str = "You are a career guidance counselor. You receive the \
answers a person gave in a career orientation quiz and write a warm, encouraging, \
personalized report. Respond with a self-contained HTML fragment (headings, \
paragraphs, lists; no <html> or <body> tags) and nothing else.";

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
        }
    }

    /// Generate a localized HTML career report for a completed quiz.
    pub async fn generate_report(&self, request: &ReportRequest) -> Result<String> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: build_report_prompt(request),
                }],
            }],
            system_instruction: Some(GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: SYSTEM_PROMPT.to_string(),
                }],
            }),
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                max_output_tokens: Some(4096),
            }),
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, REPORT_MODEL
        );
        tracing::info!(
            model = REPORT_MODEL,
            language = %request.language,
            answers = request.answers.len(),
            "Requesting AI report"
        );

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let api_resp: GeminiResponse = resp.json().await?;
        let report = extract_text(api_resp)?;
        tracing::info!(report_length = report.len(), "AI report received");
        Ok(report)
    }
}

/// Flatten the quiz into the user prompt. Answers keep their submission order.
fn build_report_prompt(request: &ReportRequest) -> String {
    let mut prompt = format!(
        "Write the report in the language with ISO code \"{}\".\n",
        request.language
    );
    if let Some(role) = request.user_role.as_deref() {
        prompt.push_str(&format!("The person described themselves as: {role}.\n"));
    }
    if let Some(level) = request.education_level.as_deref() {
        prompt.push_str(&format!("Their education level is: {level}.\n"));
    }

    if request.answers.is_empty() {
        prompt.push_str(
            "\nThey submitted the contact form without taking the quiz. Write a short \
             general introduction to career orientation and invite them to take the test.\n",
        );
    } else {
        prompt.push_str("\nTheir quiz answers:\n");
        for answer in &request.answers {
            prompt.push_str(&format!("- {}: {}\n", answer.question, answer.answer));
        }
    }

    prompt
}

/// Concatenate the text parts of the first candidate.
fn extract_text(resp: GeminiResponse) -> Result<String> {
    let candidate = resp
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| GeminiError::Parse("No candidates in Gemini response".to_string()))?;

    let content = candidate
        .content
        .ok_or_else(|| GeminiError::Parse("Candidate has no content".to_string()))?;

    Ok(content
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect::<Vec<_>>()
        .join(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> ReportRequest {
        ReportRequest {
            answers: vec![ReportAnswer {
                question: "What energizes you?".to_string(),
                answer: "Building things".to_string(),
            }],
            language: "en".to_string(),
            user_role: Some("student".to_string()),
            education_level: Some("university".to_string()),
        }
    }

    #[test]
    fn test_request_serialization_is_camel_case() {
        let req = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: "Hello".to_string(),
                }],
            }],
            system_instruction: Some(GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: "Be helpful.".to_string(),
                }],
            }),
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                max_output_tokens: Some(4096),
            }),
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello");
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "Be helpful.");
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 4096);
    }

    #[test]
    fn test_response_deserialization() {
        let json = serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "<p>Part one.</p>"}, {"text": "<p>Part two.</p>"}]
                },
                "finishReason": "STOP"
            }]
        });

        let resp: GeminiResponse = serde_json::from_value(json).unwrap();
        let text = extract_text(resp).unwrap();
        assert_eq!(text, "<p>Part one.</p><p>Part two.</p>");
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let resp = GeminiResponse { candidates: vec![] };
        assert!(matches!(extract_text(resp), Err(GeminiError::Parse(_))));
    }

    #[test]
    fn test_error_response_deserialization() {
        let json = serde_json::json!({
            "error": { "message": "API key not valid." }
        });

        let err: GeminiErrorResponse = serde_json::from_value(json).unwrap();
        assert_eq!(err.error.message, "API key not valid.");
    }

    #[test]
    fn test_prompt_includes_answers_and_language() {
        let prompt = build_report_prompt(&sample_request());
        assert!(prompt.contains("\"en\""));
        assert!(prompt.contains("student"));
        assert!(prompt.contains("university"));
        assert!(prompt.contains("- What energizes you?: Building things"));
    }

    #[test]
    fn test_prompt_without_answers_asks_for_introduction() {
        let mut request = sample_request();
        request.answers.clear();
        let prompt = build_report_prompt(&request);
        assert!(prompt.contains("without taking the quiz"));
    }
}
