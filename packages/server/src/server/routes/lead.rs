//! Lead submission endpoint.
//!
//! One POST handler orchestrating the full quiz funnel: validate contact
//! fields, generate the AI report, push the lead to the CRM, email the report
//! to the submitter. Strictly sequential; the first failing stage aborts the
//! rest, and nothing reaches a downstream system before validation passes.

use axum::extract::rejection::JsonRejection;
use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use bitrix_client::LeadInfo;
use gemini_client::{ReportAnswer, ReportRequest};

use crate::common::{validation, LeadSubmission};
use crate::kernel::{assemble_comment, Lang};
use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct LeadResponse {
    message: String,
}

/// Everything the lead pipeline can fail with.
///
/// Validation failures carry actionable messages. All downstream failures
/// collapse into one generic 500: the caller never learns which stage died,
/// even though the CRM write may already have landed when email dispatch
/// fails.
#[derive(Debug, Error)]
pub enum LeadError {
    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("Failed to generate AI report.")]
    ReportGenerationFailed,

    #[error("Malformed request body: {0}")]
    MalformedRequest(#[from] JsonRejection),

    #[error(transparent)]
    DownstreamDispatch(#[from] anyhow::Error),
}

impl IntoResponse for LeadError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            LeadError::InvalidEmail => (StatusCode::BAD_REQUEST, "Invalid email"),
            LeadError::InvalidPhone => (StatusCode::BAD_REQUEST, "Invalid phone number"),
            LeadError::ReportGenerationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate AI report.",
            ),
            LeadError::MalformedRequest(_) | LeadError::DownstreamDispatch(_) => {
                tracing::error!(error = %self, "Lead submission failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.",
                )
            }
        };

        (
            status,
            Json(LeadResponse {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// POST /api/lead
pub async fn submit_lead_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> Result<Json<LeadResponse>, LeadError> {
    let Json(submission) = payload?;

    if !validation::is_valid_email(&submission.email) {
        return Err(LeadError::InvalidEmail);
    }

    if let Some(phone) = submission.phone.as_deref().filter(|p| !p.is_empty()) {
        if !validation::is_valid_phone(phone, submission.country.as_deref()) {
            return Err(LeadError::InvalidPhone);
        }
    }

    let lang = Lang::from_code(submission.lang.as_deref());

    // Report first: nothing reaches the CRM or the inbox without it.
    let report_request = ReportRequest {
        answers: submission
            .answers
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|a| ReportAnswer {
                question: a.question.clone(),
                answer: a.answer.clone(),
            })
            .collect(),
        language: lang.code().to_string(),
        user_role: submission.user_role.clone(),
        education_level: submission.education_level.clone(),
    };

    let report_html = match state
        .server_deps
        .report_generator
        .generate_report(&report_request)
        .await
    {
        Ok(html) if !html.trim().is_empty() => html,
        Ok(_) => return Err(LeadError::ReportGenerationFailed),
        Err(error) => {
            tracing::error!(error = %error, "AI report generation failed");
            return Err(LeadError::ReportGenerationFailed);
        }
    };

    // Quiz submissions carry answers; plain landing-page submissions don't.
    let title = if submission.answers.is_some() {
        format!("AI Quiz - {}", submission.name)
    } else {
        format!("Landing - {}", submission.name)
    };
    let comment = assemble_comment(submission.answers.as_deref(), lang, &report_html);

    let lead = LeadInfo {
        email: submission.email.clone(),
        name: submission.name.clone(),
        phone: submission.phone.clone().unwrap_or_default(),
        comment,
    };
    let utm = submission.utm.clone().unwrap_or_default();

    state.server_deps.crm.submit_lead(&title, &lead, &utm).await?;

    state
        .server_deps
        .email
        .send_report(&submission.email, lang.email_subject(), &report_html)
        .await?;

    tracing::info!(email = %submission.email, lang = lang.code(), "Lead submission completed");

    Ok(Json(LeadResponse {
        message: "DONE".to_string(),
    }))
}
