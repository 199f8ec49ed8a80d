//! Server dependencies for the lead pipeline (using traits for testability)
//!
//! The route handlers only see `ServerDeps`; the adapters below bridge the
//! pure REST clients into the `Base*` traits.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;

use bitrix_client::{BitrixClient, LeadInfo, UtmArguments};
use gemini_client::{GeminiClient, ReportRequest};
use resend_client::{EmailMessage, ResendClient};

use super::{BaseCrmService, BaseEmailService, BaseReportGenerator};

// =============================================================================
// GeminiClient Adapter (implements BaseReportGenerator)
// =============================================================================

pub struct GeminiAdapter(pub Arc<GeminiClient>);

impl GeminiAdapter {
    pub fn new(client: Arc<GeminiClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseReportGenerator for GeminiAdapter {
    async fn generate_report(&self, request: &ReportRequest) -> Result<String> {
        self.0
            .generate_report(request)
            .await
            .context("Gemini report generation failed")
    }
}

// =============================================================================
// BitrixClient Adapter (implements BaseCrmService)
// =============================================================================

pub struct BitrixAdapter(pub Arc<BitrixClient>);

impl BitrixAdapter {
    pub fn new(client: Arc<BitrixClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseCrmService for BitrixAdapter {
    async fn submit_lead(&self, title: &str, lead: &LeadInfo, utm: &UtmArguments) -> Result<()> {
        self.0
            .add_lead(title, lead, utm)
            .await
            .map(|_| ())
            .context("Bitrix24 lead submission failed")
    }
}

// =============================================================================
// ResendClient Adapter (implements BaseEmailService)
// =============================================================================

/// Wraps the Resend client together with the configured sender address.
pub struct ResendAdapter {
    client: Arc<ResendClient>,
    from: String,
}

impl ResendAdapter {
    pub fn new(client: Arc<ResendClient>, from: String) -> Self {
        Self { client, from }
    }
}

#[async_trait]
impl BaseEmailService for ResendAdapter {
    async fn send_report(&self, to: &str, subject: &str, html: &str) -> Result<()> {
        self.client
            .send_email(&EmailMessage {
                from: self.from.clone(),
                to: vec![to.to_string()],
                subject: subject.to_string(),
                html: html.to_string(),
            })
            .await
            .map(|_| ())
            .context("Report email dispatch failed")
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// The three external collaborators of the lead pipeline, behind traits so
/// tests can inject mocks.
#[derive(Clone)]
pub struct ServerDeps {
    pub report_generator: Arc<dyn BaseReportGenerator>,
    pub crm: Arc<dyn BaseCrmService>,
    pub email: Arc<dyn BaseEmailService>,
}

impl ServerDeps {
    pub fn new(
        report_generator: Arc<dyn BaseReportGenerator>,
        crm: Arc<dyn BaseCrmService>,
        email: Arc<dyn BaseEmailService>,
    ) -> Self {
        Self {
            report_generator,
            crm,
            email,
        }
    }
}
