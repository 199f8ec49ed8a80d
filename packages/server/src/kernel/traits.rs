// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The lead route decides what to send; these decide how it leaves the process.
//
// Naming convention: Base* for trait names (e.g., BaseCrmService)

use anyhow::Result;
use async_trait::async_trait;
use bitrix_client::{LeadInfo, UtmArguments};
use gemini_client::ReportRequest;

// =============================================================================
// Report Generation Trait (Infrastructure - LLM)
// =============================================================================

#[async_trait]
pub trait BaseReportGenerator: Send + Sync {
    /// Produce the localized HTML report for one submission.
    async fn generate_report(&self, request: &ReportRequest) -> Result<String>;
}

// =============================================================================
// CRM Dispatch Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseCrmService: Send + Sync {
    /// Submit one lead with its assembled comment and UTM attribution.
    async fn submit_lead(&self, title: &str, lead: &LeadInfo, utm: &UtmArguments) -> Result<()>;
}

// =============================================================================
// Email Dispatch Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseEmailService: Send + Sync {
    /// Send the HTML report to the submitter.
    async fn send_report(&self, to: &str, subject: &str, html: &str) -> Result<()>;
}
