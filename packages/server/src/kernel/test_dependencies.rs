// TestDependencies - mock implementations for testing
//
// Provides mock collaborators that can be injected into ServerDeps for tests.
// Every mock appends to a shared ordered call log so tests can assert both
// invocation counts and dispatch order.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use bitrix_client::{LeadInfo, UtmArguments};
use gemini_client::ReportRequest;

use super::{BaseCrmService, BaseEmailService, BaseReportGenerator, ServerDeps};

/// Ordered record of collaborator invocations ("report", "crm", "email").
pub type CallLog = Arc<Mutex<Vec<String>>>;

// =============================================================================
// Mock Report Generator
// =============================================================================

pub struct MockReportGenerator {
    log: CallLog,
    requests: Mutex<Vec<ReportRequest>>,
    /// Ok(html) to return, or Err(message) to fail the call.
    response: Mutex<std::result::Result<String, String>>,
}

impl MockReportGenerator {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            requests: Mutex::new(Vec::new()),
            response: Mutex::new(Ok("<p>Mock AI report</p>".to_string())),
        }
    }

    pub fn set_response(&self, html: &str) {
        *self.response.lock().unwrap() = Ok(html.to_string());
    }

    pub fn set_failure(&self, message: &str) {
        *self.response.lock().unwrap() = Err(message.to_string());
    }

    /// All report requests received, in order.
    pub fn requests(&self) -> Vec<ReportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseReportGenerator for MockReportGenerator {
    async fn generate_report(&self, request: &ReportRequest) -> Result<String> {
        self.log.lock().unwrap().push("report".to_string());
        self.requests.lock().unwrap().push(request.clone());

        match &*self.response.lock().unwrap() {
            Ok(html) => Ok(html.clone()),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}

// =============================================================================
// Mock CRM Service
// =============================================================================

/// Arguments captured from a submit_lead call
#[derive(Debug, Clone)]
pub struct CrmCallArgs {
    pub title: String,
    pub lead: LeadInfo,
    pub utm: UtmArguments,
}

pub struct MockCrmService {
    log: CallLog,
    calls: Mutex<Vec<CrmCallArgs>>,
    failure: Mutex<Option<String>>,
}

impl MockCrmService {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            calls: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    pub fn set_failure(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// All lead submissions received, in order.
    pub fn calls(&self) -> Vec<CrmCallArgs> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseCrmService for MockCrmService {
    async fn submit_lead(&self, title: &str, lead: &LeadInfo, utm: &UtmArguments) -> Result<()> {
        self.log.lock().unwrap().push("crm".to_string());
        self.calls.lock().unwrap().push(CrmCallArgs {
            title: title.to_string(),
            lead: lead.clone(),
            utm: utm.clone(),
        });

        match &*self.failure.lock().unwrap() {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Mock Email Service
// =============================================================================

/// Arguments captured from a send_report call
#[derive(Debug, Clone)]
pub struct EmailCallArgs {
    pub to: String,
    pub subject: String,
    pub html: String,
}

pub struct MockEmailService {
    log: CallLog,
    calls: Mutex<Vec<EmailCallArgs>>,
    failure: Mutex<Option<String>>,
}

impl MockEmailService {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            calls: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    pub fn set_failure(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// All emails received, in order.
    pub fn calls(&self) -> Vec<EmailCallArgs> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseEmailService for MockEmailService {
    async fn send_report(&self, to: &str, subject: &str, html: &str) -> Result<()> {
        self.log.lock().unwrap().push("email".to_string());
        self.calls.lock().unwrap().push(EmailCallArgs {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });

        match &*self.failure.lock().unwrap() {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(()),
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// All three mocks wired onto one shared call log.
pub struct TestDependencies {
    pub log: CallLog,
    pub report_generator: Arc<MockReportGenerator>,
    pub crm: Arc<MockCrmService>,
    pub email: Arc<MockEmailService>,
}

impl TestDependencies {
    pub fn new() -> Self {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        Self {
            report_generator: Arc::new(MockReportGenerator::new(log.clone())),
            crm: Arc::new(MockCrmService::new(log.clone())),
            email: Arc::new(MockEmailService::new(log.clone())),
            log,
        }
    }

    pub fn with_report(self, html: &str) -> Self {
        self.report_generator.set_response(html);
        self
    }

    pub fn with_report_failure(self) -> Self {
        self.report_generator.set_failure("mock report failure");
        self
    }

    pub fn with_crm_failure(self) -> Self {
        self.crm.set_failure("mock CRM failure");
        self
    }

    pub fn with_email_failure(self) -> Self {
        self.email.set_failure("mock email failure");
        self
    }

    /// ServerDeps backed by the mocks, ready for build_app.
    pub fn server_deps(&self) -> Arc<ServerDeps> {
        Arc::new(ServerDeps::new(
            self.report_generator.clone(),
            self.crm.clone(),
            self.email.clone(),
        ))
    }

    /// The collaborator names in invocation order.
    pub fn call_order(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
