// Career Orientation Quiz - Lead API Core
//
// This crate provides the backend endpoint for the multilingual quiz funnel:
// validate a submission, generate an AI report, push the lead to the CRM and
// email the report to the submitter.

pub mod common;
pub mod config;
pub mod kernel;
pub mod server;

pub use config::*;
