// End-to-end tests for the lead submission pipeline.
//
// The router is built with mocked collaborators and driven through
// tower::ServiceExt::oneshot, so every test exercises the full HTTP surface:
// body parsing, validation, the sequential dispatch chain, and the error
// mapping.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use server_core::kernel::TestDependencies;
use server_core::server::build_app;

async fn send(deps: &TestDependencies, body: Value) -> (StatusCode, Value) {
    send_raw(deps, body.to_string()).await
}

async fn send_raw(deps: &TestDependencies, body: String) -> (StatusCode, Value) {
    let app = build_app(deps.server_deps());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/lead")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn valid_submission() -> Value {
    json!({
        "name": "Olena",
        "email": "olena@example.com",
        "phone": "+380501234567",
        "country": "UA",
        "lang": "ua",
        "userRole": "pupil",
        "educationLevel": "school",
        "answers": [
            {"question": "Що тебе найбільше захоплює поза школою?", "answer": "Малювання", "type": "open-ended"},
            {"question": "Який предмет дається найлегше?", "answer": "Математика", "type": "multiple-choice"}
        ],
        "utm": {"utm_source": "instagram", "utm_campaign": "spring"}
    })
}

#[tokio::test]
async fn invalid_email_is_rejected_before_any_dispatch() {
    let deps = TestDependencies::new();
    let mut body = valid_submission();
    body["email"] = json!("not-an-email");

    let (status, json) = send(&deps, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid email");
    assert!(deps.call_order().is_empty());
}

#[tokio::test]
async fn missing_email_is_rejected_before_any_dispatch() {
    let deps = TestDependencies::new();
    let mut body = valid_submission();
    body.as_object_mut().unwrap().remove("email");

    let (status, json) = send(&deps, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid email");
    assert!(deps.call_order().is_empty());
}

#[tokio::test]
async fn invalid_phone_is_rejected_before_any_dispatch() {
    let deps = TestDependencies::new();
    let mut body = valid_submission();
    body["phone"] = json!("12345");

    let (status, json) = send(&deps, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid phone number");
    assert!(deps.call_order().is_empty());
}

#[tokio::test]
async fn absent_phone_is_not_validated() {
    let deps = TestDependencies::new();
    let mut body = valid_submission();
    body.as_object_mut().unwrap().remove("phone");

    let (status, json) = send(&deps, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "DONE");
    // phone reaches the CRM as an empty string
    assert_eq!(deps.crm.calls()[0].lead.phone, "");
}

#[tokio::test]
async fn report_failure_aborts_before_crm_and_email() {
    let deps = TestDependencies::new().with_report_failure();

    let (status, json) = send(&deps, valid_submission()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Failed to generate AI report.");
    assert_eq!(deps.call_order(), vec!["report"]);
}

#[tokio::test]
async fn empty_report_counts_as_failure() {
    let deps = TestDependencies::new().with_report("");

    let (status, json) = send(&deps, valid_submission()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Failed to generate AI report.");
    assert_eq!(deps.call_order(), vec!["report"]);
}

#[tokio::test]
async fn full_submission_dispatches_in_order() {
    let deps = TestDependencies::new().with_report("<p>R</p>");

    let (status, json) = send(&deps, valid_submission()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "DONE");
    assert_eq!(deps.call_order(), vec!["report", "crm", "email"]);

    let report_requests = deps.report_generator.requests();
    assert_eq!(report_requests.len(), 1);
    assert_eq!(report_requests[0].language, "ua");
    assert_eq!(report_requests[0].answers.len(), 2);
    assert_eq!(report_requests[0].user_role.as_deref(), Some("pupil"));

    let crm_calls = deps.crm.calls();
    assert_eq!(crm_calls.len(), 1);
    assert_eq!(crm_calls[0].title, "AI Quiz - Olena");
    assert_eq!(crm_calls[0].lead.email, "olena@example.com");
    assert_eq!(crm_calls[0].lead.phone, "+380501234567");
    assert_eq!(
        crm_calls[0].utm.get("utm_source").map(String::as_str),
        Some("instagram")
    );
    // only the open-ended answer lands in the comment
    assert!(crm_calls[0].lead.comment.contains("Що тебе найбільше захоплює поза школою?:\nМалювання"));
    assert!(!crm_calls[0].lead.comment.contains("Математика"));

    let emails = deps.email.calls();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].to, "olena@example.com");
    assert_eq!(
        emails[0].subject,
        "Ваші персональні результати тесту з профорієнтації"
    );
    assert_eq!(emails[0].html, "<p>R</p>");
}

#[tokio::test]
async fn landing_submission_without_answers_gets_landing_title() {
    let deps = TestDependencies::new().with_report("<p>R</p>");
    let mut body = valid_submission();
    body.as_object_mut().unwrap().remove("answers");

    let (status, json) = send(&deps, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "DONE");

    let crm_calls = deps.crm.calls();
    assert_eq!(crm_calls[0].title, "Landing - Olena");
    // no answers: the comment is the report text itself
    assert_eq!(crm_calls[0].lead.comment, "<p>R</p>");
}

#[tokio::test]
async fn empty_answer_list_keeps_quiz_title_and_plain_comment() {
    let deps = TestDependencies::new().with_report("<p>R</p>");
    let mut body = valid_submission();
    body["answers"] = json!([]);

    let (status, _) = send(&deps, body).await;

    assert_eq!(status, StatusCode::OK);
    let crm_calls = deps.crm.calls();
    assert_eq!(crm_calls[0].title, "AI Quiz - Olena");
    assert_eq!(crm_calls[0].lead.comment, "<p>R</p>");
}

#[tokio::test]
async fn unsupported_language_falls_back_to_default() {
    let deps = TestDependencies::new();
    let mut body = valid_submission();
    body["lang"] = json!("fr");

    let (status, _) = send(&deps, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(deps.report_generator.requests()[0].language, "ua");
}

#[tokio::test]
async fn crm_failure_is_a_generic_error_and_skips_email() {
    let deps = TestDependencies::new().with_crm_failure();

    let (status, json) = send(&deps, valid_submission()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "An internal server error occurred.");
    assert_eq!(deps.call_order(), vec!["report", "crm"]);
}

#[tokio::test]
async fn email_failure_is_a_generic_error() {
    let deps = TestDependencies::new().with_email_failure();

    let (status, json) = send(&deps, valid_submission()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "An internal server error occurred.");
    assert_eq!(deps.call_order(), vec!["report", "crm", "email"]);
}

#[tokio::test]
async fn unparseable_body_is_a_generic_error() {
    let deps = TestDependencies::new();

    let (status, json) = send_raw(&deps, "this is not json".to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "An internal server error occurred.");
    assert!(deps.call_order().is_empty());
}

#[tokio::test]
async fn health_endpoint_responds() {
    let deps = TestDependencies::new();
    let app = build_app(deps.server_deps());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
