//! End-to-end tests for the delivery layer against a mock webhook.
//!
//! These exercise the full controller pipeline (validate, assemble, POST,
//! feedback) with the endpoint played by a local mock server.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::time::Duration;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use formhook_client::{SubmissionController, SubmitOutcome, WebhookConfig, WebhookSink};
use formhook_core::{FeedbackStatus, FormDefinition};

fn contact_definition() -> FormDefinition {
    FormDefinition::from_json(
        r#"{
            "fields": [
                {"name": "name", "label": "Full Name", "kind": "short-text", "required": true},
                {"name": "email", "label": "E-mail", "kind": "email", "required": true},
                {"name": "phone", "label": "Phone", "kind": "phone", "required": false},
                {"name": "message", "label": "Message", "kind": "long-text", "required": true}
            ],
            "success_message": "Thanks! We'll be in touch soon.",
            "error_message": "Something went wrong. Please try again."
        }"#,
    )
    .unwrap()
}

fn controller_for(url: &str) -> SubmissionController {
    let config = WebhookConfig::new(url)
        .unwrap()
        .with_source("landing-page")
        .with_timeout(Duration::from_secs(2));
    SubmissionController::new(&contact_definition(), WebhookSink::new(&config).unwrap())
}

fn fill_valid(form: &mut SubmissionController) {
    form.set_value("name", "Ana").unwrap();
    form.set_value("email", "ana@x.com").unwrap();
    form.set_value("message", "Hi").unwrap();
}

#[tokio::test]
async fn accepted_delivery_reaches_success_and_clears_input() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = controller_for(&format!("{}/hook", server.uri()));
    fill_valid(&mut form);

    let outcome = form.submit().await;
    let SubmitOutcome::Completed(state) = outcome else {
        panic!("expected a completed submission, got {outcome:?}");
    };
    assert_eq!(state.status, FeedbackStatus::Success);
    assert_eq!(state.message.as_deref(), Some("Thanks! We'll be in touch soon."));

    // Inputs are cleared after a successful delivery.
    assert!(form.value("name").is_none());
    assert!(form.value("email").is_none());
    assert!(form.value("message").is_none());
}

#[tokio::test]
async fn payload_carries_values_timestamp_and_source() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut form = controller_for(&server.uri());
    fill_valid(&mut form);
    form.set_value("phone", "(11) 91234-5678").unwrap();
    form.submit().await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["email"], "ana@x.com");
    assert_eq!(body["phone"], "(11) 91234-5678");
    assert_eq!(body["message"], "Hi");
    assert_eq!(body["source"], "landing-page");
    assert!(body["timestamp"].as_str().is_some(), "timestamp must be a string");
}

#[tokio::test]
async fn server_error_reaches_error_state_and_preserves_input() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = controller_for(&server.uri());
    fill_valid(&mut form);

    let outcome = form.submit().await;
    let SubmitOutcome::Completed(state) = outcome else {
        panic!("expected a completed submission, got {outcome:?}");
    };
    assert_eq!(state.status, FeedbackStatus::Error);
    assert_eq!(
        state.message.as_deref(),
        Some("Something went wrong. Please try again.")
    );

    // Inputs survive a failed delivery so the user can retry as-is.
    assert_eq!(form.value("name"), Some("Ana"));
    assert_eq!(form.value("email"), Some("ana@x.com"));
    assert_eq!(form.value("message"), Some("Hi"));
}

#[tokio::test]
async fn unreachable_endpoint_is_the_same_generic_error() {
    // Nothing listens here; the connection is refused outright.
    let mut form = controller_for("http://127.0.0.1:1/hook");
    fill_valid(&mut form);

    let outcome = form.submit().await;
    let SubmitOutcome::Completed(state) = outcome else {
        panic!("expected a completed submission, got {outcome:?}");
    };
    assert_eq!(state.status, FeedbackStatus::Error);
    assert_eq!(
        state.message.as_deref(),
        Some("Something went wrong. Please try again.")
    );
    assert_eq!(form.value("name"), Some("Ana"));
}

#[tokio::test]
async fn slow_endpoint_times_out_into_error_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let config = WebhookConfig::new(server.uri())
        .unwrap()
        .with_timeout(Duration::from_millis(200));
    let mut form =
        SubmissionController::new(&contact_definition(), WebhookSink::new(&config).unwrap());
    fill_valid(&mut form);

    let outcome = form.submit().await;
    let SubmitOutcome::Completed(state) = outcome else {
        panic!("expected a completed submission, got {outcome:?}");
    };
    assert_eq!(state.status, FeedbackStatus::Error);
}

#[tokio::test]
async fn validation_failure_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = controller_for(&server.uri());
    form.set_value("name", "").unwrap();
    form.set_value("email", "ana@x.com").unwrap();
    form.set_value("message", "Hi").unwrap();

    let outcome = form.submit().await;
    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected a validation failure, got {outcome:?}");
    };
    assert_eq!(errors.for_field("name"), Some("Full Name is required"));
    assert_eq!(form.state().status, FeedbackStatus::Idle);

    server.verify().await;
}

#[tokio::test]
async fn retry_after_failure_succeeds_without_retyping() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut form = controller_for(&server.uri());
    fill_valid(&mut form);

    let first = form.submit().await;
    let SubmitOutcome::Completed(state) = first else {
        panic!("expected a completed submission, got {first:?}");
    };
    assert_eq!(state.status, FeedbackStatus::Error);
    assert_eq!(form.value("name"), Some("Ana"));

    // Explicit user re-initiation: the preserved draft is submitted again.
    let second = form.submit().await;
    let SubmitOutcome::Completed(state) = second else {
        panic!("expected a completed submission, got {second:?}");
    };
    assert_eq!(state.status, FeedbackStatus::Success);
    assert!(form.value("name").is_none());
}
