//! Integration tests for the registration flow
//!
//! The gateway and navigator are replaced by in-process fakes so the tests
//! can count network calls and observe the redirect.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use signup_form::{
    ErrorKey, Field, FormConfig, FormController, GatewayError, Navigator, Partner,
    PartnerSubmission, SubmissionGateway, SubmissionOutcome, SubmitResult, FORM_ERROR,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

#[derive(Default)]
struct FakeGateway {
    calls: Mutex<Vec<PartnerSubmission>>,
    fail: AtomicBool,
    gate: Option<Arc<Notify>>,
}

impl FakeGateway {
    fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<PartnerSubmission> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionGateway for FakeGateway {
    async fn submit(&self, submission: &PartnerSubmission) -> Result<Partner, GatewayError> {
        self.calls.lock().unwrap().push(submission.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.fail.load(Ordering::SeqCst) {
            Err(GatewayError::Status(500))
        } else {
            Ok(Partner::create(submission.clone()))
        }
    }
}

#[derive(Default)]
struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &str) {
        self.visited.lock().unwrap().push(target.to_string());
    }
}

fn controller(gateway: Arc<FakeGateway>, navigator: Arc<RecordingNavigator>) -> FormController {
    FormController::new(gateway, navigator, FormConfig::default())
}

fn fill_valid(controller: &FormController) {
    let fields = [
        (Field::Name, "Test User"),
        (Field::Company, "Test Company"),
        (Field::MobilePhone, "07123456789"),
        (Field::EmailAddress, "test@example.com"),
        (Field::Postcode, "EC1N 2TD"),
    ];
    for (field, value) in fields {
        controller.on_field_change(field, value).unwrap();
        controller.on_field_blur(field, value).unwrap();
    }
    controller.on_field_change(Field::PayLater, true).unwrap();
    controller.on_field_blur(Field::PayLater, true).unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_valid_submission_succeeds_and_redirects() {
    let gateway = Arc::new(FakeGateway::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let controller = controller(gateway.clone(), navigator.clone());

    fill_valid(&controller);
    assert!(controller.errors().is_empty());

    let redirect = match controller.submit().await {
        SubmitResult::Succeeded { partner, redirect } => {
            assert_eq!(partner.submission.company, "Test Company");
            redirect
        }
        other => panic!("expected success, got {:?}", other),
    };

    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].pay_later);
    assert!(!calls[0].pay_now);

    assert_eq!(controller.outcome(), SubmissionOutcome::Succeeded);
    assert!(!controller.is_submitting());
    assert_eq!(redirect.target(), "/list");

    // Grace period not over yet
    tokio::time::advance(Duration::from_secs(2)).await;
    tokio::task::yield_now().await;
    assert!(navigator.visited().is_empty());

    assert!(redirect.wait().await);
    assert_eq!(navigator.visited(), vec!["/list".to_string()]);
}

#[tokio::test]
async fn test_empty_submission_never_reaches_gateway() {
    let gateway = Arc::new(FakeGateway::default());
    let controller = controller(gateway.clone(), Arc::new(RecordingNavigator::default()));

    let errors = match controller.submit().await {
        SubmitResult::Invalid(errors) => errors,
        other => panic!("expected validation errors, got {:?}", other),
    };

    for key in [
        ErrorKey::Field(Field::Name),
        ErrorKey::Field(Field::Company),
        ErrorKey::Field(Field::MobilePhone),
        ErrorKey::Field(Field::EmailAddress),
        ErrorKey::Field(Field::Postcode),
        ErrorKey::Services,
    ] {
        assert!(errors.contains_key(&key), "missing error for {}", key);
    }

    assert_eq!(controller.errors(), errors);
    assert!(gateway.calls().is_empty());
    assert!(!controller.is_submitting());
    assert_eq!(controller.outcome(), SubmissionOutcome::NotSubmitted);
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_ignored() {
    let gate = Arc::new(Notify::new());
    let gateway = Arc::new(FakeGateway::gated(gate.clone()));
    let controller = controller(gateway.clone(), Arc::new(RecordingNavigator::default()));
    fill_valid(&controller);

    let (first, second, ()) = tokio::join!(controller.submit(), controller.submit(), async {
        gate.notify_one();
    });

    assert!(matches!(first, SubmitResult::Succeeded { .. }));
    assert!(matches!(second, SubmitResult::AlreadySubmitting));
    assert_eq!(gateway.calls().len(), 1);
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_gateway_failure_allows_resubmit() {
    let gateway = Arc::new(FakeGateway::default());
    gateway.fail.store(true, Ordering::SeqCst);
    let controller = controller(gateway.clone(), Arc::new(RecordingNavigator::default()));
    fill_valid(&controller);

    assert!(matches!(controller.submit().await, SubmitResult::Failed(_)));
    assert_eq!(controller.error(ErrorKey::Form).as_deref(), Some(FORM_ERROR));
    assert_eq!(controller.outcome(), SubmissionOutcome::NotSubmitted);
    assert!(!controller.is_submitting());

    gateway.fail.store(false, Ordering::SeqCst);
    assert!(matches!(controller.submit().await, SubmitResult::Succeeded { .. }));
    assert_eq!(controller.error(ErrorKey::Form), None);
    assert_eq!(gateway.calls().len(), 2);
}

#[tokio::test]
async fn test_services_error_follows_checkboxes() {
    let controller = controller(
        Arc::new(FakeGateway::default()),
        Arc::new(RecordingNavigator::default()),
    );

    // No pass yet: toggling does not report anything
    controller.on_field_change(Field::PayLater, true).unwrap();
    controller.on_field_change(Field::PayLater, false).unwrap();
    assert_eq!(controller.error(ErrorKey::Services), None);

    controller.on_field_blur(Field::PayNow, false).unwrap();
    assert_eq!(
        controller.error(ErrorKey::Services).as_deref(),
        Some("At least one service must be selected")
    );

    // Flipping one box clears it without touching other fields
    controller.on_field_change(Field::PayNow, true).unwrap();
    assert_eq!(controller.error(ErrorKey::Services), None);
    assert!(controller.error(Field::Name).is_none());

    controller.on_field_change(Field::PayNow, false).unwrap();
    assert!(controller.error(ErrorKey::Services).is_some());
}

#[tokio::test]
async fn test_text_fields_validate_on_change() {
    let controller = controller(
        Arc::new(FakeGateway::default()),
        Arc::new(RecordingNavigator::default()),
    );

    controller.on_field_change(Field::MobilePhone, "12345").unwrap();
    assert_eq!(
        controller.error(Field::MobilePhone).as_deref(),
        Some("Mobile number must start with 07")
    );

    controller.on_field_change(Field::MobilePhone, "07123456789").unwrap();
    assert_eq!(controller.error(Field::MobilePhone), None);
    assert!(controller.snapshot().is_valid_field(Field::MobilePhone));

    controller.on_field_change(Field::EmailAddress, "invalid-email").unwrap();
    assert!(controller.error(Field::EmailAddress).is_some());
    assert!(!controller.snapshot().is_valid_field(Field::EmailAddress));

    // Wrong shape is refused and leaves the state alone
    assert!(controller.on_field_change(Field::PayNow, "yes").is_err());
    assert!(!controller.snapshot().values().pay_now);
}

#[tokio::test]
async fn test_postcode_suggestions() {
    let controller = controller(
        Arc::new(FakeGateway::default()),
        Arc::new(RecordingNavigator::default()),
    );

    controller.on_field_change(Field::Postcode, "n").unwrap();
    assert!(controller.postcode_suggestions().is_empty());

    controller.on_field_change(Field::Postcode, "n6").unwrap();
    let suggestions = controller.postcode_suggestions();
    assert_eq!(suggestions.len(), 5);
    assert!(suggestions.iter().all(|p| p.to_lowercase().starts_with("n6")));
    assert!(controller.snapshot().shows_postcode_suggestions());

    controller.on_field_blur(Field::Postcode, "n6").unwrap();
    assert!(!controller.snapshot().shows_postcode_suggestions());

    controller.select_postcode("N6 2CD");
    let state = controller.snapshot();
    assert_eq!(state.values().postcode, "N6 2CD");
    assert!(state.postcode_suggestions().is_empty());
    assert!(state.is_valid_field(Field::Postcode));
}

#[tokio::test(start_paused = true)]
async fn test_redirect_is_dropped_after_dispose() {
    let navigator = Arc::new(RecordingNavigator::default());
    let controller = controller(Arc::new(FakeGateway::default()), navigator.clone());
    fill_valid(&controller);

    let SubmitResult::Succeeded { redirect, .. } = controller.submit().await else {
        panic!("expected success");
    };

    controller.dispose();
    assert!(!redirect.wait().await);
    assert!(navigator.visited().is_empty());

    assert!(matches!(controller.submit().await, SubmitResult::Disposed));
}

#[tokio::test(start_paused = true)]
async fn test_redirect_is_dropped_with_controller() {
    let navigator = Arc::new(RecordingNavigator::default());
    let controller = controller(Arc::new(FakeGateway::default()), navigator.clone());
    fill_valid(&controller);

    let SubmitResult::Succeeded { redirect, .. } = controller.submit().await else {
        panic!("expected success");
    };

    drop(controller);
    assert!(!redirect.wait().await);
    assert!(navigator.visited().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_resubmit_after_success_sends_nothing() {
    let gateway = Arc::new(FakeGateway::default());
    let controller = controller(gateway.clone(), Arc::new(RecordingNavigator::default()));
    fill_valid(&controller);

    assert!(matches!(controller.submit().await, SubmitResult::Succeeded { .. }));
    assert!(matches!(controller.submit().await, SubmitResult::AlreadySubmitted));

    assert_eq!(gateway.calls().len(), 1);
    assert_eq!(controller.outcome(), SubmissionOutcome::Succeeded);
    assert!(!controller.is_submitting());
}
