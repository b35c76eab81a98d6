//! Unit tests for the booking form workflow.

use super::fixtures::{FixedClock, clock, contact, default_validator, valid_request};
use crate::booking::{
    adapters::{DelayedHandoff, InMemoryOutbox},
    domain::{BookingField, BookingRequest, OutboundMessage, SubmissionId, SubmissionStatus},
    ports::handoff::{HandoffError, HandoffReceipt, HandoffResult, SubmissionHandoff},
    services::{BookingForm, FormSettings, SubmissionOutcome, SubmitError},
    validation::DefaultBookingValidator,
};
use crate::site::ContactInfo;
use async_trait::async_trait;
use mockall::mock;
use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;

mock! {
    pub Handoff {}

    #[async_trait]
    impl SubmissionHandoff for Handoff {
        async fn hand_off(
            &self,
            submission_id: SubmissionId,
            message: &OutboundMessage,
        ) -> HandoffResult<HandoffReceipt>;
    }
}

type Validator = DefaultBookingValidator<FixedClock>;

fn form_with<H: SubmissionHandoff>(
    validator: Validator,
    handoff: H,
    contact: ContactInfo,
    request: &BookingRequest,
) -> BookingForm<Validator, H> {
    let mut form = BookingForm::new(Arc::new(validator), Arc::new(handoff), contact);
    for field in BookingField::ALL {
        form.set_field(field, request.get(field));
    }
    form
}

#[rstest]
#[tokio::test]
async fn successful_submission_resets_the_form(
    default_validator: Validator,
    contact: ContactInfo,
    valid_request: BookingRequest,
) {
    let outbox = InMemoryOutbox::new();
    let mut form = form_with(default_validator, outbox.clone(), contact, &valid_request);

    let outcome = form.submit().await.expect("submission succeeds");

    assert!(matches!(outcome, SubmissionOutcome::Delivered(_)));
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert!(form.request().is_empty());
    assert!(form.errors().is_empty());
    let delivered = outbox.delivered();
    assert_eq!(delivered.len(), 1);
    assert!(
        delivered
            .first()
            .is_some_and(|message| message.subject.contains("Schimb Anvelope"))
    );
}

#[rstest]
#[tokio::test]
async fn invalid_request_is_rejected_without_hand_off(
    default_validator: Validator,
    contact: ContactInfo,
    valid_request: BookingRequest,
) {
    let mut handoff = MockHandoff::new();
    handoff.expect_hand_off().never();
    let request = valid_request.with(BookingField::Phone, "123456");
    let mut form = form_with(default_validator, handoff, contact, &request);

    let outcome = form.submit().await.expect("rejection is not an error");

    let SubmissionOutcome::Rejected(errors) = outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(errors.fields(), vec![BookingField::Phone]);
    assert_eq!(form.errors(), &errors);
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.request(), &request);
}

#[rstest]
#[tokio::test]
async fn failed_hand_off_keeps_the_request_for_retry(
    default_validator: Validator,
    contact: ContactInfo,
    valid_request: BookingRequest,
) {
    let outbox = InMemoryOutbox::new();
    outbox.fail_with(HandoffError::unavailable("mail client missing"));
    let mut form = form_with(default_validator, outbox.clone(), contact, &valid_request);

    let result = form.submit().await;

    assert_eq!(
        result,
        Err(SubmitError::Handoff(HandoffError::unavailable(
            "mail client missing"
        )))
    );
    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(form.request(), &valid_request);

    outbox.recover();
    let retried = form.submit().await.expect("retry succeeds");
    assert!(matches!(retried, SubmissionOutcome::Delivered(_)));
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert_eq!(outbox.len(), 1);
}

#[rstest]
#[tokio::test]
async fn hand_off_receives_the_composed_message(
    default_validator: Validator,
    contact: ContactInfo,
    valid_request: BookingRequest,
) {
    let recipient = contact.email.clone();
    let mut handoff = MockHandoff::new();
    handoff
        .expect_hand_off()
        .withf(move |_, message| {
            message.recipient == recipient && message.body.contains("Vehicul: SUV - Dacia Duster")
        })
        .times(1)
        .returning(|id, _| Ok(HandoffReceipt::new(id, "mock").with_reference("ref-1")));
    let mut form = form_with(default_validator, handoff, contact, &valid_request);

    let outcome = form.submit().await.expect("submission succeeds");

    let SubmissionOutcome::Delivered(receipt) = outcome else {
        panic!("expected delivery, got {outcome:?}");
    };
    assert_eq!(receipt.channel, "mock");
    assert_eq!(receipt.reference.as_deref(), Some("ref-1"));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn slow_hand_off_times_out(
    default_validator: Validator,
    contact: ContactInfo,
    valid_request: BookingRequest,
) {
    let outbox = InMemoryOutbox::new();
    let slow = DelayedHandoff::new(outbox.clone(), Duration::from_secs(60));
    let mut form = form_with(default_validator, slow, contact, &valid_request).with_settings(
        FormSettings {
            handoff_timeout: Duration::from_secs(5),
        },
    );

    let result = form.submit().await;

    assert_eq!(result, Err(SubmitError::Handoff(HandoffError::TimedOut)));
    assert_eq!(form.status(), SubmissionStatus::Error);
    assert!(outbox.is_empty());
}

#[rstest]
#[tokio::test]
async fn editing_a_field_clears_only_its_error(clock: FixedClock, contact: ContactInfo) {
    let mut form = BookingForm::new(
        Arc::new(DefaultBookingValidator::new(clock)),
        Arc::new(InMemoryOutbox::new()),
        contact,
    );
    form.submit().await.expect("rejection is not an error");
    assert_eq!(form.errors().len(), 8);

    form.set_field(BookingField::Name, "Ana");

    assert!(!form.errors().contains(BookingField::Name));
    assert!(form.errors().contains(BookingField::Email));
    assert_eq!(form.errors().len(), 7);
}

#[rstest]
fn named_fields_bind_form_inputs(default_validator: Validator, contact: ContactInfo) {
    let mut form = BookingForm::new(
        Arc::new(default_validator),
        Arc::new(InMemoryOutbox::new()),
        contact,
    );

    form.set_named_field("vehicleModel", "Ford Transit")
        .expect("known input");
    form.set_named_field("preferred_time", "08:00")
        .expect("snake case input");

    assert_eq!(form.request().vehicle_model(), "Ford Transit");
    assert_eq!(form.request().preferred_time(), "08:00");
    assert!(form.set_named_field("licensePlate", "B 123 ABC").is_err());
}

#[rstest]
fn reset_returns_to_the_initial_state(
    default_validator: Validator,
    contact: ContactInfo,
    valid_request: BookingRequest,
) {
    let mut form = form_with(
        default_validator,
        InMemoryOutbox::new(),
        contact,
        &valid_request,
    );
    assert!(!form.request().is_empty());

    form.reset();

    assert_eq!(form.request(), &BookingRequest::default());
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.booking_window().earliest().to_string(), "2025-03-11");
}
