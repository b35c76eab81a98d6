//! Behavioural tests for booking form submission.

use std::sync::Arc;

use autoexpert::booking::{
    adapters::InMemoryOutbox,
    domain::BookingField,
    ports::{handoff::HandoffError, validator::BookingValidator},
    services::{BookingForm, SubmissionOutcome, SubmitError},
    validation::DefaultBookingValidator,
};
use autoexpert::site::SiteConfig;
use eyre::{Result, ensure, eyre};
use mockable::DefaultClock;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

type TestForm = BookingForm<DefaultBookingValidator<DefaultClock>, InMemoryOutbox>;

#[derive(Default)]
struct BookingWorld {
    form: Option<TestForm>,
    outbox: InMemoryOutbox,
    last_result: Option<Result<SubmissionOutcome, SubmitError>>,
}

impl BookingWorld {
    fn form(&mut self) -> Result<&mut TestForm> {
        self.form
            .as_mut()
            .ok_or_else(|| eyre!("booking form has not been created"))
    }
}

#[fixture]
fn world() -> BookingWorld {
    BookingWorld::default()
}

/// Runs an async operation within sync step definitions.
fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

#[given("a booking form delivering to an outbox")]
fn booking_form(world: &mut BookingWorld) -> Result<()> {
    let site = SiteConfig::bundled()?;
    world.form = Some(BookingForm::new(
        Arc::new(DefaultBookingValidator::new(DefaultClock)),
        Arc::new(world.outbox.clone()),
        site.contact().clone(),
    ));
    Ok(())
}

#[given("the outbox is unavailable")]
fn outbox_unavailable(world: &mut BookingWorld) {
    world
        .outbox
        .fail_with(HandoffError::unavailable("mail client not configured"));
}

#[given(r#"the visitor fills in a complete request for "{service}""#)]
fn complete_request(world: &mut BookingWorld, service: String) -> Result<()> {
    let form = world.form()?;
    let date = form.booking_window().earliest().to_string();
    form.set_field(BookingField::Name, "Maria Ionescu");
    form.set_field(BookingField::Email, "maria@example.ro");
    form.set_field(BookingField::Phone, "0735 538 668");
    form.set_field(BookingField::Service, service);
    form.set_field(BookingField::VehicleType, "Autoturism");
    form.set_field(BookingField::VehicleModel, "Skoda Octavia");
    form.set_field(BookingField::PreferredDate, date);
    form.set_field(BookingField::PreferredTime, "11:00");
    Ok(())
}

#[given(r#"the visitor enters "{value}" as "{field}""#)]
fn enter_value(world: &mut BookingWorld, value: String, field: String) -> Result<()> {
    world.form()?.set_named_field(&field, value)?;
    Ok(())
}

#[when(r#"the visitor corrects "{field}" to "{value}""#)]
fn correct_value(world: &mut BookingWorld, field: String, value: String) -> Result<()> {
    enter_value(world, value, field)
}

#[when("the visitor submits the form")]
fn submit_form(world: &mut BookingWorld) -> Result<()> {
    let result = run_async(world.form()?.submit());
    world.last_result = Some(result);
    Ok(())
}

#[when("the outbox recovers")]
fn outbox_recovers(world: &mut BookingWorld) {
    world.outbox.recover();
}

#[then(r#"the submission status is "{status}""#)]
fn submission_status(world: &mut BookingWorld, status: String) -> Result<()> {
    let actual = world.form()?.status();
    ensure!(
        actual.as_str() == status,
        "expected status {status}, found {}",
        actual.as_str()
    );
    Ok(())
}

#[then(r#"the outbox holds a message whose subject contains "{text}""#)]
fn outbox_subject(world: &BookingWorld, text: String) -> Result<()> {
    let delivered = world.outbox.delivered();
    ensure!(delivered.len() == 1, "expected one delivered message");
    ensure!(
        delivered.iter().any(|message| message.subject.contains(&text)),
        "no delivered subject contains {text}"
    );
    Ok(())
}

#[then("the form is empty")]
fn form_is_empty(world: &mut BookingWorld) -> Result<()> {
    ensure!(world.form()?.request().is_empty(), "form was not reset");
    Ok(())
}

#[then(r"{count:usize} fields are reported as invalid")]
fn invalid_field_count(world: &mut BookingWorld, count: usize) -> Result<()> {
    let actual = world.form()?.errors().len();
    ensure!(actual == count, "expected {count} invalid fields, found {actual}");
    Ok(())
}

#[then("the message field is not reported")]
fn message_not_reported(world: &mut BookingWorld) -> Result<()> {
    ensure!(
        !world.form()?.errors().contains(BookingField::Message),
        "message field should be optional"
    );
    Ok(())
}

#[then(r#"only the "{field}" field is reported as invalid"#)]
fn only_field_invalid(world: &mut BookingWorld, field: String) -> Result<()> {
    let expected = BookingField::try_from(field.as_str())?;
    let fields = world.form()?.errors().fields();
    ensure!(
        fields == vec![expected],
        "expected only {expected} to be invalid, found {fields:?}"
    );
    Ok(())
}

#[then("no field is reported as invalid")]
fn no_field_invalid(world: &mut BookingWorld) -> Result<()> {
    ensure!(world.form()?.errors().is_empty(), "errors remain");
    Ok(())
}

#[then("the form still holds the request")]
fn form_keeps_request(world: &mut BookingWorld) -> Result<()> {
    ensure!(
        matches!(world.last_result, Some(Err(SubmitError::Handoff(_)))),
        "last submission did not fail in hand-off"
    );
    let form = world.form()?;
    ensure!(
        form.request().name() == "Maria Ionescu",
        "request was cleared after a failed hand-off"
    );
    ensure!(
        form.booking_window().contains(
            form.request()
                .preferred_date()
                .parse::<chrono::NaiveDate>()
                .map_err(|err| eyre!("stored date is not ISO: {err}"))?
        ),
        "stored date left the booking window"
    );
    Ok(())
}

#[scenario(
    path = "tests/features/booking_submission.feature",
    name = "Complete request is handed off and the form is reset"
)]
#[tokio::test(flavor = "multi_thread")]
async fn complete_request_is_delivered(world: BookingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/booking_submission.feature",
    name = "Empty request reports every required field"
)]
#[tokio::test(flavor = "multi_thread")]
async fn empty_request_is_rejected(world: BookingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/booking_submission.feature",
    name = "Editing a field clears its inline error"
)]
#[tokio::test(flavor = "multi_thread")]
async fn editing_clears_error(world: BookingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/booking_submission.feature",
    name = "Failing hand-off keeps the request for a retry"
)]
#[tokio::test(flavor = "multi_thread")]
async fn failing_hand_off_allows_retry(world: BookingWorld) {
    let _ = world;
}

#[test]
fn validator_window_matches_form_window() {
    let validator = DefaultBookingValidator::new(DefaultClock);
    let window = validator.booking_window();
    assert!(window.earliest() < window.latest());
}
