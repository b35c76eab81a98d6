//! Booking form state and submission workflow.
//!
//! `BookingForm` owns the mutable side of the booking page: the request being
//! edited, the inline errors and the submission status. Validation and
//! composition stay pure; the form only sequences them and the hand-off.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::booking::{
    domain::{
        BookingField, BookingRequest, BookingWindow, FieldErrors, ParseBookingFieldError,
        SubmissionId, SubmissionStatus,
    },
    ports::{
        handoff::{HandoffError, HandoffReceipt, SubmissionHandoff},
        validator::BookingValidator,
    },
    services::composer::{ComposeError, SubmissionComposer},
};
use crate::site::ContactInfo;

/// Tunables for the submission workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSettings {
    /// Longest time a hand-off may take before it counts as failed.
    pub handoff_timeout: Duration,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            handoff_timeout: Duration::from_secs(30),
        }
    }
}

/// Result of a submission attempt that did not fail in the hand-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The request failed validation; the errors are also kept on the form.
    Rejected(FieldErrors),
    /// The request was composed and handed off; the form has been reset.
    Delivered(HandoffReceipt),
}

/// Failures of a submission after the request was found valid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The message could not be composed.
    #[error(transparent)]
    Compose(#[from] ComposeError),
    /// The hand-off channel failed.
    #[error(transparent)]
    Handoff(#[from] HandoffError),
}

/// Mutable booking form bound to a validator and a hand-off channel.
///
/// `submit` borrows the form mutably for the whole attempt, so one form
/// instance never has two submissions in flight. Dropping the `submit`
/// future cancels the hand-off and leaves the request untouched.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use autoexpert::booking::adapters::MailtoHandoff;
/// use autoexpert::booking::domain::{BookingField, SubmissionStatus};
/// use autoexpert::booking::services::{BookingForm, SubmissionOutcome};
/// use autoexpert::booking::validation::DefaultBookingValidator;
/// use autoexpert::site::SiteConfig;
/// use mockable::DefaultClock;
///
/// # #[tokio::main]
/// # async fn main() {
/// let site = SiteConfig::bundled().expect("bundled site data");
/// let mut form = BookingForm::new(
///     Arc::new(DefaultBookingValidator::new(DefaultClock)),
///     Arc::new(MailtoHandoff::new()),
///     site.contact().clone(),
/// );
/// form.set_field(BookingField::Name, "A");
/// let outcome = form.submit().await.expect("validation failures are not errors");
/// assert!(matches!(outcome, SubmissionOutcome::Rejected(_)));
/// assert!(form.errors().contains(BookingField::Name));
/// assert_eq!(form.status(), SubmissionStatus::Idle);
/// # }
/// ```
pub struct BookingForm<V, H>
where
    V: BookingValidator,
    H: SubmissionHandoff,
{
    validator: Arc<V>,
    handoff: Arc<H>,
    composer: SubmissionComposer,
    contact: ContactInfo,
    settings: FormSettings,
    request: BookingRequest,
    errors: FieldErrors,
    status: SubmissionStatus,
}

impl<V, H> BookingForm<V, H>
where
    V: BookingValidator,
    H: SubmissionHandoff,
{
    /// Creates an empty form with the default composer and settings.
    #[must_use]
    pub fn new(validator: Arc<V>, handoff: Arc<H>, contact: ContactInfo) -> Self {
        Self {
            validator,
            handoff,
            composer: SubmissionComposer::new(),
            contact,
            settings: FormSettings::default(),
            request: BookingRequest::default(),
            errors: FieldErrors::new(),
            status: SubmissionStatus::Idle,
        }
    }

    /// Replaces the composer.
    #[must_use]
    pub fn with_composer(mut self, composer: SubmissionComposer) -> Self {
        self.composer = composer;
        self
    }

    /// Replaces the workflow settings.
    #[must_use]
    pub const fn with_settings(mut self, settings: FormSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the request being edited.
    #[must_use]
    pub const fn request(&self) -> &BookingRequest {
        &self.request
    }

    /// Returns the inline errors from the last submission attempt.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns the status of the last submission attempt.
    #[must_use]
    pub const fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Returns the dates the date input should offer.
    #[must_use]
    pub fn booking_window(&self) -> BookingWindow {
        self.validator.booking_window()
    }

    /// Updates a field and clears its inline error.
    pub fn set_field(&mut self, field: BookingField, value: impl Into<String>) {
        self.request.set(field, value);
        self.errors.remove(field);
    }

    /// Updates a field addressed by its input name.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBookingFieldError`] when the name is not a form field.
    pub fn set_named_field(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), ParseBookingFieldError> {
        let field = BookingField::try_from(name)?;
        self.set_field(field, value);
        Ok(())
    }

    /// Clears the request, the errors and the status.
    pub fn reset(&mut self) {
        self.request.clear();
        self.errors.clear();
        self.status = SubmissionStatus::Idle;
    }

    /// Validates, composes and hands off the current request.
    ///
    /// Validation failures are an expected outcome, reported as
    /// [`SubmissionOutcome::Rejected`] without touching the status. On a
    /// successful hand-off the form is reset and the status becomes
    /// `Success`; on a failed one the request is kept for a retry and the
    /// status becomes `Error`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] when composition or the hand-off fails,
    /// including a hand-off exceeding [`FormSettings::handoff_timeout`].
    pub async fn submit(&mut self) -> Result<SubmissionOutcome, SubmitError> {
        let booking = match self.validator.validate(&self.request) {
            Ok(booking) => booking,
            Err(errors) => {
                debug!(fields = ?errors.fields(), "booking request failed validation");
                self.errors = errors.clone();
                return Ok(SubmissionOutcome::Rejected(errors));
            }
        };
        self.errors.clear();
        self.status = SubmissionStatus::Idle;

        let message = match self.composer.compose(&booking, &self.contact) {
            Ok(message) => message,
            Err(error) => {
                warn!(%error, "failed to compose booking message");
                self.status = SubmissionStatus::Error;
                return Err(error.into());
            }
        };

        let submission_id = SubmissionId::new();
        let delivery = tokio::time::timeout(
            self.settings.handoff_timeout,
            self.handoff.hand_off(submission_id, &message),
        )
        .await
        .unwrap_or(Err(HandoffError::TimedOut));

        match delivery {
            Ok(receipt) => {
                info!(
                    %submission_id,
                    channel = %receipt.channel,
                    service = booking.service(),
                    "booking request handed off"
                );
                self.request.clear();
                self.status = SubmissionStatus::Success;
                Ok(SubmissionOutcome::Delivered(receipt))
            }
            Err(error) => {
                warn!(%submission_id, %error, "booking hand-off failed");
                self.status = SubmissionStatus::Error;
                Err(error.into())
            }
        }
    }
}

// Note: Unit tests for BookingForm are located in
// src/booking/tests/form_tests.rs.
