//! Composition of the outbound booking message.

use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

use crate::booking::domain::{OutboundMessage, ValidatedBooking};
use crate::site::ContactInfo;

const DEFAULT_SUBJECT_TEMPLATE: &str = "Programare - {{ service }}";

const DEFAULT_BODY_TEMPLATE: &str = "Programare nouă:

Nume: {{ name }}
Email: {{ email }}
Telefon: {{ phone }}
Serviciu: {{ service }}
Vehicul: {{ vehicle_type }} - {{ vehicle_model }}
Data preferată: {{ preferred_date }}
Ora preferată: {{ preferred_time }}
Mesaj: {{ message or \"Fără mesaj suplimentar\" }}";

/// Errors raised while composing a message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComposeError {
    /// A template failed to render.
    #[error("failed to render {part} template: {reason}")]
    TemplateRender {
        /// Which part of the message was being rendered.
        part: &'static str,
        /// Renderer diagnostic.
        reason: String,
    },
}

/// Templates used for the subject and the body.
///
/// Both are `minijinja` templates rendered against the fields `name`,
/// `email`, `phone`, `service`, `vehicle_type`, `vehicle_model`,
/// `preferred_date`, `preferred_time`, `message` (none when blank) and
/// `recipient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerTemplates {
    /// Subject line template.
    pub subject: String,
    /// Body template.
    pub body: String,
}

impl Default for ComposerTemplates {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT_TEMPLATE.to_owned(),
            body: DEFAULT_BODY_TEMPLATE.to_owned(),
        }
    }
}

#[derive(Serialize)]
struct ComposeContext<'a> {
    recipient: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    service: &'a str,
    vehicle_type: &'static str,
    vehicle_model: &'a str,
    preferred_date: String,
    preferred_time: String,
    message: Option<&'a str>,
}

impl<'a> ComposeContext<'a> {
    fn new(booking: &'a ValidatedBooking, contact: &'a ContactInfo) -> Self {
        Self {
            recipient: &contact.email,
            name: booking.name(),
            email: booking.email(),
            phone: booking.phone(),
            service: booking.service(),
            vehicle_type: booking.vehicle_type().as_str(),
            vehicle_model: booking.vehicle_model(),
            preferred_date: booking.preferred_date().format("%Y-%m-%d").to_string(),
            preferred_time: booking.preferred_time().label(),
            message: booking.message(),
        }
    }
}

/// Builds the message describing an appointment request.
///
/// Composition performs no I/O; delivering the result is the job of a
/// [`SubmissionHandoff`](crate::booking::ports::handoff::SubmissionHandoff).
#[derive(Debug, Clone, Default)]
pub struct SubmissionComposer {
    templates: ComposerTemplates,
}

impl SubmissionComposer {
    /// Creates a composer with the default Romanian templates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a composer with custom templates.
    #[must_use]
    pub const fn with_templates(templates: ComposerTemplates) -> Self {
        Self { templates }
    }

    /// Returns the templates in use.
    #[must_use]
    pub const fn templates(&self) -> &ComposerTemplates {
        &self.templates
    }

    /// Composes the outbound message for a validated booking.
    ///
    /// The recipient is the business email; the subject names the service;
    /// the body lists every field on its own line in form order.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::TemplateRender`] when a custom template is
    /// malformed. The default templates always render.
    pub fn compose(
        &self,
        booking: &ValidatedBooking,
        contact: &ContactInfo,
    ) -> Result<OutboundMessage, ComposeError> {
        let environment = Environment::new();
        let context = ComposeContext::new(booking, contact);
        let subject = render(&environment, "subject", &self.templates.subject, &context)?;
        let body = render(&environment, "body", &self.templates.body, &context)?;
        Ok(OutboundMessage::new(contact.email.clone(), subject, body))
    }
}

fn render(
    environment: &Environment<'_>,
    part: &'static str,
    template: &str,
    context: &ComposeContext<'_>,
) -> Result<String, ComposeError> {
    environment
        .render_str(template, context)
        .map_err(|error| ComposeError::TemplateRender {
            part,
            reason: error.to_string(),
        })
}

// Note: Unit tests for SubmissionComposer are located in
// src/booking/tests/composer_tests.rs.
