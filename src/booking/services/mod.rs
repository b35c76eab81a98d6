//! Service layer for booking composition and submission.

pub mod composer;
pub mod form;

pub use composer::{ComposeError, ComposerTemplates, SubmissionComposer};
pub use form::{BookingForm, FormSettings, SubmissionOutcome, SubmitError};
