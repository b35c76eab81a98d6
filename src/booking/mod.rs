//! Booking request intake for the appointment page.
//!
//! # Architecture
//!
//! - **Domain**: [`domain::BookingRequest`], [`domain::ValidatedBooking`],
//!   [`domain::FieldErrors`], [`domain::OutboundMessage`], closed sets such as
//!   [`domain::VehicleType`] and [`domain::TimeSlot`]
//! - **Ports**: [`ports::validator::BookingValidator`] and
//!   [`ports::handoff::SubmissionHandoff`]
//! - **Validation**: per-field rules and [`validation::DefaultBookingValidator`]
//! - **Services**: [`services::SubmissionComposer`] and the form state machine
//!   [`services::BookingForm`]
//! - **Adapters**: [`adapters::MailtoHandoff`], [`adapters::InMemoryOutbox`],
//!   [`adapters::DelayedHandoff`]
//!
//! # Example
//!
//! ```
//! use autoexpert::booking::domain::{BookingField, BookingRequest};
//! use autoexpert::booking::ports::validator::BookingValidator;
//! use autoexpert::booking::validation::DefaultBookingValidator;
//! use mockable::DefaultClock;
//!
//! let validator = DefaultBookingValidator::new(DefaultClock);
//! let errors = validator
//!     .validate(&BookingRequest::default())
//!     .expect_err("an empty request is invalid");
//! assert!(errors.contains(BookingField::Name));
//! assert!(!errors.contains(BookingField::Message));
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
