//! Domain model for booking intake.
//!
//! The booking domain models the appointment form, the closed sets offered by
//! its selects, the result of validation and the composed outbound message,
//! keeping hand-off mechanisms outside of the domain boundary.

mod error;
mod ids;
mod message;
mod request;
mod slot;
mod status;
mod validated;
mod vehicle;
mod window;

pub use error::{FieldError, FieldErrors, ParseBookingFieldError};
pub use ids::SubmissionId;
pub use message::OutboundMessage;
pub use request::{BookingField, BookingRequest};
pub use slot::TimeSlot;
pub use status::SubmissionStatus;
pub use validated::ValidatedBooking;
pub use vehicle::VehicleType;
pub use window::BookingWindow;
