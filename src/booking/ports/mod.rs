//! Port definitions for booking intake.
//!
//! Ports define the abstract interfaces the booking core depends on,
//! following hexagonal architecture principles.

pub mod handoff;
pub mod validator;

pub use handoff::{HandoffError, HandoffReceipt, HandoffResult, SubmissionHandoff};
pub use validator::{BookingValidationConfig, BookingValidator, ServicePolicy, ValidationResult};
