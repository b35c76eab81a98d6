//! Booking validation implementation.
//!
//! This module provides the per-field validation rules and the composite
//! validator service implementing the [`BookingValidator`] port.
//!
//! [`BookingValidator`]: crate::booking::ports::validator::BookingValidator

pub mod rules;
pub mod service;

pub use service::DefaultBookingValidator;
