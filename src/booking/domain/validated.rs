//! Typed view of a booking request that passed validation.

use super::{BookingRequest, TimeSlot, VehicleType};
use chrono::NaiveDate;
use serde::Serialize;

/// A booking request whose every field satisfied its rule.
///
/// Only the validator constructs this type, so holding one is proof that
/// the request is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedBooking {
    #[serde(skip)]
    pub(crate) request: BookingRequest,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) service: String,
    pub(crate) vehicle_type: VehicleType,
    pub(crate) vehicle_model: String,
    pub(crate) preferred_date: NaiveDate,
    pub(crate) preferred_time: TimeSlot,
    pub(crate) message: Option<String>,
}

impl ValidatedBooking {
    /// Returns the request as it was entered.
    #[must_use]
    pub const fn request(&self) -> &BookingRequest {
        &self.request
    }

    /// Returns the trimmed customer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the trimmed customer email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the phone number with whitespace removed.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the requested service title.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Returns the vehicle category.
    #[must_use]
    pub const fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    /// Returns the trimmed vehicle model.
    #[must_use]
    pub fn vehicle_model(&self) -> &str {
        &self.vehicle_model
    }

    /// Returns the preferred appointment date.
    #[must_use]
    pub const fn preferred_date(&self) -> NaiveDate {
        self.preferred_date
    }

    /// Returns the preferred appointment slot.
    #[must_use]
    pub const fn preferred_time(&self) -> TimeSlot {
        self.preferred_time
    }

    /// Returns the trimmed message, if one was given.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
