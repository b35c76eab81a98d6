//! Mutable booking form state and field addressing.

use super::ParseBookingFieldError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named input of the booking form.
///
/// Variants are declared in form order; the derived ordering is used when
/// field errors are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingField {
    /// Customer name.
    Name,
    /// Customer email address.
    Email,
    /// Customer phone number.
    Phone,
    /// Requested service title.
    Service,
    /// Vehicle category.
    VehicleType,
    /// Vehicle make and model.
    VehicleModel,
    /// Preferred appointment date.
    PreferredDate,
    /// Preferred appointment time slot.
    PreferredTime,
    /// Optional free-text message.
    Message,
}

impl BookingField {
    /// Every field in form order.
    pub const ALL: [Self; 9] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Service,
        Self::VehicleType,
        Self::VehicleModel,
        Self::PreferredDate,
        Self::PreferredTime,
        Self::Message,
    ];

    /// Returns the input name used by the booking page.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Service => "service",
            Self::VehicleType => "vehicleType",
            Self::VehicleModel => "vehicleModel",
            Self::PreferredDate => "preferredDate",
            Self::PreferredTime => "preferredTime",
            Self::Message => "message",
        }
    }

    /// Returns `true` when an empty value is acceptable for the field.
    #[must_use]
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::Message)
    }
}

impl TryFrom<&str> for BookingField {
    type Error = ParseBookingFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().replace('_', "").to_ascii_lowercase();
        match normalized.as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "service" => Ok(Self::Service),
            "vehicletype" => Ok(Self::VehicleType),
            "vehiclemodel" => Ok(Self::VehicleModel),
            "preferreddate" => Ok(Self::PreferredDate),
            "preferredtime" => Ok(Self::PreferredTime),
            "message" => Ok(Self::Message),
            _ => Err(ParseBookingFieldError(value.to_owned())),
        }
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw appointment request as typed into the booking form.
///
/// Values are kept exactly as entered; trimming and normalisation happen
/// during validation. [`BookingRequest::default`] is the empty form.
///
/// # Examples
///
/// ```
/// use autoexpert::booking::domain::{BookingField, BookingRequest};
///
/// let request = BookingRequest::default()
///     .with(BookingField::Name, "Ion Popescu")
///     .with(BookingField::VehicleType, "SUV");
/// assert_eq!(request.name(), "Ion Popescu");
/// assert_eq!(request.get(BookingField::VehicleType), "SUV");
/// assert!(request.message().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRequest {
    name: String,
    email: String,
    phone: String,
    service: String,
    vehicle_type: String,
    vehicle_model: String,
    preferred_date: String,
    preferred_time: String,
    message: String,
}

impl BookingRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field and returns the updated request.
    #[must_use]
    pub fn with(mut self, field: BookingField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Replaces the value of a field.
    pub fn set(&mut self, field: BookingField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Returns the raw value of a field.
    #[must_use]
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Email => &self.email,
            BookingField::Phone => &self.phone,
            BookingField::Service => &self.service,
            BookingField::VehicleType => &self.vehicle_type,
            BookingField::VehicleModel => &self.vehicle_model,
            BookingField::PreferredDate => &self.preferred_date,
            BookingField::PreferredTime => &self.preferred_time,
            BookingField::Message => &self.message,
        }
    }

    /// Returns `true` when every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        BookingField::ALL
            .iter()
            .all(|field| self.get(*field).is_empty())
    }

    /// Clears every field back to the initial form state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns the customer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the customer email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the customer phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the requested service title.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Returns the vehicle type label.
    #[must_use]
    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    /// Returns the vehicle model.
    #[must_use]
    pub fn vehicle_model(&self) -> &str {
        &self.vehicle_model
    }

    /// Returns the preferred date as entered.
    #[must_use]
    pub fn preferred_date(&self) -> &str {
        &self.preferred_date
    }

    /// Returns the preferred time as entered.
    #[must_use]
    pub fn preferred_time(&self) -> &str {
        &self.preferred_time
    }

    /// Returns the free-text message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    const fn slot_mut(&mut self, field: BookingField) -> &mut String {
        match field {
            BookingField::Name => &mut self.name,
            BookingField::Email => &mut self.email,
            BookingField::Phone => &mut self.phone,
            BookingField::Service => &mut self.service,
            BookingField::VehicleType => &mut self.vehicle_type,
            BookingField::VehicleModel => &mut self.vehicle_model,
            BookingField::PreferredDate => &mut self.preferred_date,
            BookingField::PreferredTime => &mut self.preferred_time,
            BookingField::Message => &mut self.message,
        }
    }
}
