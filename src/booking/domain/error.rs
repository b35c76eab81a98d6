//! Field-scoped validation errors for the booking form.
//!
//! Messages are rendered in Romanian, the language of the booking page, so a
//! caller can show them inline next to the offending input.

use super::BookingField;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

/// A validation failure scoped to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required field is empty.
    #[error("{}", required_message(.0))]
    Required(BookingField),

    /// The name is shorter than the configured minimum.
    #[error("Numele trebuie să aibă cel puțin {min} caractere")]
    NameTooShort {
        /// Minimum number of characters.
        min: usize,
    },

    /// The email does not look like `local@domain.tld`.
    #[error("Email-ul nu este valid")]
    InvalidEmail,

    /// The phone number is not a Romanian number.
    #[error("Telefonul nu este valid (ex: 0767062912)")]
    InvalidPhone,

    /// The service is not offered by the catalog.
    #[error("Serviciul '{0}' nu este disponibil")]
    UnknownService(String),

    /// The vehicle type is outside the offered set.
    #[error("Tipul vehiculului '{0}' nu este valid")]
    UnknownVehicleType(String),

    /// The date is not an ISO calendar date.
    #[error("Data '{0}' nu este validă")]
    InvalidDate(String),

    /// The date falls outside the bookable window.
    #[error("Data trebuie să fie între {earliest} și {latest}")]
    DateOutsideWindow {
        /// First bookable day.
        earliest: NaiveDate,
        /// Last bookable day.
        latest: NaiveDate,
    },

    /// The time is not one of the offered slots.
    #[error("Ora '{0}' nu este disponibilă")]
    InvalidTimeSlot(String),

    /// The optional message is present but too short.
    #[error("Mesajul trebuie să aibă cel puțin {min} caractere")]
    MessageTooShort {
        /// Minimum number of characters.
        min: usize,
    },
}

const fn required_message(field: &BookingField) -> &'static str {
    match field {
        BookingField::Name => "Numele este obligatoriu",
        BookingField::Email => "Email-ul este obligatoriu",
        BookingField::Phone => "Telefonul este obligatoriu",
        BookingField::Service => "Selectează un serviciu",
        BookingField::VehicleType => "Selectează tipul vehiculului",
        BookingField::VehicleModel => "Modelul vehiculului este obligatoriu",
        BookingField::PreferredDate => "Selectează data preferată",
        BookingField::PreferredTime => "Selectează ora preferată",
        BookingField::Message => "Mesajul este obligatoriu",
    }
}

/// Mapping from form field to its validation failure.
///
/// A field absent from the map passed validation. The validator only returns
/// this type when at least one field failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("invalid booking request: {}", format_errors(.0))]
pub struct FieldErrors(BTreeMap<BookingField, FieldError>);

fn format_errors(errors: &BTreeMap<BookingField, FieldError>) -> String {
    errors
        .iter()
        .map(|(field, error)| format!("{field}: {error}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl FieldErrors {
    /// Creates an empty error map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records an error for a field, replacing any previous one.
    pub fn insert(&mut self, field: BookingField, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Records the error of a rule outcome, if any.
    pub fn record<T>(&mut self, field: BookingField, outcome: Result<T, FieldError>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(error) => {
                self.insert(field, error);
                None
            }
        }
    }

    /// Removes the error of a field, returning it.
    pub fn remove(&mut self, field: BookingField) -> Option<FieldError> {
        self.0.remove(&field)
    }

    /// Returns the error of a field.
    #[must_use]
    pub fn get(&self, field: BookingField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Returns `true` when the field has an error.
    #[must_use]
    pub fn contains(&self, field: BookingField) -> bool {
        self.0.contains_key(&field)
    }

    /// Returns the number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates failing fields and their errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (BookingField, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// Returns the failing fields in form order.
    #[must_use]
    pub fn fields(&self) -> Vec<BookingField> {
        self.0.keys().copied().collect()
    }

    /// Renders the errors keyed by input name, ready for inline display.
    #[must_use]
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.0
            .iter()
            .map(|(field, error)| (field.as_str(), error.to_string()))
            .collect()
    }

    /// Drops every recorded error.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Error returned when a form input name is not a booking field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown booking field: {0}")]
pub struct ParseBookingFieldError(pub String);
