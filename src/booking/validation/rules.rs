//! Individual validation rule implementations.
//!
//! Each rule is a pure function over one raw form value. Rules return the
//! normalised value on success or the [`FieldError`] to show next to the
//! input.

use crate::booking::domain::{BookingField, BookingWindow, FieldError, TimeSlot, VehicleType};
use crate::site::ServiceCatalog;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

#[expect(clippy::expect_used, reason = "pattern is a valid literal")]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[expect(clippy::expect_used, reason = "pattern is a valid literal")]
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+40|0)[0-9]{9}$").expect("phone pattern compiles"));

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns `true` when the value looks like `local@domain.tld`.
///
/// # Examples
///
/// ```
/// use autoexpert::booking::validation::rules::is_valid_email;
///
/// assert!(is_valid_email("user@domain.com"));
/// assert!(!is_valid_email("user@domain"));
/// assert!(!is_valid_email("user domain.com"));
/// ```
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Removes every whitespace character from a phone number.
#[must_use]
pub fn normalize_phone(value: &str) -> String {
    value.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Returns `true` when the value is a Romanian number once whitespace is
/// removed: `+40` or `0` followed by exactly nine digits.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(&normalize_phone(value))
}

/// Validates the customer name.
///
/// # Errors
///
/// Returns [`FieldError::Required`] when blank and
/// [`FieldError::NameTooShort`] below `min_chars` characters.
pub fn validate_name(raw: &str, min_chars: usize) -> Result<String, FieldError> {
    let name = required(raw, BookingField::Name)?;
    if name.chars().count() < min_chars {
        return Err(FieldError::NameTooShort { min: min_chars });
    }
    Ok(name.to_owned())
}

/// Validates the customer email.
///
/// # Errors
///
/// Returns [`FieldError::Required`] when blank and
/// [`FieldError::InvalidEmail`] when the pattern does not match.
pub fn validate_email(raw: &str) -> Result<String, FieldError> {
    let email = required(raw, BookingField::Email)?;
    if !is_valid_email(raw) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(email.to_owned())
}

/// Validates the phone number, returning it without whitespace.
///
/// # Errors
///
/// Returns [`FieldError::Required`] when blank and
/// [`FieldError::InvalidPhone`] for non-Romanian numbers.
pub fn validate_phone(raw: &str) -> Result<String, FieldError> {
    required(raw, BookingField::Phone)?;
    let phone = normalize_phone(raw);
    if !PHONE_PATTERN.is_match(&phone) {
        return Err(FieldError::InvalidPhone);
    }
    Ok(phone)
}

/// Validates the requested service.
///
/// When `catalog` is given, the trimmed value must equal one of its titles.
///
/// # Errors
///
/// Returns [`FieldError::Required`] when blank and
/// [`FieldError::UnknownService`] when the catalog lacks the title.
pub fn validate_service(raw: &str, catalog: Option<&ServiceCatalog>) -> Result<String, FieldError> {
    let service = required(raw, BookingField::Service)?;
    if let Some(known) = catalog
        && !known.contains_title(service)
    {
        return Err(FieldError::UnknownService(service.to_owned()));
    }
    Ok(service.to_owned())
}

/// Validates the vehicle type against the offered set.
///
/// # Errors
///
/// Returns [`FieldError::Required`] when blank and
/// [`FieldError::UnknownVehicleType`] for labels outside the set.
pub fn validate_vehicle_type(raw: &str) -> Result<VehicleType, FieldError> {
    let label = required(raw, BookingField::VehicleType)?;
    VehicleType::try_from(label)
}

/// Validates the vehicle model.
///
/// # Errors
///
/// Returns [`FieldError::Required`] when blank.
pub fn validate_vehicle_model(raw: &str) -> Result<String, FieldError> {
    required(raw, BookingField::VehicleModel).map(str::to_owned)
}

/// Validates the preferred date against the bookable window.
///
/// # Errors
///
/// Returns [`FieldError::Required`] when blank, [`FieldError::InvalidDate`]
/// when the value is not `YYYY-MM-DD`, and [`FieldError::DateOutsideWindow`]
/// when the date cannot be booked.
pub fn validate_preferred_date(raw: &str, window: &BookingWindow) -> Result<NaiveDate, FieldError> {
    let value = required(raw, BookingField::PreferredDate)?;
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| FieldError::InvalidDate(value.to_owned()))?;
    if !window.contains(date) {
        return Err(FieldError::DateOutsideWindow {
            earliest: window.earliest(),
            latest: window.latest(),
        });
    }
    Ok(date)
}

/// Validates the preferred time slot.
///
/// # Errors
///
/// Returns [`FieldError::Required`] when blank and
/// [`FieldError::InvalidTimeSlot`] for times outside the offered slots.
pub fn validate_preferred_time(raw: &str) -> Result<TimeSlot, FieldError> {
    let label = required(raw, BookingField::PreferredTime)?;
    TimeSlot::try_from(label)
}

/// Validates the optional message.
///
/// A blank message is valid and yields `None`.
///
/// # Errors
///
/// Returns [`FieldError::MessageTooShort`] for a non-blank message shorter
/// than `min_chars` characters.
pub fn validate_message(raw: &str, min_chars: usize) -> Result<Option<String>, FieldError> {
    let message = raw.trim();
    if message.is_empty() {
        return Ok(None);
    }
    if message.chars().count() < min_chars {
        return Err(FieldError::MessageTooShort { min: min_chars });
    }
    Ok(Some(message.to_owned()))
}

fn required(raw: &str, field: BookingField) -> Result<&str, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required(field));
    }
    Ok(trimmed)
}
