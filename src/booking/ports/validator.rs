//! Validator port for booking requests.
//!
//! Defines the abstract interface for validating a booking form submission
//! together with the configuration its rules read.

use crate::booking::domain::{BookingRequest, BookingWindow, FieldErrors, ValidatedBooking};
use chrono::{FixedOffset, Offset, Utc};

/// Result type for booking validation.
pub type ValidationResult<T> = Result<T, FieldErrors>;

/// Port for booking request validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Evaluate every field rule before returning (not fail-fast)
/// - Return `Err` only with a non-empty [`FieldErrors`]
/// - Be free of side effects, so validating twice yields the same result
pub trait BookingValidator: Send + Sync {
    /// Validates every field of a request.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] holding one entry per failing field.
    fn validate(&self, request: &BookingRequest) -> ValidationResult<ValidatedBooking>;

    /// Returns the dates currently accepted for `preferredDate`.
    ///
    /// The form uses this as the min/max of its date input.
    fn booking_window(&self) -> BookingWindow;
}

/// How the `service` field is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ServicePolicy {
    /// Any non-empty value is accepted.
    #[default]
    NonEmpty,
    /// The value must equal the title of a catalog service.
    Catalog,
}

/// Configuration for booking validation rules.
///
/// # Examples
///
/// ```
/// use autoexpert::booking::ports::validator::{BookingValidationConfig, ServicePolicy};
///
/// let config = BookingValidationConfig::default();
/// assert_eq!(config.min_name_chars, 2);
/// assert_eq!(config.horizon_days, 30);
///
/// let strict = BookingValidationConfig::strict();
/// assert_eq!(strict.service_policy, ServicePolicy::Catalog);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingValidationConfig {
    /// Minimum trimmed length of the name, in characters.
    pub min_name_chars: usize,
    /// Minimum trimmed length of a non-empty message, in characters.
    pub min_message_chars: usize,
    /// Days between today and the first bookable date.
    pub lead_days: u32,
    /// Days between today and the last bookable date.
    pub horizon_days: u32,
    /// Offset used to decide which calendar day "today" is.
    pub calendar_offset: FixedOffset,
    /// How the requested service is checked.
    pub service_policy: ServicePolicy,
}

impl Default for BookingValidationConfig {
    fn default() -> Self {
        Self {
            min_name_chars: 2,
            min_message_chars: 10,
            lead_days: 1,
            horizon_days: 30,
            calendar_offset: Utc.fix(),
            service_policy: ServicePolicy::NonEmpty,
        }
    }
}

impl BookingValidationConfig {
    /// Creates a configuration that only accepts catalog services.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            service_policy: ServicePolicy::Catalog,
            ..Self::default()
        }
    }

    /// Creates a configuration with a widened booking horizon.
    ///
    /// Useful for seasonal campaigns when tyre changes are booked well ahead.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            horizon_days: 90,
            ..Self::default()
        }
    }

    /// Sets the calendar offset used to determine today.
    #[must_use]
    pub const fn with_calendar_offset(mut self, offset: FixedOffset) -> Self {
        self.calendar_offset = offset;
        self
    }
}
