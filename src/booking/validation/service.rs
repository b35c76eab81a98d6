//! Validation service implementation.
//!
//! Provides the default implementation of the `BookingValidator` port,
//! combining the individual field rules into one pass over the form.

use crate::booking::{
    domain::{BookingField, BookingRequest, BookingWindow, FieldErrors, ValidatedBooking},
    ports::validator::{BookingValidationConfig, BookingValidator, ServicePolicy, ValidationResult},
    validation::rules,
};
use crate::site::ServiceCatalog;
use mockable::Clock;
use std::sync::Arc;

/// Default implementation of the booking validator.
///
/// Applies every field rule, collecting all failures so the form can show
/// them at once rather than one per submit attempt.
///
/// # Examples
///
/// ```
/// use autoexpert::booking::domain::{BookingField, BookingRequest};
/// use autoexpert::booking::ports::validator::BookingValidator;
/// use autoexpert::booking::validation::DefaultBookingValidator;
/// use mockable::DefaultClock;
///
/// let validator = DefaultBookingValidator::new(DefaultClock);
/// let tomorrow = validator.booking_window().earliest().to_string();
/// let request = BookingRequest::default()
///     .with(BookingField::Name, "Ion Popescu")
///     .with(BookingField::Email, "ion@example.ro")
///     .with(BookingField::Phone, "0735 538 668")
///     .with(BookingField::Service, "Schimb Anvelope")
///     .with(BookingField::VehicleType, "SUV")
///     .with(BookingField::VehicleModel, "Dacia Duster")
///     .with(BookingField::PreferredDate, tomorrow)
///     .with(BookingField::PreferredTime, "09:30");
///
/// let booking = validator.validate(&request).expect("request is complete");
/// assert_eq!(booking.phone(), "0735538668");
/// assert_eq!(booking.message(), None);
/// ```
#[derive(Debug, Clone)]
pub struct DefaultBookingValidator<C>
where
    C: Clock,
{
    config: BookingValidationConfig,
    catalog: Option<Arc<ServiceCatalog>>,
    clock: C,
}

impl<C> DefaultBookingValidator<C>
where
    C: Clock,
{
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::with_config(BookingValidationConfig::default(), clock)
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: BookingValidationConfig, clock: C) -> Self {
        Self {
            config,
            catalog: None,
            clock,
        }
    }

    /// Attaches the services catalog consulted under
    /// [`ServicePolicy::Catalog`].
    ///
    /// Without a catalog the service field is only checked for presence,
    /// whatever the policy.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<ServiceCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &BookingValidationConfig {
        &self.config
    }

    fn known_services(&self) -> Option<&ServiceCatalog> {
        match self.config.service_policy {
            ServicePolicy::NonEmpty => None,
            ServicePolicy::Catalog => self.catalog.as_deref(),
        }
    }
}

impl<C> BookingValidator for DefaultBookingValidator<C>
where
    C: Clock + Send + Sync,
{
    fn validate(&self, request: &BookingRequest) -> ValidationResult<ValidatedBooking> {
        let window = self.booking_window();
        let mut errors = FieldErrors::new();

        let checked_name = errors.record(
            BookingField::Name,
            rules::validate_name(request.name(), self.config.min_name_chars),
        );
        let checked_email =
            errors.record(BookingField::Email, rules::validate_email(request.email()));
        let checked_phone =
            errors.record(BookingField::Phone, rules::validate_phone(request.phone()));
        let checked_service = errors.record(
            BookingField::Service,
            rules::validate_service(request.service(), self.known_services()),
        );
        let checked_vehicle_type = errors.record(
            BookingField::VehicleType,
            rules::validate_vehicle_type(request.vehicle_type()),
        );
        let checked_vehicle_model = errors.record(
            BookingField::VehicleModel,
            rules::validate_vehicle_model(request.vehicle_model()),
        );
        let checked_preferred_date = errors.record(
            BookingField::PreferredDate,
            rules::validate_preferred_date(request.preferred_date(), &window),
        );
        let checked_preferred_time = errors.record(
            BookingField::PreferredTime,
            rules::validate_preferred_time(request.preferred_time()),
        );
        let checked_message = errors.record(
            BookingField::Message,
            rules::validate_message(request.message(), self.config.min_message_chars),
        );

        match (
            checked_name,
            checked_email,
            checked_phone,
            checked_service,
            checked_vehicle_type,
            checked_vehicle_model,
            checked_preferred_date,
            checked_preferred_time,
            checked_message,
        ) {
            (
                Some(name),
                Some(email),
                Some(phone),
                Some(service),
                Some(vehicle_type),
                Some(vehicle_model),
                Some(preferred_date),
                Some(preferred_time),
                Some(message),
            ) if errors.is_empty() => Ok(ValidatedBooking {
                request: request.clone(),
                name,
                email,
                phone,
                service,
                vehicle_type,
                vehicle_model,
                preferred_date,
                preferred_time,
                message,
            }),
            _ => Err(errors),
        }
    }

    fn booking_window(&self) -> BookingWindow {
        BookingWindow::current(
            &self.clock,
            self.config.calendar_offset,
            self.config.lead_days,
            self.config.horizon_days,
        )
    }
}

// Note: Unit tests for DefaultBookingValidator are located in
// src/booking/tests/validation_tests.rs using rstest fixtures.
