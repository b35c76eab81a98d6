//! Autoexpert: booking intake core for the Auto Expert Group website.
//!
//! This crate validates appointment requests submitted through the booking
//! page and composes the outbound message that is handed to the business,
//! currently through a `mailto:` link.
//!
//! # Architecture
//!
//! Autoexpert follows hexagonal architecture principles:
//!
//! - **Domain**: Pure booking types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for validation and hand-off
//! - **Adapters**: Concrete hand-off implementations (mailto, in-memory)
//!
//! # Modules
//!
//! - [`booking`]: Booking request validation, composition and submission
//! - [`site`]: Static site data (services catalog, contact details)

pub mod booking;
pub mod site;
