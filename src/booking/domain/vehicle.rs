//! Vehicle categories offered by the booking form.

use super::FieldError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of vehicle categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    /// Passenger car.
    Autoturism,
    /// Sport utility vehicle.
    #[serde(rename = "SUV")]
    Suv,
    /// Pickup truck.
    Pickup,
    /// Van.
    Van,
    /// Minibus.
    Microbuz,
    /// Anything else.
    Altul,
}

impl VehicleType {
    /// Every vehicle type in the order the form lists them.
    pub const ALL: [Self; 6] = [
        Self::Autoturism,
        Self::Suv,
        Self::Pickup,
        Self::Van,
        Self::Microbuz,
        Self::Altul,
    ];

    /// Returns the label shown in the form and in composed messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Autoturism => "Autoturism",
            Self::Suv => "SUV",
            Self::Pickup => "Pickup",
            Self::Van => "Van",
            Self::Microbuz => "Microbuz",
            Self::Altul => "Altul",
        }
    }
}

impl TryFrom<&str> for VehicleType {
    type Error = FieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| FieldError::UnknownVehicleType(value.to_owned()))
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
