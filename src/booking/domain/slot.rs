//! Half-hour appointment slots.

use super::FieldError;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const FIRST_HOUR: u32 = 8;
const LAST_HOUR: u32 = 17;
const SLOT_MINUTES: [u32; 2] = [0, 30];
const SLOT_FORMAT: &str = "%H:%M";

/// One of the half-hour slots from 08:00 to 17:30 inclusive.
///
/// Values can only be obtained from [`TimeSlot::all`] or by parsing an exact
/// `HH:MM` label, so every instance belongs to the offered set.
///
/// # Examples
///
/// ```
/// use autoexpert::booking::domain::TimeSlot;
///
/// assert_eq!(TimeSlot::all().count(), 20);
/// assert!(TimeSlot::try_from("09:30").is_ok());
/// assert!(TimeSlot::try_from("09:15").is_err());
/// assert!(TimeSlot::try_from("18:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// Iterates every offered slot in chronological order.
    pub fn all() -> impl Iterator<Item = Self> {
        (FIRST_HOUR..=LAST_HOUR)
            .flat_map(|hour| {
                SLOT_MINUTES
                    .into_iter()
                    .filter_map(move |minute| NaiveTime::from_hms_opt(hour, minute, 0))
            })
            .map(Self)
    }

    /// Returns the slot start time.
    #[must_use]
    pub const fn time(self) -> NaiveTime {
        self.0
    }

    /// Returns the `HH:MM` label of the slot.
    #[must_use]
    pub fn label(self) -> String {
        self.0.format(SLOT_FORMAT).to_string()
    }

    fn is_offered(time: NaiveTime) -> bool {
        (FIRST_HOUR..=LAST_HOUR).contains(&time.hour())
            && SLOT_MINUTES.contains(&time.minute())
            && time.second() == 0
            && time.nanosecond() == 0
    }
}

impl TryFrom<&str> for TimeSlot {
    type Error = FieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        let reject = || FieldError::InvalidTimeSlot(value.to_owned());
        if trimmed.len() != 5 {
            return Err(reject());
        }
        let time = NaiveTime::parse_from_str(trimmed, SLOT_FORMAT).map_err(|_| reject())?;
        if Self::is_offered(time) {
            Ok(Self(time))
        } else {
            Err(reject())
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SLOT_FORMAT))
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::try_from(raw.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn offers_twenty_slots_from_eight_to_half_past_five() {
        let labels: Vec<String> = TimeSlot::all().map(TimeSlot::label).collect();
        assert_eq!(labels.len(), 20);
        assert_eq!(labels.first().map(String::as_str), Some("08:00"));
        assert_eq!(labels.get(1).map(String::as_str), Some("08:30"));
        assert_eq!(labels.last().map(String::as_str), Some("17:30"));
    }

    #[rstest]
    #[case("08:00")]
    #[case("12:30")]
    #[case("17:30")]
    #[case(" 10:00 ")]
    fn accepts_offered_slots(#[case] raw: &str) {
        assert!(TimeSlot::try_from(raw).is_ok());
    }

    #[rstest]
    #[case("07:30")]
    #[case("18:00")]
    #[case("10:15")]
    #[case("8:00")]
    #[case("10:00:00")]
    #[case("noon")]
    #[case("")]
    fn rejects_times_outside_the_set(#[case] raw: &str) {
        assert_eq!(
            TimeSlot::try_from(raw),
            Err(FieldError::InvalidTimeSlot(raw.to_owned()))
        );
    }
}
