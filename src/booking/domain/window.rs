//! Bookable date range relative to the current day.

use chrono::{Days, FixedOffset, NaiveDate};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Inclusive range of dates a customer may request.
///
/// The window starts `lead_days` after today (appointments are never for the
/// current day) and ends `horizon_days` after today.
///
/// # Examples
///
/// ```
/// use autoexpert::booking::domain::BookingWindow;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date");
/// let window = BookingWindow::from_today(today, 1, 30);
/// assert_eq!(window.earliest(), NaiveDate::from_ymd_opt(2025, 3, 11).expect("valid date"));
/// assert_eq!(window.latest(), NaiveDate::from_ymd_opt(2025, 4, 9).expect("valid date"));
/// assert!(!window.contains(today));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    earliest: NaiveDate,
    latest: NaiveDate,
}

impl BookingWindow {
    /// Builds the window for a given calendar day.
    #[must_use]
    pub fn from_today(today: NaiveDate, lead_days: u32, horizon_days: u32) -> Self {
        let offset = |days: u32| {
            today
                .checked_add_days(Days::new(u64::from(days)))
                .unwrap_or(NaiveDate::MAX)
        };
        Self {
            earliest: offset(lead_days),
            latest: offset(horizon_days),
        }
    }

    /// Builds the window for the current day in the given calendar offset.
    #[must_use]
    pub fn current(
        clock: &impl Clock,
        calendar_offset: FixedOffset,
        lead_days: u32,
        horizon_days: u32,
    ) -> Self {
        let today = clock.utc().with_timezone(&calendar_offset).date_naive();
        Self::from_today(today, lead_days, horizon_days)
    }

    /// Returns the first bookable day.
    #[must_use]
    pub const fn earliest(&self) -> NaiveDate {
        self.earliest
    }

    /// Returns the last bookable day.
    #[must_use]
    pub const fn latest(&self) -> NaiveDate {
        self.latest
    }

    /// Returns `true` when the date lies inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.earliest <= date && date <= self.latest
    }
}
