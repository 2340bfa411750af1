//! This module implements `DateTimeUnit`, the calendar-agnostic date
//! representation of the period engine.

use crate::options::Weekday;

/// A single calendar date with an optional time of day.
///
/// The year, month and day fields are expressed in the owning calendar
/// system's own reckoning (month and day are 1-based); `is_iso8601`
/// records which family of calendar produced the value. The type performs
/// no normalization of its own: whichever component constructs a
/// `DateTimeUnit` is responsible for the fields being valid for the
/// calendar and year at hand.
///
/// Equality considers the date fields and the calendar flag only. The
/// derived `day_of_week` and the time-of-day fields are carried for
/// callers but do not distinguish instances.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy)]
pub struct DateTimeUnit {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
    /// The day of week of this date, when the producing component has
    /// derived it.
    pub day_of_week: Option<Weekday>,
    /// Whether this date belongs to an ISO-8601 calendar.
    pub is_iso8601: bool,
}

impl DateTimeUnit {
    /// Creates a new `DateTimeUnit` at midnight.
    #[inline]
    #[must_use]
    pub const fn date(year: i32, month: u8, day: u8, is_iso8601: bool) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
            day_of_week: None,
            is_iso8601,
        }
    }

    /// Creates a new `DateTimeUnit` with a time of day.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    #[must_use]
    pub const fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
        is_iso8601: bool,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
            day_of_week: None,
            is_iso8601,
        }
    }

    /// Returns this value with the derived day of week attached.
    #[inline]
    #[must_use]
    pub const fn with_day_of_week(mut self, day_of_week: Weekday) -> Self {
        self.day_of_week = Some(day_of_week);
        self
    }
}

impl PartialEq for DateTimeUnit {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year
            && self.month == other.month
            && self.day == other.day
            && self.is_iso8601 == other.is_iso8601
    }
}

impl Eq for DateTimeUnit {}
