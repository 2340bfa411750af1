//! The `CalendarProvider` trait and the system calendar setting.
//!
//! The surrounding platform persists which calendar and date format a
//! deployment reports in. The parser itself never consults global state;
//! callers hold a provider and pass `provider.system_calendar()` to
//! [`crate::PeriodParser::parse`] when no calendar is given explicitly.

use core::str::FromStr;

use crate::{components::calendar::Calendar, options::DateFormat, PeriodResult};

/// Supplies the calendar the system is currently configured with.
pub trait CalendarProvider {
    /// Returns the configured system calendar.
    fn system_calendar(&self) -> Calendar;
}

/// A provider resolved from the persisted system setting pair of calendar
/// identifier and date format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemCalendarProvider {
    calendar: Calendar,
    date_format: DateFormat,
}

impl SystemCalendarProvider {
    /// Creates a provider from a calendar and date format.
    #[must_use]
    pub const fn new(calendar: Calendar, date_format: DateFormat) -> Self {
        Self {
            calendar,
            date_format,
        }
    }

    /// Resolves the provider from a persisted setting pair.
    pub fn from_setting(calendar_key: &str, date_format: DateFormat) -> PeriodResult<Self> {
        Ok(Self {
            calendar: Calendar::from_str(calendar_key)?,
            date_format,
        })
    }

    /// Returns the configured date format.
    #[inline]
    #[must_use]
    pub const fn date_format(&self) -> DateFormat {
        self.date_format
    }
}

impl Default for SystemCalendarProvider {
    fn default() -> Self {
        Self::new(Calendar::default(), DateFormat::default())
    }
}

impl CalendarProvider for SystemCalendarProvider {
    fn system_calendar(&self) -> Calendar {
        self.calendar.clone()
    }
}
