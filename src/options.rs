//! Native implementation of the engine's option values.
//!
//! The option types are small closed enums used to configure period
//! computation: the day a reporting week starts on, and the date format
//! persisted alongside the system calendar setting.

use core::fmt;
use core::str::FromStr;

/// A day of the week, numbered the ISO-8601 way: Monday is `1` and
/// Sunday is `7`.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Weekday {
    #[default]
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Returns the ISO-8601 number of this weekday.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }
}

/// A parsing error for [`Weekday`].
#[derive(Debug, Clone, Copy)]
pub struct ParseWeekdayError;

impl fmt::Display for ParseWeekdayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid weekday value")
    }
}

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            _ => Err(ParseWeekdayError),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
        .fmt(f)
    }
}

/// The date formats a deployment can persist next to its calendar
/// setting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `yyyy-MM-dd`
    #[default]
    YearMonthDay,
    /// `dd-MM-yyyy`
    DayMonthYear,
}

/// A parsing error for [`DateFormat`].
#[derive(Debug, Clone, Copy)]
pub struct ParseDateFormatError;

impl fmt::Display for ParseDateFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid date format value")
    }
}

impl FromStr for DateFormat {
    type Err = ParseDateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yyyy-MM-dd" => Ok(Self::YearMonthDay),
            "dd-MM-yyyy" => Ok(Self::DayMonthYear),
            _ => Err(ParseDateFormatError),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YearMonthDay => "yyyy-MM-dd",
            Self::DayMonthYear => "dd-MM-yyyy",
        }
        .fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::{DateFormat, Weekday};

    #[test]
    fn weekday_numbers_are_iso() {
        assert_eq!(Weekday::Monday.number(), 1);
        assert_eq!(Weekday::Thursday.number(), 4);
        assert_eq!(Weekday::Sunday.number(), 7);
    }

    #[test]
    fn weekday_from_str_round_trip() {
        for day in [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ] {
            assert_eq!(Weekday::from_str(&day.to_string()).unwrap(), day);
        }
        assert!(Weekday::from_str("Monday").is_err());
    }

    #[test]
    fn date_format_from_str() {
        assert_eq!(
            DateFormat::from_str("yyyy-MM-dd").unwrap(),
            DateFormat::YearMonthDay
        );
        assert_eq!(
            DateFormat::from_str("dd-MM-yyyy").unwrap(),
            DateFormat::DayMonthYear
        );
        assert!(DateFormat::from_str("MM-dd-yyyy").is_err());
    }
}
