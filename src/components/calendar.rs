//! This module implements the calendar capability of the period engine.
//!
//! A [`Calendar`] provides the primitive date operations the period parser
//! is built on: month and week structure lookups, weekday derivation, and
//! day/week/month/year arithmetic, all closed over valid dates of the
//! underlying calendar system. The ISO-8601 calendar is the default;
//! non-ISO civil calendars are backed by `icu_calendar`.

use core::str::FromStr;

use icu_calendar::{
    buddhist::Buddhist,
    coptic::Coptic,
    ethiopian::{Ethiopian, EthiopianEraStyle},
    indian::Indian,
    islamic::{IslamicCivil, IslamicTabular},
    persian::Persian,
    roc::Roc,
    types::IsoWeekday,
    week::WeekCalculator,
    AnyCalendar, AnyCalendarKind, Date as IcuDate, Gregorian, Iso, Ref,
};

use crate::{
    components::date_time_unit::DateTimeUnit, error::PeriodError, options::Weekday, utils,
    PeriodResult,
};

/// A handle onto one of the process-wide calendar instances.
///
/// Instances are created once per supported calendar system and shared for
/// the lifetime of the process; cloning a `Calendar` copies a reference.
/// All operations are read-only, so a `Calendar` may be used freely from
/// multiple threads.
#[derive(Debug, Clone)]
pub struct Calendar(Ref<'static, AnyCalendar>);

impl Default for Calendar {
    fn default() -> Self {
        Self(Ref(&AnyCalendar::Iso(Iso)))
    }
}

impl PartialEq for Calendar {
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier()
    }
}

impl Eq for Calendar {}

impl Calendar {
    /// Returns the calendar for a supported `AnyCalendarKind`.
    ///
    /// Period codes address months by ordinal number, which is ambiguous in
    /// lunisolar systems with floating leap months; those kinds are
    /// rejected here rather than producing shifting intervals.
    pub fn new(kind: AnyCalendarKind) -> PeriodResult<Self> {
        let calendar: &'static AnyCalendar = match kind {
            AnyCalendarKind::Buddhist => &AnyCalendar::Buddhist(Buddhist),
            AnyCalendarKind::Coptic => &AnyCalendar::Coptic(Coptic),
            AnyCalendarKind::Ethiopian => {
                const {
                    &AnyCalendar::Ethiopian(Ethiopian::new_with_era_style(
                        EthiopianEraStyle::AmeteMihret,
                    ))
                }
            }
            AnyCalendarKind::EthiopianAmeteAlem => {
                const {
                    &AnyCalendar::Ethiopian(Ethiopian::new_with_era_style(
                        EthiopianEraStyle::AmeteAlem,
                    ))
                }
            }
            AnyCalendarKind::Gregorian => &AnyCalendar::Gregorian(Gregorian),
            AnyCalendarKind::Indian => &AnyCalendar::Indian(Indian),
            AnyCalendarKind::IslamicCivil => &AnyCalendar::IslamicCivil(IslamicCivil),
            AnyCalendarKind::IslamicTabular => &AnyCalendar::IslamicTabular(IslamicTabular),
            AnyCalendarKind::Iso => &AnyCalendar::Iso(Iso),
            AnyCalendarKind::Persian => &AnyCalendar::Persian(Persian),
            AnyCalendarKind::Roc => &AnyCalendar::Roc(Roc),
            _ => {
                return Err(PeriodError::range()
                    .with_message("calendar is not supported for period computation."))
            }
        };
        Ok(Self(Ref(calendar)))
    }

    /// Returns a `Calendar` from a slice of UTF-8 encoded bytes.
    pub fn from_utf8(bytes: &[u8]) -> PeriodResult<Self> {
        // NOTE: Catch the iso identifier here, as `iso8601` is not a valid
        // BCP-47 id below.
        if bytes.to_ascii_lowercase() == "iso8601".as_bytes() {
            return Ok(Self::default());
        }

        let Some(kind) = AnyCalendarKind::get_for_bcp47_bytes(&bytes.to_ascii_lowercase()) else {
            return Err(PeriodError::range().with_message("Not a builtin calendar."));
        };

        Self::new(kind)
    }

    /// Returns whether the current calendar is ISO-8601.
    #[inline]
    #[must_use]
    pub fn is_iso8601(&self) -> bool {
        matches!(self.0 .0, AnyCalendar::Iso(_))
    }

    /// Returns the identifier of this calendar.
    #[must_use]
    pub fn identifier(&self) -> &'static str {
        if self.is_iso8601() {
            return "iso8601";
        }
        self.0 .0.kind().as_bcp47_string()
    }

    /// Returns the number of months of the given year.
    pub fn months_in_year(&self, year: i32) -> PeriodResult<u8> {
        let date = self.to_icu_date(&DateTimeUnit::date(year, 1, 1, self.is_iso8601()))?;
        Ok(date.months_in_year())
    }

    /// Returns the number of days of the given month.
    pub fn days_in_month(&self, year: i32, month: u8) -> PeriodResult<u8> {
        let date = self.to_icu_date(&DateTimeUnit::date(year, month, 1, self.is_iso8601()))?;
        Ok(date.days_in_month())
    }

    /// Returns the number of reporting weeks of the given year.
    ///
    /// The date three days before the last day of a year always lies in the
    /// year's final week, so its week number is the week count. For the ISO
    /// calendar this is the classic December 28 rule.
    pub fn weeks_in_year(&self, year: i32) -> PeriodResult<u16> {
        let months = self.months_in_year(year)?;
        let last_day = self.days_in_month(year, months)?;
        let last = DateTimeUnit::date(year, months, last_day, self.is_iso8601());
        let pivot = self.minus_days(&last, 3)?;
        self.iso_week(&pivot)
    }

    /// Returns the day of week of a date.
    pub fn weekday(&self, date: &DateTimeUnit) -> PeriodResult<Weekday> {
        Ok(weekday_from_icu(self.to_icu_date(date)?.day_of_week()))
    }

    /// Returns the week number of a date.
    ///
    /// For ISO-8601 calendars this is the ISO week number. Non-ISO systems
    /// cannot rely on the ISO week machinery of the host platform; the same
    /// ordering rule (weeks start on Monday, a week belongs to the year
    /// containing its fourth day) is evaluated inside the calendar's own
    /// year structure using this type's primitives only.
    pub fn iso_week(&self, date: &DateTimeUnit) -> PeriodResult<u16> {
        if self.is_iso8601() {
            let iso = self.to_icu_date(date)?.to_iso();
            let week_calculator = WeekCalculator::default();
            let week_of = iso
                .week_of_year(&week_calculator)
                .map_err(|err| PeriodError::range().with_message(err.to_string()))?;
            return Ok(week_of.week);
        }

        let week_start = self.start_of_week(date, Weekday::Monday)?;
        let anchor = self.plus_days(&week_start, 3)?;
        let day_of_year = i32::from(self.day_of_year(&anchor)?);
        Ok(((day_of_year - 1) / 7 + 1) as u16)
    }

    /// Returns the date moved back to the given first day of its week.
    pub fn start_of_week(&self, date: &DateTimeUnit, first_day: Weekday) -> PeriodResult<DateTimeUnit> {
        let weekday = self.weekday(date)?;
        let offset = (i32::from(weekday.number()) - i32::from(first_day.number())).rem_euclid(7);
        self.minus_days(date, offset)
    }

    /// Adds a number of days to a date.
    pub fn plus_days(&self, date: &DateTimeUnit, days: i32) -> PeriodResult<DateTimeUnit> {
        let iso = self.to_icu_date(date)?.to_iso();
        let epoch_days = utils::iso_date_to_epoch_days(
            iso.year().number,
            iso.month().ordinal as u8,
            iso.day_of_month().0 as u8,
        ) + i64::from(days);
        let (year, month, day) = utils::epoch_days_to_iso_date(epoch_days);
        let iso = IcuDate::try_new_iso_date(year, month, day)
            .map_err(|err| PeriodError::range().with_message(err.to_string()))?;
        Ok(self.from_iso_date(iso))
    }

    /// Subtracts a number of days from a date.
    pub fn minus_days(&self, date: &DateTimeUnit, days: i32) -> PeriodResult<DateTimeUnit> {
        self.plus_days(date, -days)
    }

    /// Adds a number of weeks to a date.
    pub fn plus_weeks(&self, date: &DateTimeUnit, weeks: i32) -> PeriodResult<DateTimeUnit> {
        self.plus_days(date, weeks * 7)
    }

    /// Adds a number of months to a date, carrying across year boundaries
    /// in the calendar's own month structure and clamping the day of month.
    pub fn plus_months(&self, date: &DateTimeUnit, months: i32) -> PeriodResult<DateTimeUnit> {
        let mut year = date.year;
        let mut month = i32::from(date.month) + months;
        while month > i32::from(self.months_in_year(year)?) {
            month -= i32::from(self.months_in_year(year)?);
            year += 1;
        }
        while month < 1 {
            year -= 1;
            month += i32::from(self.months_in_year(year)?);
        }
        let day = date.day.min(self.days_in_month(year, month as u8)?);
        Ok(DateTimeUnit::date(year, month as u8, day, self.is_iso8601()))
    }

    /// Adds a number of years to a date, clamping month and day where the
    /// target year is shorter.
    pub fn plus_years(&self, date: &DateTimeUnit, years: i32) -> PeriodResult<DateTimeUnit> {
        let year = date.year + years;
        let month = date.month.min(self.months_in_year(year)?);
        let day = date.day.min(self.days_in_month(year, month)?);
        Ok(DateTimeUnit::date(year, month, day, self.is_iso8601()))
    }

    fn day_of_year(&self, date: &DateTimeUnit) -> PeriodResult<u16> {
        Ok(self.to_icu_date(date)?.day_of_year_info().day_of_year)
    }

    fn to_icu_date(&self, date: &DateTimeUnit) -> PeriodResult<IcuDate<AnyCalendar>> {
        let (year, month, day) = (date.year, date.month, date.day);
        let result = match self.0 .0.kind() {
            AnyCalendarKind::Buddhist => {
                IcuDate::try_new_buddhist_date(year, month, day).map(|d| d.to_any())
            }
            AnyCalendarKind::Coptic => {
                IcuDate::try_new_coptic_date(year, month, day).map(|d| d.to_any())
            }
            AnyCalendarKind::Ethiopian => {
                IcuDate::try_new_ethiopian_date(EthiopianEraStyle::AmeteMihret, year, month, day)
                    .map(|d| d.to_any())
            }
            AnyCalendarKind::EthiopianAmeteAlem => {
                IcuDate::try_new_ethiopian_date(EthiopianEraStyle::AmeteAlem, year, month, day)
                    .map(|d| d.to_any())
            }
            AnyCalendarKind::Gregorian => {
                IcuDate::try_new_gregorian_date(year, month, day).map(|d| d.to_any())
            }
            AnyCalendarKind::Indian => {
                IcuDate::try_new_indian_date(year, month, day).map(|d| d.to_any())
            }
            AnyCalendarKind::IslamicCivil => {
                IcuDate::try_new_islamic_civil_date_with_calendar(year, month, day, IslamicCivil)
                    .map(|d| d.to_any())
            }
            AnyCalendarKind::IslamicTabular => {
                IcuDate::try_new_islamic_tabular_date_with_calendar(year, month, day, IslamicTabular)
                    .map(|d| d.to_any())
            }
            AnyCalendarKind::Iso => IcuDate::try_new_iso_date(year, month, day).map(|d| d.to_any()),
            AnyCalendarKind::Persian => {
                IcuDate::try_new_persian_date(year, month, day).map(|d| d.to_any())
            }
            AnyCalendarKind::Roc => IcuDate::try_new_roc_date(year, month, day).map(|d| d.to_any()),
            _ => {
                return Err(PeriodError::range()
                    .with_message("calendar is not supported for period computation."))
            }
        };
        result.map_err(|err| PeriodError::range().with_message(err.to_string()))
    }

    fn from_iso_date(&self, iso: IcuDate<Iso>) -> DateTimeUnit {
        if self.is_iso8601() {
            return DateTimeUnit::date(
                iso.year().number,
                iso.month().ordinal as u8,
                iso.day_of_month().0 as u8,
                true,
            );
        }
        let date = IcuDate::new_from_iso(iso, self.0);
        DateTimeUnit::date(
            date.year().number,
            date.month().ordinal as u8,
            date.day_of_month().0 as u8,
            false,
        )
    }
}

impl FromStr for Calendar {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_utf8(s.as_bytes())
    }
}

fn weekday_from_icu(day: IsoWeekday) -> Weekday {
    match day {
        IsoWeekday::Monday => Weekday::Monday,
        IsoWeekday::Tuesday => Weekday::Tuesday,
        IsoWeekday::Wednesday => Weekday::Wednesday,
        IsoWeekday::Thursday => Weekday::Thursday,
        IsoWeekday::Friday => Weekday::Friday,
        IsoWeekday::Saturday => Weekday::Saturday,
        IsoWeekday::Sunday => Weekday::Sunday,
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::Calendar;
    use crate::{components::date_time_unit::DateTimeUnit, options::Weekday};

    #[test]
    fn calendar_from_str_is_case_insensitive() {
        let calendar = Calendar::from_utf8("iSo8601".as_bytes()).unwrap();
        assert_eq!(calendar, Calendar::default());

        let calendar = Calendar::from_utf8("EthiOpic".as_bytes()).unwrap();
        assert_eq!(calendar.identifier(), "ethiopic");
    }

    #[test]
    fn unknown_and_unsupported_calendars_error() {
        assert!(Calendar::from_str("julian-revised").is_err());
        // Lunisolar systems are rejected for period computation.
        assert!(Calendar::from_str("hebrew").is_err());
        assert!(Calendar::from_str("chinese").is_err());
    }

    #[test]
    fn iso_weekdays() {
        let iso = Calendar::default();
        let saturday = DateTimeUnit::date(2014, 1, 4, true);
        assert_eq!(iso.weekday(&saturday).unwrap(), Weekday::Saturday);
        let wednesday = DateTimeUnit::date(2014, 1, 1, true);
        assert_eq!(iso.weekday(&wednesday).unwrap(), Weekday::Wednesday);
        let sunday = DateTimeUnit::date(2014, 12, 28, true);
        assert_eq!(iso.weekday(&sunday).unwrap(), Weekday::Sunday);
    }

    #[test]
    fn iso_month_lengths() {
        let iso = Calendar::default();
        assert_eq!(iso.months_in_year(2014).unwrap(), 12);
        assert_eq!(iso.days_in_month(2020, 2).unwrap(), 29);
        assert_eq!(iso.days_in_month(2019, 2).unwrap(), 28);
        assert_eq!(iso.days_in_month(2014, 12).unwrap(), 31);
    }

    #[test]
    fn iso_week_numbers() {
        let iso = Calendar::default();
        assert_eq!(
            iso.iso_week(&DateTimeUnit::date(2014, 12, 28, true)).unwrap(),
            52
        );
        // 2014-12-29 belongs to week 1 of 2015.
        assert_eq!(
            iso.iso_week(&DateTimeUnit::date(2014, 12, 29, true)).unwrap(),
            1
        );
        assert_eq!(
            iso.iso_week(&DateTimeUnit::date(2014, 3, 17, true)).unwrap(),
            12
        );
    }

    #[test]
    fn iso_weeks_in_year() {
        let iso = Calendar::default();
        assert_eq!(iso.weeks_in_year(2014).unwrap(), 52);
        assert_eq!(iso.weeks_in_year(2015).unwrap(), 53);
        assert_eq!(iso.weeks_in_year(2020).unwrap(), 53);
    }

    #[test]
    fn day_arithmetic_crosses_year_boundaries() {
        let iso = Calendar::default();
        let first = DateTimeUnit::date(2014, 1, 1, true);
        assert_eq!(
            iso.minus_days(&first, 1).unwrap(),
            DateTimeUnit::date(2013, 12, 31, true)
        );
        assert_eq!(
            iso.plus_days(&DateTimeUnit::date(2020, 2, 28, true), 1).unwrap(),
            DateTimeUnit::date(2020, 2, 29, true)
        );
        assert_eq!(
            iso.plus_weeks(&DateTimeUnit::date(2013, 12, 30, true), 1).unwrap(),
            DateTimeUnit::date(2014, 1, 6, true)
        );
    }

    #[test]
    fn month_arithmetic_carries_and_clamps() {
        let iso = Calendar::default();
        assert_eq!(
            iso.plus_months(&DateTimeUnit::date(2014, 11, 1, true), 3).unwrap(),
            DateTimeUnit::date(2015, 2, 1, true)
        );
        assert_eq!(
            iso.plus_months(&DateTimeUnit::date(2014, 1, 31, true), 1).unwrap(),
            DateTimeUnit::date(2014, 2, 28, true)
        );
        assert_eq!(
            iso.plus_months(&DateTimeUnit::date(2014, 2, 1, true), -2).unwrap(),
            DateTimeUnit::date(2013, 12, 1, true)
        );
        assert_eq!(
            iso.plus_years(&DateTimeUnit::date(2020, 2, 29, true), 1).unwrap(),
            DateTimeUnit::date(2021, 2, 28, true)
        );
    }

    #[test]
    fn ethiopic_year_structure() {
        let ethiopic = Calendar::from_str("ethiopic").unwrap();
        assert!(!ethiopic.is_iso8601());
        assert_eq!(ethiopic.months_in_year(2014).unwrap(), 13);
        // Pagume has six days in leap years, five otherwise.
        assert_eq!(ethiopic.days_in_month(2011, 13).unwrap(), 6);
        assert_eq!(ethiopic.days_in_month(2014, 13).unwrap(), 5);
        assert_eq!(ethiopic.days_in_month(2014, 1).unwrap(), 30);
    }

    #[test]
    fn ethiopic_day_arithmetic_crosses_pagume() {
        let ethiopic = Calendar::from_str("ethiopic").unwrap();
        let new_year = DateTimeUnit::date(2007, 1, 1, false);
        // The day before the 2007 new year is the last day of 2006's
        // thirteenth month.
        assert_eq!(
            ethiopic.minus_days(&new_year, 1).unwrap(),
            DateTimeUnit::date(2006, 13, 5, false)
        );
        // Meskerem 1, 2007 was a Thursday (2014-09-11 Gregorian).
        assert_eq!(ethiopic.weekday(&new_year).unwrap(), Weekday::Thursday);
    }
}
