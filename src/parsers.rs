//! This module implements period code parsing.
//!
//! [`PeriodParser::parse`] resolves a textual period code against the
//! period type catalog and computes the concrete inclusive date interval
//! for the supplied calendar. A code that matches no catalog pattern, or
//! that carries a numeric field outside its valid range, yields `None`:
//! "not a period code" is an ordinary outcome here, not an error.

use core::str::FromStr;

use regex::Captures;

use crate::{
    components::{
        calendar::Calendar, date_time_unit::DateTimeUnit, interval::DateInterval,
        period_type::PeriodType,
    },
    options::Weekday,
};

/// Parser for period codes.
///
/// The parser is stateless; it is cheap to construct and safe to share
/// across threads. The calendar to compute against is supplied per call,
/// so one parser serves any number of calendar systems.
#[derive(Debug, Default, Clone, Copy)]
pub struct PeriodParser;

impl PeriodParser {
    /// Creates a new `PeriodParser`.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses a period code into the date interval it denotes under the
    /// given calendar, or `None` when the code is not recognized.
    #[must_use]
    pub fn parse(&self, calendar: &Calendar, code: &str) -> Option<DateInterval> {
        let Some((period_type, captures)) = PeriodType::find(code) else {
            #[cfg(feature = "log")]
            log::debug!("period code {code:?} did not match any period type");
            return None;
        };

        let year = capture_int::<i32>(&captures, 1)?;
        match period_type {
            PeriodType::Daily => {
                let month = capture_int(&captures, 2)?;
                let day = capture_int(&captures, 3)?;
                self.daily(calendar, year, month, day)
            }
            PeriodType::Weekly
            | PeriodType::WeeklyWednesday
            | PeriodType::WeeklyThursday
            | PeriodType::WeeklySaturday
            | PeriodType::WeeklySunday => {
                let week = capture_int(&captures, 2)?;
                // The variants carry their own first day of week.
                let week_start = period_type.week_start().unwrap_or_default();
                self.weeks(calendar, year, week, 1, week_start)
            }
            PeriodType::BiWeekly => {
                let bi_week = capture_int::<u16>(&captures, 2)?;
                let week = bi_week.checked_mul(2)?.checked_sub(1)?;
                self.weeks(calendar, year, week, 2, Weekday::Monday)
            }
            PeriodType::Monthly => {
                let month = capture_int(&captures, 2)?;
                self.monthly(calendar, year, month)
            }
            PeriodType::BiMonthly => {
                let month = capture_int::<u8>(&captures, 2)?;
                if !(1..=6).contains(&month) {
                    return None;
                }
                self.month_span(calendar, year, month * 2 - 1, 2)
            }
            PeriodType::Quarterly => {
                let quarter = capture_int::<u8>(&captures, 2)?;
                if !(1..=4).contains(&quarter) {
                    return None;
                }
                self.month_span(calendar, year, (quarter - 1) * 3 + 1, 3)
            }
            PeriodType::QuarterlyNovember => {
                let quarter = capture_int::<u8>(&captures, 2)?;
                if !(1..=4).contains(&quarter) {
                    return None;
                }
                // The November financial quarter grid is the regular
                // quarter grid pulled back two months, wrapping the first
                // quarter into the previous year.
                let mut year = year;
                let mut month = i32::from((quarter - 1) * 3 + 1) - 2;
                if month < 1 {
                    month += 12;
                    year -= 1;
                }
                self.month_span(calendar, year, month as u8, 3)
            }
            PeriodType::SixMonthly => {
                let semester = capture_int::<u8>(&captures, 2)?;
                if !(1..=2).contains(&semester) {
                    return None;
                }
                let month = if semester == 1 { 1 } else { 7 };
                self.month_span(calendar, year, month, 6)
            }
            PeriodType::SixMonthlyApril => {
                let semester = capture_int::<u8>(&captures, 2)?;
                if !(1..=2).contains(&semester) {
                    return None;
                }
                let month = if semester == 1 { 4 } else { 10 };
                self.month_span(calendar, year, month, 6)
            }
            PeriodType::SixMonthlyNovember => {
                let semester = capture_int::<u8>(&captures, 2)?;
                if !(1..=2).contains(&semester) {
                    return None;
                }
                let (year, month) = if semester == 1 { (year - 1, 11) } else { (year, 5) };
                self.month_span(calendar, year, month, 6)
            }
            PeriodType::Yearly => self.yearly(calendar, year),
            PeriodType::FinancialApril => self.financial_year(calendar, year, 4),
            PeriodType::FinancialJuly => self.financial_year(calendar, year, 7),
            PeriodType::FinancialSeptember => self.financial_year(calendar, year, 9),
            PeriodType::FinancialOctober => self.financial_year(calendar, year, 10),
            PeriodType::FinancialNovember => self.financial_year(calendar, year - 1, 11),
        }
    }

    fn daily(&self, calendar: &Calendar, year: i32, month: u8, day: u8) -> Option<DateInterval> {
        if month < 1 || month > calendar.months_in_year(year).ok()? {
            return None;
        }
        if day < 1 || day > calendar.days_in_month(year, month).ok()? {
            return None;
        }
        let start = DateTimeUnit::date(year, month, day, calendar.is_iso8601());
        let start = start.with_day_of_week(calendar.weekday(&start).ok()?);
        Some(DateInterval::new(start, start))
    }

    fn weeks(
        &self,
        calendar: &Calendar,
        year: i32,
        week: u16,
        span_weeks: i32,
        week_start: Weekday,
    ) -> Option<DateInterval> {
        if week < 1 || week > calendar.weeks_in_year(year).ok()? {
            return None;
        }
        let start = self.date_time_from_week(calendar, year, week, week_start)?;
        let end = calendar
            .minus_days(&calendar.plus_weeks(&start, span_weeks).ok()?, 1)
            .ok()?;
        let end = end.with_day_of_week(calendar.weekday(&end).ok()?);
        Some(DateInterval::new(start, end))
    }

    /// Computes the first day of reporting week `week` of `year`.
    ///
    /// ISO-8601 calendars compute the date directly: with a minimum of four
    /// days in the first week, week one is the week containing the fourth
    /// day of January regardless of which day the week starts on. Non-ISO
    /// calendars have no such anchor in the host's week machinery and step
    /// week by week from the year start instead.
    fn date_time_from_week(
        &self,
        calendar: &Calendar,
        year: i32,
        week: u16,
        week_start: Weekday,
    ) -> Option<DateTimeUnit> {
        let start = if calendar.is_iso8601() {
            let fourth = DateTimeUnit::date(year, 1, 4, true);
            let offset = (i32::from(calendar.weekday(&fourth).ok()?.number())
                - i32::from(week_start.number()))
            .rem_euclid(7);
            let week_one = calendar.minus_days(&fourth, offset).ok()?;
            calendar.plus_weeks(&week_one, i32::from(week) - 1).ok()?
        } else {
            let first = DateTimeUnit::date(year, 1, 1, false);
            let mut adjusted = calendar.start_of_week(&first, week_start).ok()?;
            if week_belongs_to_prior_year(calendar, &adjusted, year)? {
                adjusted = calendar.plus_weeks(&adjusted, 1).ok()?;
            }
            calendar.plus_weeks(&adjusted, i32::from(week) - 1).ok()?
        };
        Some(start.with_day_of_week(week_start))
    }

    fn monthly(&self, calendar: &Calendar, year: i32, month: u8) -> Option<DateInterval> {
        if month < 1 || month > calendar.months_in_year(year).ok()? {
            return None;
        }
        let start = DateTimeUnit::date(year, month, 1, calendar.is_iso8601());
        let end = DateTimeUnit::date(
            year,
            month,
            calendar.days_in_month(year, month).ok()?,
            calendar.is_iso8601(),
        );
        Some(DateInterval::new(
            start.with_day_of_week(calendar.weekday(&start).ok()?),
            end.with_day_of_week(calendar.weekday(&end).ok()?),
        ))
    }

    fn month_span(
        &self,
        calendar: &Calendar,
        year: i32,
        month: u8,
        months: i32,
    ) -> Option<DateInterval> {
        let start = DateTimeUnit::date(year, month, 1, calendar.is_iso8601());
        let end = calendar
            .minus_days(&calendar.plus_months(&start, months).ok()?, 1)
            .ok()?;
        Some(DateInterval::new(
            start.with_day_of_week(calendar.weekday(&start).ok()?),
            end.with_day_of_week(calendar.weekday(&end).ok()?),
        ))
    }

    fn yearly(&self, calendar: &Calendar, year: i32) -> Option<DateInterval> {
        let months = calendar.months_in_year(year).ok()?;
        let start = DateTimeUnit::date(year, 1, 1, calendar.is_iso8601());
        let end = DateTimeUnit::date(
            year,
            months,
            calendar.days_in_month(year, months).ok()?,
            calendar.is_iso8601(),
        );
        Some(DateInterval::new(
            start.with_day_of_week(calendar.weekday(&start).ok()?),
            end.with_day_of_week(calendar.weekday(&end).ok()?),
        ))
    }

    fn financial_year(
        &self,
        calendar: &Calendar,
        year: i32,
        start_month: u8,
    ) -> Option<DateInterval> {
        let start = DateTimeUnit::date(year, start_month, 1, calendar.is_iso8601());
        let end = calendar
            .minus_days(&calendar.plus_years(&start, 1).ok()?, 1)
            .ok()?;
        Some(DateInterval::new(
            start.with_day_of_week(calendar.weekday(&start).ok()?),
            end.with_day_of_week(calendar.weekday(&end).ok()?),
        ))
    }
}

/// Detects that rewinding a year's first day to the start of its week
/// rolled into the previous year's final week.
///
/// The adjusted date then carries the prior year's last week number, which
/// means fewer than the minimum four days of the week lie in `year`; the
/// first full reporting week of `year` begins one week later.
fn week_belongs_to_prior_year(
    calendar: &Calendar,
    adjusted: &DateTimeUnit,
    year: i32,
) -> Option<bool> {
    let adjusted_week = calendar.iso_week(adjusted).ok()?;
    let prior_year_weeks = calendar.weeks_in_year(year - 1).ok()?;
    Some(adjusted_week == prior_year_weeks)
}

fn capture_int<T: FromStr>(captures: &Captures<'_>, index: usize) -> Option<T> {
    captures.get(index)?.as_str().parse().ok()
}
