//! This module implements the period type catalog.
//!
//! Every period shape the engine understands is a [`PeriodType`] variant
//! paired with a compiled pattern that recognizes the shape's textual code
//! and captures its numeric fields. The catalog is built once at first use
//! and never mutated; declaration order is the match priority order.

use core::fmt;
use core::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tinystr::{tinystr, TinyAsciiStr};

use crate::{
    components::{calendar::Calendar, date_time_unit::DateTimeUnit, interval::DateInterval},
    options::Weekday,
    PeriodResult,
};

/// The period shapes supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodType {
    Daily,
    Weekly,
    WeeklyWednesday,
    WeeklyThursday,
    WeeklySaturday,
    WeeklySunday,
    BiWeekly,
    Monthly,
    BiMonthly,
    Quarterly,
    QuarterlyNovember,
    SixMonthly,
    SixMonthlyApril,
    SixMonthlyNovember,
    Yearly,
    FinancialApril,
    FinancialJuly,
    FinancialSeptember,
    FinancialOctober,
    FinancialNovember,
}

/// All period types, in match priority order.
const ALL: [PeriodType; 20] = [
    PeriodType::Daily,
    PeriodType::Weekly,
    PeriodType::WeeklyWednesday,
    PeriodType::WeeklyThursday,
    PeriodType::WeeklySaturday,
    PeriodType::WeeklySunday,
    PeriodType::BiWeekly,
    PeriodType::Monthly,
    PeriodType::BiMonthly,
    PeriodType::Quarterly,
    PeriodType::QuarterlyNovember,
    PeriodType::SixMonthly,
    PeriodType::SixMonthlyApril,
    PeriodType::SixMonthlyNovember,
    PeriodType::Yearly,
    PeriodType::FinancialApril,
    PeriodType::FinancialJuly,
    PeriodType::FinancialSeptember,
    PeriodType::FinancialOctober,
    PeriodType::FinancialNovember,
];

static CATALOG: LazyLock<Vec<(PeriodType, Regex)>> = LazyLock::new(|| {
    ALL.iter()
        .map(|period_type| {
            let regex = Regex::new(period_type.pattern())
                .expect("catalog patterns are valid expressions");
            (*period_type, regex)
        })
        .collect()
});

/// How far one period of a type extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PeriodSpan {
    Days(i32),
    Weeks(i32),
    Months(i32),
    Years(i32),
}

impl PeriodType {
    /// All period types, in match priority order.
    pub const ALL: [PeriodType; 20] = ALL;

    /// The pattern source recognizing this type's period codes.
    ///
    /// The literal code formats are stable: codes already stored by
    /// deployments must keep resolving to the same period type.
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        match self {
            Self::Daily => r"\b(\d{4})(\d{2})(\d{2})\b",
            Self::Weekly => r"\b(\d{4})W(\d{1,2})\b",
            Self::WeeklyWednesday => r"\b(\d{4})WedW(\d{1,2})\b",
            Self::WeeklyThursday => r"\b(\d{4})ThuW(\d{1,2})\b",
            Self::WeeklySaturday => r"\b(\d{4})SatW(\d{1,2})\b",
            Self::WeeklySunday => r"\b(\d{4})SunW(\d{1,2})\b",
            Self::BiWeekly => r"\b(\d{4})BiW(\d{1,2})\b",
            Self::Monthly => r"\b(\d{4})-?(\d{2})\b",
            Self::BiMonthly => r"\b(\d{4})(\d{2})B\b",
            Self::Quarterly => r"\b(\d{4})Q(\d)\b",
            Self::QuarterlyNovember => r"\b(\d{4})NovQ(\d)\b",
            Self::SixMonthly => r"\b(\d{4})S(\d)\b",
            Self::SixMonthlyApril => r"\b(\d{4})AprilS(\d)\b",
            Self::SixMonthlyNovember => r"\b(\d{4})NovS(\d)\b",
            Self::Yearly => r"\b(\d{4})\b",
            Self::FinancialApril => r"\b(\d{4})April\b",
            Self::FinancialJuly => r"\b(\d{4})July\b",
            Self::FinancialSeptember => r"\b(\d{4})Sep\b",
            Self::FinancialOctober => r"\b(\d{4})Oct\b",
            Self::FinancialNovember => r"\b(\d{4})Nov\b",
        }
    }

    /// The identifier of this period type.
    #[must_use]
    pub const fn identifier(&self) -> TinyAsciiStr<20> {
        match self {
            Self::Daily => tinystr!(20, "Daily"),
            Self::Weekly => tinystr!(20, "Weekly"),
            Self::WeeklyWednesday => tinystr!(20, "WeeklyWednesday"),
            Self::WeeklyThursday => tinystr!(20, "WeeklyThursday"),
            Self::WeeklySaturday => tinystr!(20, "WeeklySaturday"),
            Self::WeeklySunday => tinystr!(20, "WeeklySunday"),
            Self::BiWeekly => tinystr!(20, "BiWeekly"),
            Self::Monthly => tinystr!(20, "Monthly"),
            Self::BiMonthly => tinystr!(20, "BiMonthly"),
            Self::Quarterly => tinystr!(20, "Quarterly"),
            Self::QuarterlyNovember => tinystr!(20, "QuarterlyNovember"),
            Self::SixMonthly => tinystr!(20, "SixMonthly"),
            Self::SixMonthlyApril => tinystr!(20, "SixMonthlyApril"),
            Self::SixMonthlyNovember => tinystr!(20, "SixMonthlyNovember"),
            Self::Yearly => tinystr!(20, "Yearly"),
            Self::FinancialApril => tinystr!(20, "FinancialApril"),
            Self::FinancialJuly => tinystr!(20, "FinancialJuly"),
            Self::FinancialSeptember => tinystr!(20, "FinancialSeptember"),
            Self::FinancialOctober => tinystr!(20, "FinancialOctober"),
            Self::FinancialNovember => tinystr!(20, "FinancialNovember"),
        }
    }

    /// The first day of the reporting week, for week-based types.
    #[must_use]
    pub const fn week_start(&self) -> Option<Weekday> {
        match self {
            Self::Weekly | Self::BiWeekly => Some(Weekday::Monday),
            Self::WeeklyWednesday => Some(Weekday::Wednesday),
            Self::WeeklyThursday => Some(Weekday::Thursday),
            Self::WeeklySaturday => Some(Weekday::Saturday),
            Self::WeeklySunday => Some(Weekday::Sunday),
            _ => None,
        }
    }

    pub(crate) const fn span(&self) -> PeriodSpan {
        match self {
            Self::Daily => PeriodSpan::Days(1),
            Self::Weekly
            | Self::WeeklyWednesday
            | Self::WeeklyThursday
            | Self::WeeklySaturday
            | Self::WeeklySunday => PeriodSpan::Weeks(1),
            Self::BiWeekly => PeriodSpan::Weeks(2),
            Self::Monthly => PeriodSpan::Months(1),
            Self::BiMonthly => PeriodSpan::Months(2),
            Self::Quarterly | Self::QuarterlyNovember => PeriodSpan::Months(3),
            Self::SixMonthly | Self::SixMonthlyApril | Self::SixMonthlyNovember => {
                PeriodSpan::Months(6)
            }
            Self::Yearly
            | Self::FinancialApril
            | Self::FinancialJuly
            | Self::FinancialSeptember
            | Self::FinancialOctober
            | Self::FinancialNovember => PeriodSpan::Years(1),
        }
    }

    /// Finds the period type of a code together with the captured fields.
    /// The first type in declaration order whose pattern matches wins.
    pub(crate) fn find(code: &str) -> Option<(PeriodType, Captures<'_>)> {
        CATALOG
            .iter()
            .find_map(|(period_type, regex)| regex.captures(code).map(|caps| (*period_type, caps)))
    }

    /// Returns the period type a code denotes, if any.
    #[must_use]
    pub fn from_code(code: &str) -> Option<PeriodType> {
        Self::find(code).map(|(period_type, _)| period_type)
    }

    /// Moves an interval of this period type forward or backward by whole
    /// periods, re-deriving the end date from the shifted start.
    pub fn shift(
        &self,
        calendar: &Calendar,
        interval: &DateInterval,
        periods: i32,
    ) -> PeriodResult<DateInterval> {
        let start = self.advance(calendar, &interval.start, periods)?;
        let next_start = self.advance(calendar, &start, 1)?;
        let end = calendar.minus_days(&next_start, 1)?;
        Ok(DateInterval::new(
            start.with_day_of_week(calendar.weekday(&start)?),
            end.with_day_of_week(calendar.weekday(&end)?),
        ))
    }

    /// The interval one period after the given one.
    pub fn next(&self, calendar: &Calendar, interval: &DateInterval) -> PeriodResult<DateInterval> {
        self.shift(calendar, interval, 1)
    }

    /// The interval one period before the given one.
    pub fn previous(
        &self,
        calendar: &Calendar,
        interval: &DateInterval,
    ) -> PeriodResult<DateInterval> {
        self.shift(calendar, interval, -1)
    }

    fn advance(
        &self,
        calendar: &Calendar,
        date: &DateTimeUnit,
        periods: i32,
    ) -> PeriodResult<DateTimeUnit> {
        match self.span() {
            PeriodSpan::Days(days) => calendar.plus_days(date, days * periods),
            PeriodSpan::Weeks(weeks) => calendar.plus_weeks(date, weeks * periods),
            PeriodSpan::Months(months) => calendar.plus_months(date, months * periods),
            PeriodSpan::Years(years) => calendar.plus_years(date, years * periods),
        }
    }
}

/// A parsing error for [`PeriodType`].
#[derive(Debug, Clone, Copy)]
pub struct ParsePeriodTypeError;

impl fmt::Display for ParsePeriodTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid period type identifier")
    }
}

impl FromStr for PeriodType {
    type Err = ParsePeriodTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .find(|period_type| period_type.identifier().as_str() == s)
            .copied()
            .ok_or(ParsePeriodTypeError)
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier().as_str())
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::PeriodType;
    use crate::options::Weekday;

    #[test]
    fn codes_resolve_to_their_period_type() {
        let cases = [
            ("20140315", PeriodType::Daily),
            ("2014W12", PeriodType::Weekly),
            ("2014WedW5", PeriodType::WeeklyWednesday),
            ("2014ThuW5", PeriodType::WeeklyThursday),
            ("2014SatW5", PeriodType::WeeklySaturday),
            ("2014SunW5", PeriodType::WeeklySunday),
            ("2014BiW1", PeriodType::BiWeekly),
            ("201403", PeriodType::Monthly),
            ("2014-03", PeriodType::Monthly),
            ("201401B", PeriodType::BiMonthly),
            ("2014Q2", PeriodType::Quarterly),
            ("2014NovQ1", PeriodType::QuarterlyNovember),
            ("2014S1", PeriodType::SixMonthly),
            ("2014AprilS1", PeriodType::SixMonthlyApril),
            ("2014NovS1", PeriodType::SixMonthlyNovember),
            ("2014", PeriodType::Yearly),
            ("2014April", PeriodType::FinancialApril),
            ("2014July", PeriodType::FinancialJuly),
            ("2014Sep", PeriodType::FinancialSeptember),
            ("2014Oct", PeriodType::FinancialOctober),
            ("2014Nov", PeriodType::FinancialNovember),
        ];
        for (code, expected) in cases {
            assert_eq!(PeriodType::from_code(code), Some(expected), "{code}");
        }
    }

    #[test]
    fn formats_do_not_bleed_into_each_other() {
        // A yearly prefix followed by word characters is not a yearly code.
        assert_ne!(PeriodType::from_code("2014Nov"), Some(PeriodType::Yearly));
        assert_ne!(
            PeriodType::from_code("2014NovQ1"),
            Some(PeriodType::FinancialNovember)
        );
        assert_ne!(PeriodType::from_code("201401B"), Some(PeriodType::Monthly));
        assert_ne!(
            PeriodType::from_code("2014AprilS2"),
            Some(PeriodType::FinancialApril)
        );
        assert_ne!(PeriodType::from_code("2014SatW1"), Some(PeriodType::SixMonthly));
        assert_ne!(PeriodType::from_code("20140315"), Some(PeriodType::Monthly));
    }

    #[test]
    fn unrecognized_codes_resolve_to_none() {
        for code in ["", "garbage", "14Q2", "2014Z9", "W12", "2014Q", "April"] {
            assert_eq!(PeriodType::from_code(code), None, "{code}");
        }
    }

    #[test]
    fn identifier_round_trip() {
        for period_type in PeriodType::ALL {
            let identifier = period_type.identifier();
            assert_eq!(
                PeriodType::from_str(identifier.as_str()).unwrap(),
                period_type
            );
        }
        assert!(PeriodType::from_str("Fortnightly").is_err());
    }

    #[test]
    fn week_starts() {
        assert_eq!(PeriodType::Weekly.week_start(), Some(Weekday::Monday));
        assert_eq!(PeriodType::BiWeekly.week_start(), Some(Weekday::Monday));
        assert_eq!(
            PeriodType::WeeklySunday.week_start(),
            Some(Weekday::Sunday)
        );
        assert_eq!(PeriodType::Monthly.week_start(), None);
    }
}
