//! The `period_rs` crate implements the period and calendar computation
//! engine of a health-information platform in Rust.
//!
//! ```rust
//! use period_rs::{Calendar, PeriodParser, PeriodType};
//!
//! let parser = PeriodParser::new();
//!
//! // Quarter two of 2014 with the default ISO-8601 calendar.
//! let interval = parser.parse(&Calendar::default(), "2014Q2").unwrap();
//! let start = interval.start;
//! let end = interval.end;
//! assert_eq!((start.year, start.month, start.day), (2014, 4, 1));
//! assert_eq!((end.year, end.month, end.day), (2014, 6, 30));
//!
//! // Codes that match no period shape are not an error.
//! assert!(parser.parse(&Calendar::default(), "not-a-period").is_none());
//! assert_eq!(PeriodType::from_code("2014W12"), Some(PeriodType::Weekly));
//! ```
//!
//! A period is a recurring date range (month, quarter, financial year, …)
//! identified by a short textual code such as `"201403"` or `"2014Q2"`.
//! Given a [`Calendar`] and a code, [`PeriodParser`] recognizes the period
//! shape from a fixed catalog of patterns and computes the inclusive
//! `[start, end]` interval, honoring the structure of the active calendar
//! system (ISO-8601 by default, with non-ISO civil calendars such as the
//! Ethiopic calendar supported through `icu_calendar`).
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

pub mod components;
pub mod error;
pub mod options;
pub mod parsers;
pub mod provider;

#[doc(hidden)]
pub(crate) mod utils;

/// Re-export of `TinyAsciiStr` from `tinystr`, used for period type
/// identifiers.
pub use tinystr::TinyAsciiStr;

#[doc(inline)]
pub use error::PeriodError;

/// The `period_rs` result type.
pub type PeriodResult<T> = Result<T, PeriodError>;

pub use crate::{
    components::{
        calendar::Calendar, date_time_unit::DateTimeUnit, interval::DateInterval,
        period_type::PeriodType,
    },
    options::{DateFormat, Weekday},
    parsers::PeriodParser,
    provider::{CalendarProvider, SystemCalendarProvider},
};
