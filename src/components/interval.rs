//! This module implements `DateInterval`.

use crate::components::date_time_unit::DateTimeUnit;

/// An inclusive date range `[start, end]`.
///
/// Intervals produced by the period parser always satisfy `start <= end`;
/// the type itself does not enforce the ordering.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    pub start: DateTimeUnit,
    pub end: DateTimeUnit,
}

impl DateInterval {
    /// Creates a new `DateInterval`.
    #[inline]
    #[must_use]
    pub const fn new(start: DateTimeUnit, end: DateTimeUnit) -> Self {
        Self { start, end }
    }
}
