//! This module implements the error type for period and calendar
//! computations.

use std::borrow::Cow;
use std::fmt;

/// The error kinds produced by this crate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Catch-all kind.
    #[default]
    Generic,
    /// A value was outside the range valid for its context.
    Range,
    /// An identifier or textual input could not be interpreted.
    Syntax,
    /// An internal invariant did not hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "generic",
            Self::Range => "range",
            Self::Syntax => "syntax",
            Self::Assert => "assert",
        }
        .fmt(f)
    }
}

/// The error type of `period_rs`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PeriodError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl PeriodError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates a general error.
    #[inline]
    #[must_use]
    pub const fn general(msg: &'static str) -> Self {
        Self {
            kind: ErrorKind::Generic,
            msg: Cow::Borrowed(msg),
        }
    }

    /// Creates a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Creates a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates an assertion error.
    #[inline]
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Attaches a message to this error.
    #[must_use]
    pub fn with_message(mut self, msg: impl Into<Cow<'static, str>>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns this error's message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for PeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

impl std::error::Error for PeriodError {}
