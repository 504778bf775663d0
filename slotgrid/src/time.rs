/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Time-of-day patterns used to parse and render slot labels and event
//! timestamps.
//!
//! A [`TimeFormat`] is always passed explicitly to every call that compares
//! times — there is no process-wide parser configuration.

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default pattern: 12-hour clock without hour padding, e.g. `9:00 AM`.
pub const DEFAULT_TIME_PATTERN: &str = "%-I:%M %p";

/// 24-hour clock, e.g. `14:30`.
pub const TWENTY_FOUR_HOUR_PATTERN: &str = "%H:%M";

/// Returned when a pattern contains a specifier chrono does not understand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time format pattern '{pattern}'")]
pub struct TimeFormatError {
    pub pattern: String,
}

/// A validated chrono strftime pattern for time-of-day values.
///
/// Parsing is lenient by default ([`parse`](Self::parse)); slot generation
/// uses [`parse_strict`](Self::parse_strict), which additionally requires the
/// input to be exactly what [`format`](Self::format) would print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeFormat {
    pattern: String,
}

impl TimeFormat {
    /// Validate `pattern` and wrap it.
    ///
    /// # Errors
    /// [`TimeFormatError`] if chrono reports an unknown or malformed
    /// specifier anywhere in the pattern.
    pub fn new(pattern: impl Into<String>) -> Result<Self, TimeFormatError> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(TimeFormatError { pattern });
        }
        // Date fields (`%Y`, `%d`, …) cannot be printed from a bare time.
        let mut rendered = String::new();
        if write!(rendered, "{}", NaiveTime::default().format(&pattern)).is_err() {
            return Err(TimeFormatError { pattern });
        }
        Ok(Self { pattern })
    }

    /// 24-hour `HH:MM` format.
    pub fn twenty_four_hour() -> Self {
        Self {
            pattern: TWENTY_FOUR_HOUR_PATTERN.to_string(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parse `label` into a time of day.  Surrounding whitespace is ignored.
    pub fn parse(&self, label: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(label.trim(), &self.pattern).ok()
    }

    /// Parse `label` and reject it unless re-formatting gives back the exact
    /// input (`09:00 AM` and `9:00 am` fail under the default pattern).
    pub fn parse_strict(&self, label: &str) -> Option<NaiveTime> {
        let time = NaiveTime::parse_from_str(label, &self.pattern).ok()?;
        (self.format(time) == label).then_some(time)
    }

    pub fn format(&self, time: NaiveTime) -> String {
        time.format(&self.pattern).to_string()
    }

    /// Re-render `label` in canonical form, or `None` if it does not parse.
    pub fn normalize(&self, label: &str) -> Option<String> {
        self.parse(label).map(|t| self.format(t))
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TIME_PATTERN.to_string(),
        }
    }
}

impl TryFrom<String> for TimeFormat {
    type Error = TimeFormatError;

    fn try_from(pattern: String) -> Result<Self, Self::Error> {
        Self::new(pattern)
    }
}

impl From<TimeFormat> for String {
    fn from(format: TimeFormat) -> Self {
        format.pattern
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
