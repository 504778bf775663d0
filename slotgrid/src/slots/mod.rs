//! Slot label generation.
//!
//! Produces the ordered column labels of the grid: `start`, `start +
//! interval`, `start + 2·interval`, … up to and including `end` when a step
//! lands on it exactly.
//!
//! Two entry points share one implementation:
//!
//! | Function | On invalid input |
//! |---|---|
//! | [`try_generate_slots`] | `Err(SlotError)` |
//! | [`generate_slots`] | `error!` event + empty `Vec` |

use chrono::{NaiveTime, Timelike};
use thiserror::Error;
use tracing::{debug, error};

use crate::time::TimeFormat;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Interval used when the caller does not supply one.
pub const DEFAULT_INTERVAL_MINUTES: i64 = 60;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

// ── Error type ────────────────────────────────────────────────────────────────

/// Why slot generation produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// `start` is not a canonical label in the fixed input pattern.
    #[error("invalid start time '{0}'")]
    InvalidStart(String),

    /// `end` is not a canonical label in the fixed input pattern.
    #[error("invalid end time '{0}'")]
    InvalidEnd(String),

    #[error("end time {end} is before start time {start}")]
    EndBeforeStart { start: NaiveTime, end: NaiveTime },

    #[error("interval must be greater than 0 minutes (got {0})")]
    NonPositiveInterval(i64),
}

// ── Inputs ────────────────────────────────────────────────────────────────────

/// A slot boundary: either a label still to be parsed or a time of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeInput {
    /// Parsed strictly against [`TimeFormat::default()`] regardless of the
    /// output format.
    Label(String),
    Time(NaiveTime),
}

impl From<&str> for TimeInput {
    fn from(v: &str) -> Self {
        TimeInput::Label(v.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(v: String) -> Self {
        TimeInput::Label(v)
    }
}

impl From<NaiveTime> for TimeInput {
    fn from(v: NaiveTime) -> Self {
        TimeInput::Time(v)
    }
}

/// Options for [`generate_slots`].
#[derive(Debug, Clone)]
pub struct SlotOptions {
    pub start: TimeInput,
    pub end: TimeInput,
    /// Step between labels, in minutes.
    pub interval_minutes: i64,
    /// Pattern used to print the labels.
    pub format: TimeFormat,
}

impl SlotOptions {
    /// Hourly slots in the default format.
    pub fn new(start: impl Into<TimeInput>, end: impl Into<TimeInput>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            format: TimeFormat::default(),
        }
    }

    pub fn interval(mut self, minutes: i64) -> Self {
        self.interval_minutes = minutes;
        self
    }

    pub fn format(mut self, format: TimeFormat) -> Self {
        self.format = format;
        self
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

/// Generate slot labels, reporting invalid input on the `tracing` error
/// channel and returning an empty sequence.
///
/// # Example
/// ```rust
/// use slotgrid::slots::{generate_slots, SlotOptions};
///
/// let slots = generate_slots(&SlotOptions::new("9:00 AM", "11:00 AM").interval(30));
/// assert_eq!(slots, ["9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM"]);
///
/// assert!(generate_slots(&SlotOptions::new("5:00 PM", "9:00 AM")).is_empty());
/// ```
pub fn generate_slots(options: &SlotOptions) -> Vec<String> {
    match try_generate_slots(options) {
        Ok(slots) => slots,
        Err(e) => {
            error!(error = %e, "slot generation failed");
            Vec::new()
        }
    }
}

/// Generate slot labels or explain why none can be produced.
///
/// # Errors
/// * [`SlotError::InvalidStart`] / [`SlotError::InvalidEnd`] – a label failed
///   strict parsing.
/// * [`SlotError::EndBeforeStart`] – `end < start`.
/// * [`SlotError::NonPositiveInterval`] – `interval_minutes <= 0`.
pub fn try_generate_slots(options: &SlotOptions) -> Result<Vec<String>, SlotError> {
    let input_format = TimeFormat::default();

    let start = match &options.start {
        TimeInput::Time(t) => *t,
        TimeInput::Label(l) => input_format
            .parse_strict(l)
            .ok_or_else(|| SlotError::InvalidStart(l.clone()))?,
    };
    let end = match &options.end {
        TimeInput::Time(t) => *t,
        TimeInput::Label(l) => input_format
            .parse_strict(l)
            .ok_or_else(|| SlotError::InvalidEnd(l.clone()))?,
    };

    if end < start {
        return Err(SlotError::EndBeforeStart { start, end });
    }
    if options.interval_minutes <= 0 {
        return Err(SlotError::NonPositiveInterval(options.interval_minutes));
    }

    let step = (options.interval_minutes as u64).saturating_mul(60);
    let end_secs = u64::from(end.num_seconds_from_midnight());
    let mut current = u64::from(start.num_seconds_from_midnight());

    let mut slots = Vec::new();
    // `current` stays below SECONDS_PER_DAY, so steps never wrap past midnight.
    while current <= end_secs && current < SECONDS_PER_DAY {
        match NaiveTime::from_num_seconds_from_midnight_opt(current as u32, 0) {
            Some(t) => slots.push(options.format.format(t)),
            None => break,
        }
        current = current.saturating_add(step);
    }

    debug!(
        count = slots.len(),
        interval_minutes = options.interval_minutes,
        format = %options.format,
        "generated slots"
    );
    Ok(slots)
}

/// The 24 hourly labels of a day, starting at midnight.
///
/// Used when a schedule supplies neither explicit labels nor slot options.
pub fn default_day_slots(format: &TimeFormat) -> Vec<String> {
    (0..24)
        .filter_map(|h| NaiveTime::from_hms_opt(h, 0, 0))
        .map(|t| format.format(t))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
