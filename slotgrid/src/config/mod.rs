//! Schedule file loading.
//!
//! A schedule file bundles everything one grid needs: the rows, the events,
//! how to obtain the slot labels and the time format.
//!
//! The expected YAML structure is:
//! ```yaml
//! time_format: "%-I:%M %p"        # optional, 12-hour by default
//! slots:                           # optional: generated labels
//!   start: "9:00 AM"
//!   end: "5:30 PM"
//!   interval_minutes: 30
//! slot_labels: ["9:00 AM", "..."]  # optional: explicit labels, win over `slots`
//! users:
//!   - id: 1
//!     name: "John Doe"
//!     avatar: "https://i.pravatar.cc/150?img=1"
//! events:
//!   - id: 1
//!     user_id: 1
//!     start_time: "9:00 AM"
//!     end_time: "10:00 AM"
//!     title: "Meeting"
//!     color: "blue"
//! ```
//!
//! When neither `slots` nor `slot_labels` is present the grid shows the 24
//! hourly labels of the day.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::model::{Event, Row};
use crate::slots::{default_day_slots, try_generate_slots, SlotOptions, DEFAULT_INTERVAL_MINUTES};
use crate::time::TimeFormat;

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
#[derive(Debug, Deserialize)]
struct ScheduleFile {
    #[serde(default)]
    time_format: TimeFormat,
    slots: Option<SlotSection>,
    slot_labels: Option<Vec<String>>,
    #[serde(default, alias = "rows")]
    users: Vec<Row>,
    #[serde(default)]
    events: Vec<Event>,
}

/// `slots:` section.  `start` / `end` use the fixed 12-hour input pattern;
/// the generated labels use the file's `time_format`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlotSection {
    pub start: String,
    pub end: String,
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: i64,
}

fn default_interval_minutes() -> i64 {
    DEFAULT_INTERVAL_MINUTES
}

// ── Public data structures ────────────────────────────────────────────────────

/// Where the grid's column labels come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotSource {
    Labels(Vec<String>),
    Generated(SlotSection),
    FullDay,
}

/// A fully parsed schedule file.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub time_format: TimeFormat,
    pub slot_source: SlotSource,
    pub rows: Vec<Row>,
    pub events: Vec<Event>,
}

impl ScheduleConfig {
    /// Read and parse the schedule at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, if the YAML is
    /// structurally invalid, or if `time_format` is not a valid pattern.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading schedule from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open schedule file: {}", path.display()))?;

        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse schedule file: {}", path.display()))
    }

    /// Parse a schedule from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: ScheduleFile =
            serde_yaml::from_str(content).context("invalid schedule YAML")?;

        let slot_source = match (file.slot_labels, file.slots) {
            (Some(labels), slots) => {
                if slots.is_some() {
                    warn!("Both `slot_labels` and `slots` given, using `slot_labels`");
                }
                SlotSource::Labels(labels)
            }
            (None, Some(section)) => SlotSource::Generated(section),
            (None, None) => SlotSource::FullDay,
        };

        if file.users.is_empty() {
            warn!("Schedule has no users, the grid will have no rows");
        }

        info!(
            users = file.users.len(),
            events = file.events.len(),
            time_format = %file.time_format,
            slot_source = ?slot_source,
            "Schedule loaded"
        );
        for row in &file.users {
            debug!("  Row: {} | {}", row.id, row.name);
        }

        Ok(Self {
            time_format: file.time_format,
            slot_source,
            rows: file.users,
            events: file.events,
        })
    }

    /// Produce the slot labels for this schedule.
    ///
    /// # Errors
    /// Returns an error if generated slots were requested with invalid
    /// bounds or interval.
    pub fn resolve_slots(&self) -> Result<Vec<String>> {
        match &self.slot_source {
            SlotSource::Labels(labels) => Ok(labels.clone()),
            SlotSource::Generated(section) => {
                let options = SlotOptions::new(section.start.as_str(), section.end.as_str())
                    .interval(section.interval_minutes)
                    .format(self.time_format.clone());
                try_generate_slots(&options).with_context(|| {
                    format!(
                        "Cannot generate slots from {} to {} every {} min",
                        section.start, section.end, section.interval_minutes
                    )
                })
            }
            SlotSource::FullDay => Ok(default_day_slots(&self.time_format)),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
