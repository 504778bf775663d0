/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Row and event data structures handed to the placement engine.
//!
//! ```text
//! schedule.yaml ──(config)──►  Row / Event  ──(placement)──►  GridPlacement  ──(render)──►  text / html
//!                               ↑ caller-owned, borrowed       ↑ derived, recomputed per call
//! ```
//!
//! # Ownership model
//! Rows and events belong to the caller.  Every placement or rendering call
//! borrows them as slices and never keeps a copy, so the caller can mutate
//! its data between calls and simply recompute.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Open set of display attributes (avatar URL, department, …).
pub type Attributes = BTreeMap<String, serde_yaml::Value>;

// ── Identity ──────────────────────────────────────────────────────────────────

/// Identity of a row or event: an integer or a string.
///
/// Comparison is strict — `EntityId::Number(1)` and `EntityId::Text("1")`
/// are different ids, so an event with `user_id: "1"` does not belong to the
/// row with `id: 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{n}"),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(v: i64) -> Self {
        EntityId::Number(v)
    }
}

impl From<&str> for EntityId {
    fn from(v: &str) -> Self {
        EntityId::Text(v.to_string())
    }
}

impl From<String> for EntityId {
    fn from(v: String) -> Self {
        EntityId::Text(v)
    }
}

// ── Row ───────────────────────────────────────────────────────────────────────

/// One grid row (a user / resource).
///
/// Rows carry no ordering invariant; the grid shows them in the order the
/// caller supplies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: EntityId,
    pub name: String,
    /// Everything else found on the row, kept for custom renderers.
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Row {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attributes: Attributes::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_yaml::Value>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.attributes.get(key)
    }
}

// ── Event ─────────────────────────────────────────────────────────────────────

/// A time-bounded event belonging to one row.
///
/// `start_time` / `end_time` are labels in the grid's [`TimeFormat`] and form
/// the half-open interval `[start, end)`.  `start < end` is expected but not
/// enforced here; the placement engine reports violations as diagnostics.
///
/// `user_id` is a foreign key into the row set.  It is not validated on
/// construction — an event for an unknown row is simply never placed.
///
/// The camelCase aliases let schedules exported from web front-ends load
/// unchanged.
///
/// [`TimeFormat`]: crate::time::TimeFormat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EntityId,

    #[serde(alias = "userId")]
    pub user_id: EntityId,

    #[serde(alias = "startTime")]
    pub start_time: String,

    #[serde(alias = "endTime")]
    pub end_time: String,

    #[serde(default)]
    pub title: String,

    /// Palette name used by renderers (e.g. `"blue"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Event {
    pub fn new(
        id: impl Into<EntityId>,
        user_id: impl Into<EntityId>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            title: title.into(),
            color: None,
            attributes: Attributes::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Returns `true` if this event belongs to `row`.
    pub fn belongs_to(&self, row: &Row) -> bool {
        self.user_id == row.id
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
