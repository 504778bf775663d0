/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Placement diagnostics.
//!
//! Placement itself never fails: every call returns a full grid.  Inputs the
//! engine could not place are described by a [`PlacementIssue`] instead of
//! being dropped silently, so callers can show or log them.
//!
//! Every variant carries the offending id and raw value so a caller can
//! point the user at the exact record without re-parsing anything.

use thiserror::Error;

use crate::model::EntityId;

/// One input the engine could not place as given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementIssue {
    /// `start_time` does not parse in the grid's time format.  The event
    /// never matches a slot.
    #[error("event '{event}': start time '{value}' does not match the time format")]
    UnparsableStart { event: EntityId, value: String },

    /// `end_time` does not parse in the grid's time format.  The event never
    /// matches a slot.
    #[error("event '{event}': end time '{value}' does not match the time format")]
    UnparsableEnd { event: EntityId, value: String },

    /// `end_time <= start_time`: the half-open interval is empty, so no slot
    /// can match.
    #[error("event '{event}': interval {start} – {end} is empty")]
    EmptyInterval {
        event: EntityId,
        start: String,
        end: String,
    },

    /// `user_id` names no row in the grid.
    #[error("event '{event}': no row with id '{row}'")]
    UnknownRow { event: EntityId, row: EntityId },

    /// Valid event that anchors no cell: it lies outside the slot range,
    /// between two slot boundaries, or behind an earlier overlapping event
    /// of the same row.
    #[error("event '{event}' is not visible in the current slot range")]
    NotVisible { event: EntityId },

    /// A slot label does not parse in the grid's time format.  Its column is
    /// always empty.
    #[error("slot {index} ('{label}') does not match the time format")]
    UnparsableSlot { index: usize, label: String },
}

impl PlacementIssue {
    /// Id of the event this issue is about, if any.
    pub fn event_id(&self) -> Option<&EntityId> {
        match self {
            PlacementIssue::UnparsableStart { event, .. }
            | PlacementIssue::UnparsableEnd { event, .. }
            | PlacementIssue::EmptyInterval { event, .. }
            | PlacementIssue::UnknownRow { event, .. }
            | PlacementIssue::NotVisible { event } => Some(event),
            PlacementIssue::UnparsableSlot { .. } => None,
        }
    }
}
