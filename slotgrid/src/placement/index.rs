//! Pre-computed lookup tables for one placement run.
//!
//! The naive algorithm searches every event for every `(row, slot)` cell and
//! re-scans the slots to find anchors, which is cubic in the input size.
//! Here each slot label and each event timestamp is parsed once, events are
//! grouped by row, and each event's anchor / end slot is resolved once.

use std::collections::HashMap;

use chrono::NaiveTime;
use tracing::warn;

use super::error::PlacementIssue;
use crate::model::{EntityId, Event};
use crate::time::TimeFormat;

// ── Slot times ────────────────────────────────────────────────────────────────

/// Parsed slot labels.  Unparsable labels are `None` and never compare.
#[derive(Debug)]
pub(crate) struct SlotTimes {
    times: Vec<Option<NaiveTime>>,
    /// All labels parsed and non-decreasing: lookups can binary search.
    ascending: bool,
}

impl SlotTimes {
    pub(crate) fn parse(
        slots: &[String],
        format: &TimeFormat,
        issues: &mut Vec<PlacementIssue>,
    ) -> Self {
        let times: Vec<Option<NaiveTime>> = slots
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let t = format.parse(label);
                if t.is_none() {
                    warn!(index, label = %label, "slot label does not parse");
                    issues.push(PlacementIssue::UnparsableSlot {
                        index,
                        label: label.clone(),
                    });
                }
                t
            })
            .collect();

        let ascending = times.iter().all(Option::is_some)
            && times.windows(2).all(|w| w[0] <= w[1]);

        Self { times, ascending }
    }

    pub(crate) fn len(&self) -> usize {
        self.times.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<NaiveTime> {
        self.times.get(index).copied().flatten()
    }

    /// Smallest slot index whose time is `>= t`, or `None` if every slot is
    /// earlier.
    pub(crate) fn first_at_or_after(&self, t: NaiveTime) -> Option<usize> {
        if self.ascending {
            let idx = self.times.partition_point(|s| matches!(s, Some(s) if *s < t));
            (idx < self.times.len()).then_some(idx)
        } else {
            self.times
                .iter()
                .position(|s| matches!(s, Some(s) if t <= *s))
        }
    }
}

// ── Placed events ─────────────────────────────────────────────────────────────

/// An event whose interval parsed and is non-empty.
#[derive(Debug, Clone)]
pub(crate) struct PlacedEvent {
    /// Position in the caller's event slice.
    pub index: usize,
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// First slot at or after `start`.
    pub anchor: Option<usize>,
    /// First slot at or after `end`.
    pub end_slot: Option<usize>,
}

impl PlacedEvent {
    /// Half-open containment: `start <= t < end`.
    pub(crate) fn contains(&self, t: NaiveTime) -> bool {
        self.start <= t && t < self.end
    }

    /// Number of columns the anchor cell occupies; at least 1.
    pub(crate) fn span(&self) -> usize {
        match (self.anchor, self.end_slot) {
            (Some(anchor), Some(end)) => end.saturating_sub(anchor).max(1),
            _ => 1,
        }
    }
}

// ── Row index ─────────────────────────────────────────────────────────────────

/// Valid events grouped by row id, each group in input order so that the
/// first match within a group is the first match in the caller's list.
#[derive(Debug, Default)]
pub(crate) struct RowIndex<'a> {
    by_row: HashMap<&'a EntityId, Vec<PlacedEvent>>,
}

impl<'a> RowIndex<'a> {
    /// Parse and index `events`, recording an issue for every event that can
    /// never match a slot.
    pub(crate) fn build(
        events: &'a [Event],
        slots: &SlotTimes,
        format: &TimeFormat,
        issues: &mut Vec<PlacementIssue>,
    ) -> Self {
        let mut by_row: HashMap<&'a EntityId, Vec<PlacedEvent>> = HashMap::new();

        for (index, event) in events.iter().enumerate() {
            let Some(start) = format.parse(&event.start_time) else {
                warn!(event = %event.id, value = %event.start_time, "unparsable event start");
                issues.push(PlacementIssue::UnparsableStart {
                    event: event.id.clone(),
                    value: event.start_time.clone(),
                });
                continue;
            };
            let Some(end) = format.parse(&event.end_time) else {
                warn!(event = %event.id, value = %event.end_time, "unparsable event end");
                issues.push(PlacementIssue::UnparsableEnd {
                    event: event.id.clone(),
                    value: event.end_time.clone(),
                });
                continue;
            };
            if end <= start {
                warn!(event = %event.id, "empty event interval");
                issues.push(PlacementIssue::EmptyInterval {
                    event: event.id.clone(),
                    start: event.start_time.clone(),
                    end: event.end_time.clone(),
                });
                continue;
            }

            by_row.entry(&event.user_id).or_default().push(PlacedEvent {
                index,
                start,
                end,
                anchor: slots.first_at_or_after(start),
                end_slot: slots.first_at_or_after(end),
            });
        }

        Self { by_row }
    }

    pub(crate) fn events_for(&self, row: &EntityId) -> &[PlacedEvent] {
        self.by_row.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every indexed event with its row id, in input order.
    pub(crate) fn in_input_order(&self) -> Vec<(&'a EntityId, &PlacedEvent)> {
        let mut all: Vec<(&'a EntityId, &PlacedEvent)> = self
            .by_row
            .iter()
            .flat_map(|(row, events)| events.iter().map(move |e| (*row, e)))
            .collect();
        all.sort_unstable_by_key(|(_, e)| e.index);
        all
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
