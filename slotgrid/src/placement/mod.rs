//! Grid placement engine.
//!
//! [`GridPlacer`] maps events onto the discrete slot columns of a
//! row-by-time grid.  For every `(row, slot)` cell it decides one
//! [`CellOutcome`]:
//!
//! * **Anchor** – the event is drawn here and occupies `span` columns.
//! * **Suppressed** – the cell is covered by an anchor to its left and must
//!   not be drawn at all.
//! * **Empty** – nothing scheduled; the renderer draws a placeholder.
//!
//! # Rules
//!
//! | Step | Rule |
//! |---|---|
//! | Match | first event of the row (input order) with `start <= slot < end` |
//! | Anchor | first slot index whose time is `>= start` |
//! | Span | `max(first slot >= end − anchor, 1)`; `1` when no slot is `>= end` |
//! | Suppress | matched cells to the right of the anchor |
//!
//! Overlapping events of one row are resolved first-match-wins: the earlier
//! event in the input owns every slot both intervals cover.
//!
//! # Design
//!
//! | Topic | Choice |
//! |---|---|
//! | State | None — `place()` is a pure function of its arguments |
//! | Time format | Explicit [`TimeFormat`] on the placer, never global |
//! | Lookup | Events parsed once and indexed by row (see `index.rs`) |
//! | Bad input | Collected as [`PlacementIssue`]s; placement itself never fails |
//! | Thread safety | `Send + Sync`; concurrent calls never interfere |
//!
//! # Example
//! ```rust
//! use slotgrid::model::{Event, Row};
//! use slotgrid::placement::{compute_placement, CellOutcome};
//! use slotgrid::time::TimeFormat;
//!
//! let rows = vec![Row::new(1, "John Doe")];
//! let slots: Vec<String> = ["9:00 AM", "10:00 AM", "11:00 AM"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let events = vec![Event::new(1, 1, "9:00 AM", "11:00 AM", "Meeting")];
//!
//! let grid = compute_placement(&rows, &slots, &events, &TimeFormat::default());
//! assert_eq!(
//!     grid.rows[0].cells,
//!     vec![
//!         CellOutcome::Anchor { event: 0, span: 2 },
//!         CellOutcome::Suppressed { event: 0 },
//!         CellOutcome::Empty,
//!     ]
//! );
//! ```

pub mod error;
mod index;

pub use error::PlacementIssue;

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::model::{EntityId, Event, Row};
use crate::time::TimeFormat;

use index::{RowIndex, SlotTimes};

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Placement decision for one `(row, slot)` cell.
///
/// `event` is the index of the event in the caller's input slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOutcome {
    /// Draw the event here, occupying `span >= 1` columns.
    Anchor { event: usize, span: usize },
    /// Covered by the anchor of `event`; produce no cell at all.
    Suppressed { event: usize },
    /// Nothing scheduled.
    Empty,
}

impl CellOutcome {
    /// Event index for anchors and suppressed cells.
    pub fn event(&self) -> Option<usize> {
        match *self {
            CellOutcome::Anchor { event, .. } | CellOutcome::Suppressed { event } => Some(event),
            CellOutcome::Empty => None,
        }
    }

    /// `true` when a cell must be produced (anchor or empty).
    pub fn is_visible(&self) -> bool {
        !matches!(self, CellOutcome::Suppressed { .. })
    }
}

/// Outcomes for one row, one entry per slot index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPlacement {
    pub row_id: EntityId,
    pub cells: Vec<CellOutcome>,
}

impl RowPlacement {
    /// Cells that produce output, with their slot index.
    pub fn visible_cells(&self) -> impl Iterator<Item = (usize, CellOutcome)> + '_ {
        self.cells
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, c)| c.is_visible())
    }

    /// `(slot_index, event_index, span)` of every anchor in the row.
    pub fn anchors(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, c)| match *c {
            CellOutcome::Anchor { event, span } => Some((i, event, span)),
            _ => None,
        })
    }

    /// Columns taken by visible cells (anchors count their span).
    ///
    /// Equals the slot count for well-formed input; overlapping events can
    /// leave the row short.
    pub fn occupied_columns(&self) -> usize {
        self.visible_cells()
            .map(|(_, c)| match c {
                CellOutcome::Anchor { span, .. } => span,
                _ => 1,
            })
            .sum()
    }
}

/// Result of one placement run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridPlacement {
    /// One entry per input row, in input order.
    pub rows: Vec<RowPlacement>,
    /// Inputs that could not be placed as given, in discovery order.
    pub issues: Vec<PlacementIssue>,
}

impl GridPlacement {
    /// Outcome of the cell at `(row_index, slot_index)`, if in range.
    pub fn cell(&self, row_index: usize, slot_index: usize) -> Option<CellOutcome> {
        self.rows
            .get(row_index)
            .and_then(|r| r.cells.get(slot_index))
            .copied()
    }

    /// Total anchors across all rows.
    pub fn anchor_count(&self) -> usize {
        self.rows.iter().map(|r| r.anchors().count()).sum()
    }
}

// ── GridPlacer ────────────────────────────────────────────────────────────────

/// Placement engine bound to one time format.
///
/// Holds no per-run state; every call to [`place`](Self::place) starts from
/// scratch, so one placer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct GridPlacer {
    format: TimeFormat,
}

impl GridPlacer {
    pub fn new(format: TimeFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> &TimeFormat {
        &self.format
    }

    /// Compute the outcome of every `(row, slot)` cell.
    ///
    /// `slots` and every event's `start_time` / `end_time` are parsed with
    /// this placer's format.  Never fails: anything that cannot be placed is
    /// listed in [`GridPlacement::issues`].
    pub fn place(&self, rows: &[Row], slots: &[String], events: &[Event]) -> GridPlacement {
        let mut issues = Vec::new();

        let slot_times = SlotTimes::parse(slots, &self.format, &mut issues);
        let index = RowIndex::build(events, &slot_times, &self.format, &mut issues);

        debug!(
            rows = rows.len(),
            slots = slots.len(),
            events = events.len(),
            format = %self.format,
            "placing events"
        );

        let placed_rows: Vec<RowPlacement> = rows
            .iter()
            .map(|row| Self::place_row(row, &slot_times, &index))
            .collect();

        Self::report_unplaced(rows, events, &index, &placed_rows, &mut issues);

        let placement = GridPlacement {
            rows: placed_rows,
            issues,
        };

        debug!(
            anchors = placement.anchor_count(),
            issues = placement.issues.len(),
            "placement complete"
        );

        placement
    }

    /// Walk one row's slots left to right.
    fn place_row(row: &Row, slots: &SlotTimes, index: &RowIndex<'_>) -> RowPlacement {
        let events = index.events_for(&row.id);

        let cells = (0..slots.len())
            .map(|i| {
                let Some(t) = slots.get(i) else {
                    return CellOutcome::Empty;
                };
                // First match in input order wins on overlap.
                let Some(ev) = events.iter().find(|e| e.contains(t)) else {
                    return CellOutcome::Empty;
                };
                match ev.anchor {
                    Some(anchor) if anchor == i => {
                        let span = ev.span();
                        debug!(row = %row.id, slot = i, event = ev.index, span, "anchor");
                        CellOutcome::Anchor {
                            event: ev.index,
                            span,
                        }
                    }
                    Some(anchor) if i > anchor => CellOutcome::Suppressed { event: ev.index },
                    // Unreachable: a matching slot is at or after `start`, so the
                    // anchor never lies to its right.
                    _ => CellOutcome::Empty,
                }
            })
            .collect();

        RowPlacement {
            row_id: row.id.clone(),
            cells,
        }
    }

    /// Add `UnknownRow` / `NotVisible` issues for valid events that produced
    /// no anchor.
    fn report_unplaced(
        rows: &[Row],
        events: &[Event],
        index: &RowIndex<'_>,
        placed: &[RowPlacement],
        issues: &mut Vec<PlacementIssue>,
    ) {
        let row_ids: HashSet<&EntityId> = rows.iter().map(|r| &r.id).collect();
        let anchored: HashSet<usize> = placed
            .iter()
            .flat_map(|r| r.anchors().map(|(_, event, _)| event))
            .collect();

        for (row_id, ev) in index.in_input_order() {
            let event_id = &events[ev.index].id;
            if !row_ids.contains(&row_id) {
                warn!(event = %event_id, row = %row_id, "event references unknown row");
                issues.push(PlacementIssue::UnknownRow {
                    event: event_id.clone(),
                    row: row_id.clone(),
                });
            } else if !anchored.contains(&ev.index) {
                debug!(event = %event_id, "event anchors no cell");
                issues.push(PlacementIssue::NotVisible {
                    event: event_id.clone(),
                });
            }
        }
    }
}

/// Place `events` onto the `rows × slots` grid using `format`.
///
/// Convenience wrapper around [`GridPlacer::place`].
pub fn compute_placement(
    rows: &[Row],
    slots: &[String],
    events: &[Event],
    format: &TimeFormat,
) -> GridPlacement {
    GridPlacer::new(format.clone()).place(rows, slots, events)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::{generate_slots, SlotOptions};

    // ── Test helpers ──────────────────────────────────────────────────────────

    fn hourly(start: &str, end: &str) -> Vec<String> {
        generate_slots(&SlotOptions::new(start, end))
    }

    fn half_hourly(start: &str, end: &str) -> Vec<String> {
        generate_slots(&SlotOptions::new(start, end).interval(30))
    }

    fn labels(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn slot_index(slots: &[String], label: &str) -> usize {
        slots.iter().position(|s| s == label).unwrap()
    }

    fn place(rows: &[Row], slots: &[String], events: &[Event]) -> GridPlacement {
        compute_placement(rows, slots, events, &TimeFormat::default())
    }

    /// The five-person team used by the demo schedule.
    fn demo_rows() -> Vec<Row> {
        vec![
            Row::new(1, "John Doe"),
            Row::new(2, "Jane Smith"),
            Row::new(3, "Alice Johnson"),
            Row::new(4, "Bob Williams"),
            Row::new(5, "Eva Brown"),
        ]
    }

    fn demo_events() -> Vec<Event> {
        vec![
            Event::new(1, 1, "9:00 AM", "10:00 AM", "Meeting").with_color("blue"),
            Event::new(2, 2, "2:00 PM", "4:00 PM", "Project Work").with_color("green"),
            Event::new(3, 3, "10:30 AM", "11:30 AM", "Client Call").with_color("violet"),
            Event::new(4, 3, "3:00 PM", "5:00 PM", "Team Building").with_color("orange"),
            Event::new(5, 4, "1:00 PM", "2:30 PM", "Lunch Meeting").with_color("red"),
            Event::new(6, 4, "4:30 PM", "5:30 PM", "Code Review").with_color("cyan"),
            Event::new(7, 5, "11:00 AM", "12:00 PM", "Training Session").with_color("yellow"),
            Event::new(8, 5, "2:30 PM", "3:30 PM", "Design Review").with_color("pink"),
        ]
    }

    // ── Basic anchoring ───────────────────────────────────────────────────────

    #[test]
    fn unsorted_slots_never_leave_a_matching_cell_empty() {
        let slots = labels(&["9:30 AM", "9:00 AM", "10:00 AM"]);
        let rows = vec![Row::new(1, "John")];
        let events = vec![Event::new(1, 1, "9:00 AM", "10:00 AM", "Meeting")];

        let grid = place(&rows, &slots, &events);
        // 9:30 is the first label at or after the start in list order.
        assert_eq!(
            grid.rows[0].cells,
            vec![
                CellOutcome::Anchor { event: 0, span: 2 },
                CellOutcome::Suppressed { event: 0 },
                CellOutcome::Empty,
            ]
        );
        assert!(grid.issues.is_empty());
    }


    #[test]
    fn one_hour_event_on_hourly_grid_spans_one_column() {
        let slots = hourly("8:00 AM", "12:00 PM");
        let rows = vec![Row::new(1, "John")];
        let events = vec![Event::new(1, 1, "9:00 AM", "10:00 AM", "Meeting")];

        let grid = place(&rows, &slots, &events);
        let nine = slot_index(&slots, "9:00 AM");

        assert_eq!(grid.cell(0, nine), Some(CellOutcome::Anchor { event: 0, span: 1 }));
        assert_eq!(grid.cell(0, nine + 1), Some(CellOutcome::Empty));
        assert_eq!(grid.cell(0, nine - 1), Some(CellOutcome::Empty));
        assert!(grid.issues.is_empty());
    }

    #[test]
    fn two_hour_event_on_half_hour_grid_spans_four_columns() {
        let slots = labels(&["2:00 PM", "2:30 PM", "3:00 PM", "3:30 PM", "4:00 PM"]);
        let rows = vec![Row::new(2, "Jane")];
        let events = vec![Event::new(2, 2, "2:00 PM", "4:00 PM", "Project Work")];

        let grid = place(&rows, &slots, &events);
        let cells = &grid.rows[0].cells;

        assert_eq!(cells[0], CellOutcome::Anchor { event: 0, span: 4 });
        for cell in &cells[1..4] {
            assert_eq!(*cell, CellOutcome::Suppressed { event: 0 });
        }
        assert_eq!(cells[4], CellOutcome::Empty);
        assert_eq!(grid.rows[0].occupied_columns(), slots.len());
    }

    #[test]
    fn event_starting_between_boundaries_anchors_at_next_slot() {
        let slots = hourly("9:00 AM", "1:00 PM");
        let rows = vec![Row::new(3, "Alice")];
        let events = vec![Event::new(3, 3, "10:30 AM", "11:30 AM", "Client Call")];

        let grid = place(&rows, &slots, &events);
        let eleven = slot_index(&slots, "11:00 AM");

        assert_eq!(grid.cell(0, eleven), Some(CellOutcome::Anchor { event: 0, span: 1 }));
        assert_eq!(grid.cell(0, eleven - 1), Some(CellOutcome::Empty));
        assert_eq!(grid.cell(0, eleven + 1), Some(CellOutcome::Empty));
    }

    #[test]
    fn event_running_past_last_slot_spans_one_column() {
        let slots = half_hourly("3:00 PM", "5:00 PM");
        let rows = vec![Row::new(4, "Bob")];
        let events = vec![Event::new(6, 4, "4:30 PM", "5:30 PM", "Code Review")];

        let grid = place(&rows, &slots, &events);
        let anchor = slot_index(&slots, "4:30 PM");

        assert_eq!(grid.cell(0, anchor), Some(CellOutcome::Anchor { event: 0, span: 1 }));
        assert_eq!(grid.cell(0, anchor + 1), Some(CellOutcome::Suppressed { event: 0 }));
    }

    #[test]
    fn event_starting_before_first_slot_anchors_at_first_slot() {
        let slots = hourly("9:00 AM", "12:00 PM");
        let rows = vec![Row::new(1, "John")];
        let events = vec![Event::new(1, 1, "8:00 AM", "10:00 AM", "Early")];

        let grid = place(&rows, &slots, &events);
        // Span is measured from the anchor, not from the true start.
        assert_eq!(grid.cell(0, 0), Some(CellOutcome::Anchor { event: 0, span: 1 }));
        assert_eq!(grid.cell(0, 1), Some(CellOutcome::Empty));
    }

    // ── Invisible / invalid events ────────────────────────────────────────────

    #[test]
    fn event_after_last_slot_is_invisible_but_reported() {
        let slots = hourly("9:00 AM", "12:00 PM");
        let rows = vec![Row::new(1, "John")];
        let events = vec![Event::new(9, 1, "6:00 PM", "7:00 PM", "Dinner")];

        let grid = place(&rows, &slots, &events);
        assert!(grid.rows[0].cells.iter().all(|c| *c == CellOutcome::Empty));
        assert_eq!(
            grid.issues,
            vec![PlacementIssue::NotVisible {
                event: EntityId::Number(9)
            }]
        );
    }

    #[test]
    fn event_between_two_slots_is_invisible() {
        let slots = hourly("9:00 AM", "12:00 PM");
        let rows = vec![Row::new(1, "John")];
        let events = vec![Event::new(1, 1, "10:15 AM", "10:45 AM", "Coffee")];

        let grid = place(&rows, &slots, &events);
        assert_eq!(grid.anchor_count(), 0);
        assert!(matches!(grid.issues[..], [PlacementIssue::NotVisible { .. }]));
    }

    #[test]
    fn zero_duration_event_never_anchors() {
        let slots = hourly("9:00 AM", "12:00 PM");
        let rows = vec![Row::new(1, "John")];
        let events = vec![Event::new(1, 1, "10:00 AM", "10:00 AM", "Blink")];

        let grid = place(&rows, &slots, &events);
        assert!(grid.rows[0].cells.iter().all(|c| *c == CellOutcome::Empty));
        assert!(matches!(
            grid.issues[..],
            [PlacementIssue::EmptyInterval { .. }]
        ));
    }

    #[test]
    fn inverted_event_never_anchors() {
        let slots = hourly("9:00 AM", "12:00 PM");
        let rows = vec![Row::new(1, "John")];
        let events = vec![Event::new(1, 1, "11:00 AM", "9:00 AM", "Backwards")];

        let grid = place(&rows, &slots, &events);
        assert_eq!(grid.anchor_count(), 0);
    }

    #[test]
    fn unparsable_event_is_reported_and_never_matches() {
        let slots = hourly("9:00 AM", "12:00 PM");
        let rows = vec![Row::new(1, "John")];
        let events = vec![
            Event::new(1, 1, "nine o'clock", "10:00 AM", "Bad start"),
            Event::new(2, 1, "9:00 AM", "ten", "Bad end"),
        ];

        let grid = place(&rows, &slots, &events);
        assert_eq!(grid.anchor_count(), 0);
        assert_eq!(
            grid.issues,
            vec![
                PlacementIssue::UnparsableStart {
                    event: EntityId::Number(1),
                    value: "nine o'clock".into()
                },
                PlacementIssue::UnparsableEnd {
                    event: EntityId::Number(2),
                    value: "ten".into()
                },
            ]
        );
    }

    #[test]
    fn event_for_unknown_row_is_reported() {
        let slots = hourly("9:00 AM", "12:00 PM");
        let rows = vec![Row::new(1, "John")];
        let events = vec![Event::new(1, "1", "9:00 AM", "10:00 AM", "Wrong id type")];

        let grid = place(&rows, &slots, &events);
        assert_eq!(grid.anchor_count(), 0);
        assert_eq!(
            grid.issues,
            vec![PlacementIssue::UnknownRow {
                event: EntityId::Number(1),
                row: EntityId::from("1"),
            }]
        );
    }

    #[test]
    fn unparsable_slot_column_is_always_empty() {
        let slots = labels(&["9:00 AM", "lunch", "11:00 AM"]);
        let rows = vec![Row::new(1, "John")];
        let events = vec![Event::new(1, 1, "9:00 AM", "12:00 PM", "Block")];

        let grid = place(&rows, &slots, &events);
        assert_eq!(
            grid.rows[0].cells,
            vec![
                CellOutcome::Anchor { event: 0, span: 1 },
                CellOutcome::Empty,
                CellOutcome::Suppressed { event: 0 },
            ]
        );
        assert!(matches!(
            grid.issues[..],
            [PlacementIssue::UnparsableSlot { index: 1, .. }]
        ));
    }

    // ── Overlap and isolation ─────────────────────────────────────────────────

    #[test]
    fn overlapping_events_first_in_input_order_wins() {
        let slots = hourly("9:00 AM", "12:00 PM");
        let rows = vec![Row::new(1, "John")];
        let events = vec![
            Event::new(1, 1, "9:00 AM", "11:00 AM", "First"),
            Event::new(2, 1, "10:00 AM", "12:00 PM", "Second"),
        ];

        let grid = place(&rows, &slots, &events);
        assert_eq!(
            grid.rows[0].cells,
            vec![
                CellOutcome::Anchor { event: 0, span: 2 },
                CellOutcome::Suppressed { event: 0 },
                // Second matches here, but its anchor (10:00) is already behind.
                CellOutcome::Suppressed { event: 1 },
                CellOutcome::Empty,
            ]
        );
        assert_eq!(
            grid.issues,
            vec![PlacementIssue::NotVisible {
                event: EntityId::Number(2)
            }]
        );
    }

    #[test]
    fn reversing_overlap_order_changes_the_winner() {
        let slots = hourly("9:00 AM", "12:00 PM");
        let rows = vec![Row::new(1, "John")];
        let events = vec![
            Event::new(2, 1, "10:00 AM", "12:00 PM", "Second"),
            Event::new(1, 1, "9:00 AM", "11:00 AM", "First"),
        ];

        let grid = place(&rows, &slots, &events);
        let cells = &grid.rows[0].cells;
        assert_eq!(cells[0], CellOutcome::Anchor { event: 1, span: 2 });
        assert_eq!(cells[1], CellOutcome::Anchor { event: 0, span: 2 });
        assert_eq!(cells[2], CellOutcome::Suppressed { event: 0 });
    }

    #[test]
    fn rows_at_the_same_slot_do_not_interfere() {
        let slots = hourly("9:00 AM", "12:00 PM");
        let rows = vec![Row::new(1, "John"), Row::new(2, "Jane")];
        let events = vec![
            Event::new(1, 1, "9:00 AM", "11:00 AM", "John's"),
            Event::new(2, 2, "9:00 AM", "10:00 AM", "Jane's"),
        ];

        let together = place(&rows, &slots, &events);
        let john_alone = place(&rows[..1], &slots, &events[..1]);

        assert_eq!(together.rows[0].cells, john_alone.rows[0].cells);
        assert_eq!(together.cell(1, 0), Some(CellOutcome::Anchor { event: 1, span: 1 }));
        assert_eq!(together.cell(1, 1), Some(CellOutcome::Empty));
    }

    #[test]
    fn duplicate_row_ids_share_events() {
        let slots = hourly("9:00 AM", "10:00 AM");
        let rows = vec![Row::new(1, "John"), Row::new(1, "John (again)")];
        let events = vec![Event::new(1, 1, "9:00 AM", "10:00 AM", "Meeting")];

        let grid = place(&rows, &slots, &events);
        assert_eq!(grid.rows[0], grid.rows[1]);
    }

    // ── Purity ────────────────────────────────────────────────────────────────

    #[test]
    fn placement_is_silent_at_info_level() {
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();

        let grid = tracing::subscriber::with_default(subscriber, || {
            place(&demo_rows(), &half_hourly("9:00 AM", "5:30 PM"), &demo_events())
        });

        assert_eq!(grid.anchor_count(), 8);
        let output = captured.0.lock().unwrap();
        assert!(output.is_empty(), "{}", String::from_utf8_lossy(&output));
    }

    #[test]
    fn placement_is_idempotent() {
        let slots = half_hourly("9:00 AM", "5:30 PM");
        let rows = demo_rows();
        let events = demo_events();

        let placer = GridPlacer::default();
        let first = placer.place(&rows, &slots, &events);
        let second = placer.place(&rows, &slots, &events);
        assert_eq!(first, second);
    }

    #[test]
    fn placer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GridPlacer>();
        assert_send_sync::<GridPlacement>();
    }

    // ── Full demo grid ────────────────────────────────────────────────────────

    #[test]
    fn demo_schedule_fills_every_row_exactly() {
        let slots = half_hourly("9:00 AM", "5:30 PM");
        let rows = demo_rows();
        let events = demo_events();

        let grid = place(&rows, &slots, &events);

        assert!(grid.issues.is_empty(), "unexpected issues: {:?}", grid.issues);
        assert_eq!(grid.anchor_count(), events.len());
        for row in &grid.rows {
            assert_eq!(row.occupied_columns(), slots.len(), "row {}", row.row_id);
        }

        // Bob: Lunch Meeting 1:00–2:30 (3 columns), Code Review 4:30–5:30 (2 columns).
        let bob: Vec<(usize, usize, usize)> = grid.rows[3].anchors().collect();
        assert_eq!(
            bob,
            vec![
                (slot_index(&slots, "1:00 PM"), 4, 3),
                (slot_index(&slots, "4:30 PM"), 5, 2),
            ]
        );
    }

    #[test]
    fn twenty_four_hour_format_places_identically() {
        let slots = labels(&["13:00", "13:30", "14:00", "14:30"]);
        let rows = vec![Row::new(4, "Bob")];
        let events = vec![Event::new(5, 4, "13:00", "14:30", "Lunch Meeting")];

        let grid = compute_placement(&rows, &slots, &events, &TimeFormat::twenty_four_hour());
        assert_eq!(grid.cell(0, 0), Some(CellOutcome::Anchor { event: 0, span: 3 }));
        assert_eq!(grid.cell(0, 3), Some(CellOutcome::Empty));
    }

    #[test]
    fn empty_inputs_give_empty_grid() {
        let grid = place(&[], &[], &[]);
        assert!(grid.rows.is_empty());
        assert!(grid.issues.is_empty());

        let rows = vec![Row::new(1, "John")];
        let grid = place(&rows, &[], &[]);
        assert_eq!(grid.rows[0].cells, vec![]);
    }
}
