//! Presentation layer: turns a [`GridPlacement`] into drawable cells.
//!
//! Placement only decides *where* things go.  What a cell shows comes from a
//! [`CellRenderer`] strategy; every method has a default, so callers override
//! only the pieces they care about (a custom row header, a custom empty
//! cell, …).  Two output surfaces consume the resulting [`RenderedGrid`]:
//! [`text::to_text`] and [`html::to_html`].
//!
//! User activation (clicks) is routed through [`GridView::activate`], which
//! fires at most one [`InteractionHandler`] callback per activation.

pub mod html;
pub mod text;

use tracing::debug;

use crate::model::{Event, Row};
use crate::placement::{CellOutcome, GridPlacement};
use crate::time::TimeFormat;

// ── Strategies ────────────────────────────────────────────────────────────────

/// Content strategy for every kind of grid cell.
pub trait CellRenderer {
    /// Left-most header cell of a row.
    fn row_header(&self, row: &Row) -> String {
        row.name.clone()
    }

    /// Column header for one slot.
    fn slot_header(&self, label: &str) -> String {
        label.to_string()
    }

    /// Content of an anchor cell: the title and a `start - end` badge.
    ///
    /// Times are re-printed through `format` so `09:00 AM` shows as
    /// `9:00 AM`; labels that do not parse are shown verbatim.
    fn event_cell(&self, _row: &Row, event: &Event, format: &TimeFormat) -> String {
        let start = format
            .normalize(&event.start_time)
            .unwrap_or_else(|| event.start_time.clone());
        let end = format
            .normalize(&event.end_time)
            .unwrap_or_else(|| event.end_time.clone());
        format!("{} ({start} - {end})", event.title)
    }

    /// Content of an empty cell.
    fn empty_cell(&self, _row: &Row, _slot_label: &str, _slot_index: usize) -> String {
        String::new()
    }
}

/// The stock strategy: every method at its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCells;

impl CellRenderer for DefaultCells {}

/// Callbacks for user activation of grid cells.  Both default to no-ops.
pub trait InteractionHandler {
    fn on_event_click(&mut self, _event: &Event) {}

    fn on_cell_click(&mut self, _row: &Row, _slot_label: &str) {}
}

/// What [`GridView::activate`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// `on_event_click` fired for the event at this input index.
    Event(usize),
    /// `on_cell_click` fired for an empty cell.
    Cell,
    /// Suppressed or out-of-range cell: no callback.
    Ignored,
}

// ── Rendered output ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Event anchor; carries the input index of the event.
    Event(usize),
    Empty,
}

/// One drawable cell.  Suppressed cells have no `RenderedCell` at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCell {
    pub slot_index: usize,
    /// Columns occupied (`colspan`).
    pub span: usize,
    pub kind: CellKind,
    pub content: String,
    /// Palette name of the event, if any.
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub header: String,
    pub cells: Vec<RenderedCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGrid {
    /// Title of the row-header column.
    pub corner: String,
    pub slot_headers: Vec<String>,
    pub rows: Vec<RenderedRow>,
}

// ── GridView ──────────────────────────────────────────────────────────────────

/// Borrowed bundle of everything needed to draw or interact with a grid.
///
/// `placement` must have been computed from these same `rows`, `slots` and
/// `events`; indices inside it refer to them.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    pub rows: &'a [Row],
    pub slots: &'a [String],
    pub events: &'a [Event],
    pub placement: &'a GridPlacement,
    pub format: &'a TimeFormat,
}

impl<'a> GridView<'a> {
    pub fn new(
        rows: &'a [Row],
        slots: &'a [String],
        events: &'a [Event],
        placement: &'a GridPlacement,
        format: &'a TimeFormat,
    ) -> Self {
        Self {
            rows,
            slots,
            events,
            placement,
            format,
        }
    }

    /// Map every visible cell through `renderer`.
    pub fn layout(&self, renderer: &dyn CellRenderer) -> RenderedGrid {
        let slot_headers = self.slots.iter().map(|s| renderer.slot_header(s)).collect();

        let rows = self
            .rows
            .iter()
            .zip(&self.placement.rows)
            .map(|(row, placed)| RenderedRow {
                header: renderer.row_header(row),
                cells: placed
                    .visible_cells()
                    .filter_map(|(slot_index, outcome)| {
                        self.render_cell(renderer, row, slot_index, outcome)
                    })
                    .collect(),
            })
            .collect();

        RenderedGrid {
            corner: "User".to_string(),
            slot_headers,
            rows,
        }
    }

    fn render_cell(
        &self,
        renderer: &dyn CellRenderer,
        row: &Row,
        slot_index: usize,
        outcome: CellOutcome,
    ) -> Option<RenderedCell> {
        let label = self.slots.get(slot_index)?;
        let cell = match outcome {
            CellOutcome::Anchor { event, span } => {
                let ev = self.events.get(event)?;
                RenderedCell {
                    slot_index,
                    span,
                    kind: CellKind::Event(event),
                    content: renderer.event_cell(row, ev, self.format),
                    color: ev.color.clone(),
                }
            }
            CellOutcome::Empty => RenderedCell {
                slot_index,
                span: 1,
                kind: CellKind::Empty,
                content: renderer.empty_cell(row, label, slot_index),
                color: None,
            },
            CellOutcome::Suppressed { .. } => return None,
        };
        Some(cell)
    }

    /// Route an activation of cell `(row_index, slot_index)` to `handler`.
    pub fn activate(
        &self,
        row_index: usize,
        slot_index: usize,
        handler: &mut dyn InteractionHandler,
    ) -> Activation {
        let (Some(row), Some(label), Some(outcome)) = (
            self.rows.get(row_index),
            self.slots.get(slot_index),
            self.placement.cell(row_index, slot_index),
        ) else {
            return Activation::Ignored;
        };

        match outcome {
            CellOutcome::Anchor { event, .. } => match self.events.get(event) {
                Some(ev) => {
                    debug!(row = %row.id, slot = %label, event = %ev.id, "event activated");
                    handler.on_event_click(ev);
                    Activation::Event(event)
                }
                None => Activation::Ignored,
            },
            CellOutcome::Empty => {
                debug!(row = %row.id, slot = %label, "empty cell activated");
                handler.on_cell_click(row, label);
                Activation::Cell
            }
            CellOutcome::Suppressed { .. } => Activation::Ignored,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
