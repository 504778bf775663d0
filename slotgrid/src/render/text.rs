//! Plain-text table surface.
//!
//! Every slot column has the same width; an anchor spanning `n` slots takes
//! `n` columns plus the separators between them, so spanned cells line up
//! with the header.  Widths are terminal display columns, so wide
//! characters count twice.
//!
//! ```text
//! | User | 9:00 AM                     | 10:00 AM |
//! |------|-----------------------------|----------|
//! | John | Meeting (9:00 AM - 10:00 AM)           |
//! ```

use unicode_width::UnicodeWidthStr;

use super::{CellKind, RenderedGrid};

const SEPARATOR: &str = " | ";

/// Render `grid` as a pipe-delimited text table, one line per row.
pub fn to_text(grid: &RenderedGrid) -> String {
    let col = column_width(grid);
    let head = std::iter::once(grid.corner.as_str())
        .chain(grid.rows.iter().map(|r| r.header.as_str()))
        .map(width_of)
        .max()
        .unwrap_or(0);
    let columns = grid.slot_headers.len();

    let mut out = String::new();

    let header: Vec<String> = grid
        .slot_headers
        .iter()
        .map(|h| pad(h, col))
        .collect();
    push_line(&mut out, &pad(&grid.corner, head), &header);

    let rule: Vec<String> = (0..columns).map(|_| "-".repeat(col)).collect();
    push_line(&mut out, &"-".repeat(head), &rule);

    for row in &grid.rows {
        let mut used = 0;
        let mut cells: Vec<String> = Vec::with_capacity(row.cells.len());
        for cell in &row.cells {
            let span = cell.span.max(1);
            cells.push(pad(&cell.content, spanned_width(col, span)));
            used += span;
        }
        // Rows left short by overlapping events are padded to full width.
        for _ in used..columns {
            cells.push(pad("", col));
        }
        push_line(&mut out, &pad(&row.header, head), &cells);
    }

    out
}

/// Narrowest column width that fits every header and every cell.
fn column_width(grid: &RenderedGrid) -> usize {
    let headers = grid.slot_headers.iter().map(|h| width_of(h));
    let cells = grid.rows.iter().flat_map(|r| &r.cells).map(|c| {
        let span = c.span.max(1);
        match c.kind {
            CellKind::Event(_) => {
                let inner = width_of(&c.content).saturating_sub(SEPARATOR.len() * (span - 1));
                inner.div_ceil(span)
            }
            CellKind::Empty => width_of(&c.content),
        }
    });
    headers.chain(cells).max().unwrap_or(0).max(1)
}

fn spanned_width(col: usize, span: usize) -> usize {
    col * span + SEPARATOR.len() * (span - 1)
}

fn width_of(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

fn pad(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(s.len() + width);
    out.push_str(s);
    out.push_str(&" ".repeat(width.saturating_sub(width_of(s))));
    out
}

fn push_line(out: &mut String, head: &str, cells: &[String]) {
    out.push_str("| ");
    out.push_str(head);
    for cell in cells {
        out.push_str(SEPARATOR);
        out.push_str(cell);
    }
    out.push_str(" |\n");
}

// ── Tests ─────────────────────────────────────────────────────────────────────
