//! HTML `<table>` surface.
//!
//! Anchors become `<td colspan="N">`; suppressed slots emit no `<td>` at all,
//! which is what keeps the table rectangular.

use std::fmt::{self, Write};

use super::{CellKind, RenderedGrid};

/// Render `grid` as an HTML table.  All text is escaped.
pub fn to_html(grid: &RenderedGrid) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_table(&mut out, grid)?;
    Ok(out)
}

fn write_table(out: &mut String, grid: &RenderedGrid) -> fmt::Result {
    out.push_str("<table class=\"slotgrid\">\n  <thead>\n    <tr>");
    write!(out, "<th>{}</th>", escape(&grid.corner))?;
    for header in &grid.slot_headers {
        write!(out, "<th>{}</th>", escape(header))?;
    }
    out.push_str("</tr>\n  </thead>\n  <tbody>\n");

    for row in &grid.rows {
        write!(out, "    <tr><td class=\"row-header\">{}</td>", escape(&row.header))?;
        for cell in &row.cells {
            out.push_str("<td");
            if cell.span > 1 {
                write!(out, " colspan=\"{}\"", cell.span)?;
            }
            match cell.kind {
                CellKind::Event(index) => {
                    write!(out, " class=\"event\" data-event=\"{index}\"")?;
                    if let Some(color) = &cell.color {
                        write!(out, " data-color=\"{}\"", escape(color))?;
                    }
                }
                CellKind::Empty => out.push_str(" class=\"empty\""),
            }
            write!(out, ">{}</td>", escape(&cell.content))?;
        }
        out.push_str("</tr>\n");
    }

    out.push_str("  </tbody>\n</table>\n");
    Ok(())
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
