//! ASCII table rendering for row sets.
//!
//! The layout is fixed: a `+`/`-` border, header values centered within
//! their column (the odd leftover space goes after the value), data
//! values right-justified, and a 2-space gutter on each side of every
//! cell. Column widths are sized to the widest value in each column,
//! header included.

use crate::rowset::RowSet;

/// Renders a row set as a bordered ASCII table.
///
/// A row set with zero data rows still renders the header block followed
/// by two border lines. The output carries no trailing newline; rendering
/// the same row set twice yields identical text.
///
/// # Examples
///
/// ```
/// use rowgrid_core::{RowSet, render_table};
///
/// let mut rows = RowSet::new(["a", "bb", "c"]).unwrap();
/// rows.push_row(["1", "22", "333"]).unwrap();
///
/// assert_eq!(
///     render_table(&rows),
///     "+-----+------+-------+\n\
///      |  a  |  bb  |   c   |\n\
///      +-----+------+-------+\n\
///      |  1  |  22  |  333  |\n\
///      +-----+------+-------+"
/// );
/// ```
pub fn render_table(rows: &RowSet) -> String {
    let widths = column_widths(rows);
    let border = border_line(&widths);

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&header_line(rows.header(), &widths));
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for row in rows.rows() {
        out.push_str(&data_line(row, &widths));
        out.push('\n');
    }
    out.push_str(&border);
    out
}

/// Per-column width: the widest value in the column, header included.
fn column_widths(rows: &RowSet) -> Vec<usize> {
    let mut widths: Vec<usize> = rows.header().iter().map(String::len).collect();
    for row in rows.rows() {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.len());
        }
    }
    widths
}

/// `+` followed by `width + 4` dashes per column, closed with `+`.
fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 4));
        line.push('+');
    }
    line
}

/// Header cells are centered; the extra space of an odd gap goes after.
fn header_line(header: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (value, width) in header.iter().zip(widths) {
        let gap = width - value.len();
        let before = gap / 2;
        let after = gap - before;
        line.push_str("|  ");
        line.push_str(&" ".repeat(before));
        line.push_str(value);
        line.push_str(&" ".repeat(after));
        line.push_str("  ");
    }
    line.push('|');
    line
}

/// Data cells are right-justified within the column width.
fn data_line(row: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (value, width) in row.iter().zip(widths) {
        line.push_str("|  ");
        line.push_str(&" ".repeat(width - value.len()));
        line.push_str(value);
        line.push_str("  ");
    }
    line.push('|');
    line
}
