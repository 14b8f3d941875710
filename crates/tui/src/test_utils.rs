//! Buffer helpers shared by the widget and app tests.

use ratatui::buffer::Buffer;

/// Returns the symbols of row `y`, one per cell, with trailing blanks removed.
fn row_text(buf: &Buffer, y: u16) -> String {
    let row: String = (0..buf.area.width)
        .filter_map(|x| buf.cell((buf.area.x + x, buf.area.y + y)))
        .map(|cell| cell.symbol())
        .collect();
    row.trim_end_matches(' ').to_string()
}

/// Renders the buffer as text, one line per row.
///
/// Trailing blanks are trimmed so snapshots stay stable across widths.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| row_text(buf, y) + "\n")
        .collect()
}

/// Finds the cell where `needle` first starts, as absolute `(column, row)`.
///
/// Columns count cells rather than bytes, so coordinates can be fed
/// straight into hit-testing.
#[must_use]
pub(crate) fn position_of(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
    (0..buf.area.height).find_map(|y| {
        let line = row_text(buf, y);
        let byte = line.find(needle)?;
        let column = line[..byte].chars().count() as u16;
        Some((buf.area.x + column, buf.area.y + y))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{layout::Rect, style::Style};

    #[test]
    fn trailing_blanks_are_trimmed() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 2));
        buf.set_string(1, 1, "Ann", Style::default());
        assert_eq!(buffer_to_string(&buf), "\n Ann\n");
    }

    #[test]
    fn position_counts_cells_not_bytes() {
        let mut buf = Buffer::empty(Rect::new(2, 3, 12, 2));
        buf.set_string(2, 4, "‹ Mrs. ›", Style::default());
        assert_eq!(position_of(&buf, "Mrs."), Some((4, 4)));
        assert_eq!(position_of(&buf, "Dr."), None);
    }
}
