//! Help overlay widget.
//!
//! This module provides the help overlay that lists the keybindings of the
//! table and the form.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 40;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 23;

/// Key bindings listed under "Table".
const TABLE_KEYS: &[(&str, &str)] = &[
    ("↑ ↓", "Select row"),
    ("Enter", "Edit selected row"),
    ("a", "Add user"),
    ("Esc", "Clear selection"),
    ("r", "Refresh"),
];

/// Key bindings listed under "Form".
const FORM_KEYS: &[(&str, &str)] = &[
    ("Tab ↓", "Next field"),
    ("S-Tab ↑", "Previous field"),
    ("← →", "Change choice"),
    ("Enter", "Press button"),
    ("Ctrl+S", "Save"),
    ("Esc", "Back to table"),
];

/// Key bindings available everywhere.
const GLOBAL_KEYS: &[(&str, &str)] = &[("Ctrl+C", "Quit"), ("? F1", "Toggle help")];

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content, clearing the
/// area behind it first.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use roster_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);
    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    for (title, keys) in [
        ("Table", TABLE_KEYS),
        ("Form", FORM_KEYS),
        ("Anywhere", GLOBAL_KEYS),
    ] {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {title}"), header_style)));
        lines.extend(keys.iter().map(|(key, action)| key_line(key, action)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}

fn key_line(key: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<11}"), Style::default().fg(Color::Green)),
        Span::styled(action.to_string(), Style::default().fg(Color::White)),
    ])
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn centered_rect_positions_correctly() {
        let area = Rect::new(0, 0, 80, 24);
        let centered = centered_rect(20, 10, area);

        assert_eq!(centered.x, 30);
        assert_eq!(centered.y, 7);
        assert_eq!(centered.width, 20);
        assert_eq!(centered.height, 10);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 12);
        let centered = centered_rect(100, 50, area);

        assert_eq!(centered, Rect::new(0, 0, 40, 12));
    }

    #[test]
    fn content_fits_the_panel() {
        // Borders take two rows.
        assert!(build_help_lines().len() <= usize::from(HELP_HEIGHT - 2));
    }

    #[test]
    fn render_help_overlay_creates_output() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_help_overlay(area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Help"));
        assert!(content.contains("Table"));
        assert!(content.contains("Form"));
        assert!(content.contains("Press any key to close"));
    }

    #[test]
    fn render_help_overlay_handles_small_area() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);

        render_help_overlay(area, &mut buf);
    }

    #[test]
    fn build_help_lines_contains_all_keybindings() {
        let content: String = build_help_lines()
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        for (key, action) in TABLE_KEYS.iter().chain(FORM_KEYS).chain(GLOBAL_KEYS) {
            assert!(content.contains(key), "missing key {key}");
            assert!(content.contains(action), "missing action {action}");
        }
    }
}
