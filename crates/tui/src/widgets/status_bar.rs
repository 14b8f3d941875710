//! Status bar rendering widget.
//!
//! This module renders the footer: the latest notice, if any, followed by
//! the keybinding hints for whichever pane has focus.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::state::{Focus, Notice, NoticeKind};

/// Returns the key hints shown for a focus area.
#[must_use]
pub fn hints(focus: Focus) -> &'static [(&'static str, &'static str)] {
    match focus {
        Focus::Table => &[
            ("↑↓", "Select"),
            ("Enter", "Edit"),
            ("a", "Add"),
            ("r", "Refresh"),
            ("?", "Help"),
        ],
        Focus::Form => &[
            ("Tab", "Next"),
            ("←→", "Choose"),
            ("Ctrl+S", "Save"),
            ("Esc", "Table"),
        ],
    }
}

/// Renders the status bar.
///
/// # Layout
///
/// ```text
/// +----------------------------------------------------------+
/// | Saved Grace Hopper │ ↑↓ Select  Enter Edit  a Add  ...   |
/// +----------------------------------------------------------+
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use roster_tui::Focus;
/// use roster_tui::state::Notice;
/// use roster_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(Focus::Table, Some(&Notice::info("Saved")), area, &mut buf);
/// ```
pub fn render_status_bar(focus: Focus, notice: Option<&Notice>, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let mut spans = Vec::new();
    if let Some(notice) = notice {
        let color = match notice.kind {
            NoticeKind::Info => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        spans.push(Span::styled(
            notice.text.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    }

    for (key, action) in hints(focus) {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}  "), text_style));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}
