//! Employee form widget.
//!
//! Renders the draft held by [`FormState`] as two columns of labelled
//! fields below a Cancel/Save button row:
//!
//! ```text
//! ╭ Employee Information ──────────────────────────────────────╮
//! │                                      Cancel     Save       │
//! │                                                            │
//! │ First Name(s) *  Grace          Full Name            Grace │
//! │ Last Name *      Hopper         Gross Salary $PY     98 000│
//! │ Salutation *     ‹ Mrs. ›       Employee Profile Color ‹ … │
//! │ Gender *         ‹ Female ›                                │
//! │ Employee Id *    1906                                      │
//! ╰────────────────────────────────────────────────────────────╯
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};
use roster_protocol::format::color_to_background_class_safe;

use crate::form_state::{FormField, FormState};
use crate::theme::style_for_classes;

/// Classes of the Cancel button.
pub const CANCEL_BUTTON_CLASSES: &str = "bg-gray-300 hover:bg-gray-400 mx-2 px-4 rounded";

/// Label of the read-only full name row.
pub const FULL_NAME_LABEL: &str = "Full Name";

/// Fields of the left column, top to bottom.
const LEFT_COLUMN: [FormField; 5] = [
    FormField::FirstName,
    FormField::LastName,
    FormField::Salutation,
    FormField::Gender,
    FormField::EmployeeId,
];

const LEFT_LABEL_WIDTH: u16 = 17;
const RIGHT_LABEL_WIDTH: u16 = 23;

/// Screen regions of the last rendered form, for mouse hit-testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormLayout {
    /// Each interactive field with the area it occupies.
    pub fields: Vec<(FormField, Rect)>,
}

impl FormLayout {
    /// Returns the field rendered at a screen position.
    #[must_use]
    pub fn field_at(&self, column: u16, row: u16) -> Option<FormField> {
        let position = Position::new(column, row);
        self.fields
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(field, _)| *field)
    }

    /// Returns the area of a field.
    #[must_use]
    pub fn area_of(&self, field: FormField) -> Option<Rect> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rect)| *rect)
    }
}

/// Renders the employee form.
///
/// `focused` tells whether the form owns keyboard focus; the focused field
/// is only highlighted then.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use roster_tui::form_state::{EmployeeDraft, FormField, FormState};
/// use roster_tui::widgets::render_form;
///
/// let form = FormState::new(EmployeeDraft::blank());
/// let area = Rect::new(0, 0, 80, 9);
/// let mut buf = Buffer::empty(area);
///
/// let layout = render_form(&form, true, area, &mut buf);
/// assert!(layout.area_of(FormField::Save).is_some());
/// ```
pub fn render_form(form: &FormState, focused: bool, area: Rect, buf: &mut Buffer) -> FormLayout {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = if form.is_dirty() {
        " Employee Information (edited) "
    } else {
        " Employee Information "
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);
    block.render(area, buf);

    let mut layout = FormLayout::default();
    if inner.height == 0 {
        return layout;
    }

    let active = focused.then(|| form.focused());

    render_buttons(form, active, inner, buf, &mut layout);

    let rows = Rect {
        y: inner.y.saturating_add(2),
        height: inner.height.saturating_sub(2),
        ..inner
    };
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(rows);

    for (offset, field) in LEFT_COLUMN.into_iter().enumerate() {
        let Some(row) = row_rect(left, offset) else {
            break;
        };
        render_field(form, field, active, LEFT_LABEL_WIDTH, row, buf);
        layout.fields.push((field, row));
    }

    if let Some(row) = row_rect(right, 0) {
        let full_name = Line::from(vec![
            label_span(FULL_NAME_LABEL, RIGHT_LABEL_WIDTH, false),
            Span::styled(
                form.full_name(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]);
        full_name.render(row, buf);
    }
    for (offset, field) in [FormField::GrossSalary, FormField::ProfileColor]
        .into_iter()
        .enumerate()
    {
        let Some(row) = row_rect(right, offset + 1) else {
            break;
        };
        render_field(form, field, active, RIGHT_LABEL_WIDTH, row, buf);
        layout.fields.push((field, row));
    }

    layout
}

/// Returns the one-row rect at `offset` within `column`, if it fits.
fn row_rect(column: Rect, offset: usize) -> Option<Rect> {
    let offset = u16::try_from(offset).ok()?;
    (offset < column.height).then(|| Rect::new(column.x, column.y + offset, column.width, 1))
}

/// Draws Cancel and Save right-aligned on the first row.
fn render_buttons(
    form: &FormState,
    active: Option<FormField>,
    inner: Rect,
    buf: &mut Buffer,
    layout: &mut FormLayout,
) {
    let save_classes = form.save_button_classes();
    let buttons = [
        (FormField::Cancel, "  Cancel  ", CANCEL_BUTTON_CLASSES),
        (FormField::Save, "  Save  ", save_classes.as_str()),
    ];

    // mx-2 on each button
    let width: u16 = buttons
        .iter()
        .map(|(_, label, _)| label.chars().count() as u16 + 2)
        .sum();
    let mut x = inner.right().saturating_sub(width).max(inner.x);

    for (field, label, classes) in buttons {
        x += 1;
        let label_width = label.chars().count() as u16;
        if x + label_width > inner.right() {
            break;
        }
        let hovered = active == Some(field);
        let mut style = style_for_classes(classes, hovered);
        if hovered {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        buf.set_string(x, inner.y, label, style);
        layout
            .fields
            .push((field, Rect::new(x, inner.y, label_width, 1)));
        x += label_width + 1;
    }
}

fn label_span(label: &str, width: u16, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Span::styled(format!(" {label:<w$}", w = usize::from(width)), style)
}

fn render_field(
    form: &FormState,
    field: FormField,
    active: Option<FormField>,
    label_width: u16,
    area: Rect,
    buf: &mut Buffer,
) {
    let focused = active == Some(field);
    let draft = form.draft();

    let value = match field {
        FormField::Salutation => choice_span(draft.salutation.label(), Style::default(), focused),
        FormField::Gender => {
            let style = if form.gender_editable() {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            choice_span(draft.gender.label().to_string(), style, focused)
        }
        FormField::ProfileColor => {
            let classes = color_to_background_class_safe(draft.color.as_str());
            choice_span(draft.color.label(), style_for_classes(classes, false), focused)
        }
        _ => {
            let text = form.text(field).unwrap_or_default();
            if focused {
                Span::styled(
                    format!("{text}_"),
                    Style::default().bg(Color::DarkGray).fg(Color::White),
                )
            } else {
                Span::styled(
                    text.to_string(),
                    Style::default().add_modifier(Modifier::UNDERLINED),
                )
            }
        }
    };

    Line::from(vec![label_span(field.label(), label_width, focused), value]).render(area, buf);
}

fn choice_span(label: String, style: Style, focused: bool) -> Span<'static> {
    if focused {
        Span::styled(format!("‹ {label} ›"), style.add_modifier(Modifier::BOLD))
    } else {
        Span::styled(format!("  {label}  "), style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_state::EmployeeDraft;
    use crate::test_utils::{buffer_to_string, position_of};
    use roster_protocol::{Employee, Gender, ProfileColor, Salutation};

    fn grace() -> FormState {
        FormState::new(EmployeeDraft::from_employee(&Employee {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            employee_id: 1906,
            gross_salary: 98_000,
            salutation: Salutation::Mrs,
            gender: Gender::F,
            color: ProfileColor::Red,
        }))
    }

    fn render(form: &FormState, focused: bool) -> (Buffer, FormLayout) {
        let area = Rect::new(0, 0, 90, 9);
        let mut buf = Buffer::empty(area);
        let layout = render_form(form, focused, area, &mut buf);
        (buf, layout)
    }

    #[test]
    fn renders_labels_and_values() {
        let (buf, _) = render(&grace(), false);
        let content = buffer_to_string(&buf);

        for field in FormField::all() {
            assert!(content.contains(field.label()), "missing {:?}", field);
        }
        assert!(content.contains(FULL_NAME_LABEL));
        assert!(content.contains("Grace Hopper"));
        assert!(content.contains("98 000"));
        assert!(content.contains("Mrs."));
        assert!(content.contains("Female"));
        assert!(content.contains("Red"));
    }

    #[test]
    fn every_interactive_field_is_hit_testable() {
        let (_, layout) = render(&grace(), true);

        for field in FormField::all() {
            let rect = layout.area_of(*field).unwrap();
            assert_eq!(layout.field_at(rect.x, rect.y), Some(*field));
        }
    }

    #[test]
    fn full_name_row_is_not_interactive() {
        let (buf, layout) = render(&grace(), true);
        let (column, row) = position_of(&buf, FULL_NAME_LABEL).unwrap();

        assert_eq!(layout.field_at(column, row), None);
    }

    #[test]
    fn focused_choice_shows_arrows() {
        let mut form = grace();
        form.focus(FormField::Salutation);

        let (buf, _) = render(&form, true);
        assert!(buffer_to_string(&buf).contains("‹ Mrs. ›"));

        let (buf, _) = render(&form, false);
        assert!(!buffer_to_string(&buf).contains("‹"));
    }

    #[test]
    fn save_button_uses_draft_color() {
        let form = grace();
        let (buf, layout) = render(&form, false);
        let save = layout.area_of(FormField::Save).unwrap();

        let expected = style_for_classes(&form.save_button_classes(), false);
        let cell = buf.cell((save.x, save.y)).unwrap();
        assert_eq!(Some(cell.bg), expected.bg);
        assert_eq!(Some(cell.fg), expected.fg);
    }

    #[test]
    fn dirty_form_marks_title() {
        let mut form = grace();
        let (buf, _) = render(&form, false);
        assert!(!buffer_to_string(&buf).contains("(edited)"));

        form.set_text(FormField::LastName, "Murray");
        let (buf, _) = render(&form, false);
        assert!(buffer_to_string(&buf).contains("(edited)"));
    }

    #[test]
    fn short_area_drops_rows_without_panicking() {
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        let layout = render_form(&grace(), true, area, &mut buf);

        assert!(layout.area_of(FormField::Save).is_some());
        assert!(layout.area_of(FormField::EmployeeId).is_none());
    }
}
