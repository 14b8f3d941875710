//! Employee table widget.
//!
//! Renders the employee list with its header row, one row per employee in
//! server order, and two blank filler rows. Row backgrounds follow the
//! selection and an alternating gray/white stripe, expressed as class
//! strings and resolved through [`crate::theme`].

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};
use roster_client::ListStatus;
use roster_protocol::Employee;
use roster_protocol::format::color_to_background_class;

use crate::theme::style_for_classes;

/// Text shown in place of the table when the list could not be loaded.
pub const LOAD_ERROR_TEXT: &str = "Error loading users";

/// Label of the add-new control.
pub const ADD_BUTTON_LABEL: &str = "[ Add User ]";

/// Classes of the add-new control.
pub const ADD_BUTTON_CLASSES: &str = "bg-gray-300 hover:bg-gray-400 mx-2 px-4 rounded";

/// Column headings, in display order.
pub const COLUMN_HEADINGS: [&str; 5] = [
    "Employee Id",
    "First Name",
    "Last Name",
    "Salutation",
    "Profile Color",
];

/// Returns the stripe class for a row index.
#[must_use]
pub fn parity_class(index: usize) -> &'static str {
    if index % 2 == 0 { "bg-gray-100" } else { "bg-white" }
}

/// Returns the classes of a data row.
///
/// The selected row takes the employee's color background as is, which is
/// empty for `DEFAULT`. Other rows are striped and clickable.
///
/// # Examples
///
/// ```
/// use roster_protocol::{Employee, Gender, ProfileColor, Salutation};
/// use roster_tui::widgets::table::row_class;
///
/// let employee = Employee {
///     first_name: "Ada".to_string(),
///     last_name: "Lovelace".to_string(),
///     employee_id: 7,
///     gross_salary: 1,
///     salutation: Salutation::Dr,
///     gender: Gender::F,
///     color: ProfileColor::Green,
/// };
///
/// assert_eq!(row_class(0, Some(0), &employee), "bg-green-400");
/// assert_eq!(row_class(1, Some(0), &employee), "bg-white cursor-pointer");
/// ```
#[must_use]
pub fn row_class(index: usize, selected: Option<usize>, employee: &Employee) -> String {
    if selected == Some(index) {
        color_to_background_class(employee.color.as_str()).to_string()
    } else {
        format!("{} cursor-pointer", parity_class(index))
    }
}

/// Returns the classes of the two blank rows that follow `len` data rows.
#[must_use]
pub fn filler_row_classes(len: usize) -> [&'static str; 2] {
    [parity_class(len), parity_class(len + 1)]
}

/// Returns the cells of an employee row.
#[must_use]
pub fn row_cells(employee: &Employee) -> [String; 5] {
    [
        employee.employee_id.to_string(),
        employee.first_name.clone(),
        employee.last_name.clone(),
        employee.salutation.label(),
        employee.color.label(),
    ]
}

/// Screen regions of the last rendered table, for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableLayout {
    /// Area of the data and filler rows.
    pub body: Rect,
    /// Index of the first visible row.
    pub offset: usize,
    /// Number of employee rows.
    pub rows: usize,
    /// Area of the add-new control.
    pub add_button: Rect,
}

impl TableLayout {
    /// Returns the employee index rendered at a screen position.
    #[must_use]
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.body.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.offset + usize::from(row - self.body.y);
        (index < self.rows).then_some(index)
    }

    /// Returns whether a screen position is on the add-new control.
    #[must_use]
    pub fn is_add_button(&self, column: u16, row: u16) -> bool {
        self.add_button.contains(Position::new(column, row))
    }
}

/// Renders the employee table.
///
/// `offset` is the first visible row from the previous render; it is
/// adjusted to keep the selection visible and returned in the layout.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use roster_client::ListStatus;
/// use roster_tui::widgets::render_table;
///
/// let area = Rect::new(0, 0, 80, 10);
/// let mut buf = Buffer::empty(area);
///
/// let layout = render_table(ListStatus::Ready(&[]), None, true, 0, area, &mut buf);
/// assert_eq!(layout.rows, 0);
/// ```
pub fn render_table(
    status: ListStatus<'_>,
    selected: Option<usize>,
    focused: bool,
    offset: usize,
    area: Rect,
    buf: &mut Buffer,
) -> TableLayout {
    let employees = match status {
        ListStatus::Loading => return TableLayout::default(),
        ListStatus::Failed(_) => {
            Paragraph::new(LOAD_ERROR_TEXT).render(area, buf);
            return TableLayout::default();
        }
        ListStatus::Ready(employees) => employees,
    };

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(Span::styled(
            " Current Employees ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);
    block.render(area, buf);

    let add_button = render_add_button(area, buf);

    let header = Row::new(COLUMN_HEADINGS).style(
        style_for_classes("bg-gray-300", false).add_modifier(Modifier::BOLD),
    );

    let mut rows: Vec<Row> = employees
        .iter()
        .enumerate()
        .map(|(index, employee)| {
            let classes = row_class(index, selected, employee);
            Row::new(row_cells(employee)).style(style_for_classes(&classes, false))
        })
        .collect();
    rows.extend(
        filler_row_classes(employees.len())
            .into_iter()
            .map(|classes| Row::new([""; 5]).style(style_for_classes(classes, false))),
    );

    let widths = [
        Constraint::Length(12),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Length(14),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .highlight_symbol("▶ ");

    let mut state = TableState::default()
        .with_offset(offset)
        .with_selected(selected.filter(|idx| *idx < employees.len()));
    StatefulWidget::render(table, inner, buf, &mut state);

    TableLayout {
        body: Rect {
            y: inner.y.saturating_add(1),
            height: inner.height.saturating_sub(1),
            ..inner
        },
        offset: state.offset(),
        rows: employees.len(),
        add_button,
    }
}

/// Draws the add-new control on the table's top border, right-aligned.
fn render_add_button(area: Rect, buf: &mut Buffer) -> Rect {
    let width = ADD_BUTTON_LABEL.chars().count() as u16;
    if area.width < width + 4 || area.height == 0 {
        return Rect::default();
    }

    let button = Rect::new(area.right() - width - 2, area.y, width, 1);
    buf.set_string(
        button.x,
        button.y,
        ADD_BUTTON_LABEL,
        style_for_classes(ADD_BUTTON_CLASSES, false),
    );
    button
}
