//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: event handling, state updates, background
//! requests against the employee endpoint, and rendering.
//!
//! `update` never performs I/O. Work that needs the network is queued as an
//! [`Effect`]; the run loop drains the queue, spawns a task per effect, and
//! feeds the task's completion back through `update` as a [`Message`].

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use roster_client::{EmployeeClient, FetchTicket};
use roster_protocol::{Employee, Message};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    AppState, Focus,
    event::{event_to_message, poll_event},
    form_state::FormField,
    layout::{FORM_HEIGHT, HEADER_HEIGHT, MIN_HEIGHT, MIN_WIDTH, STATUS_BAR_HEIGHT},
    state::Notice,
    terminal::AppTerminal,
    widgets::{
        FormLayout, TableLayout, render_form, render_help_overlay, render_status_bar,
        render_table,
    },
};

/// Background work requested by [`App::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the employee list under the given ticket.
    FetchEmployees(FetchTicket),
    /// Create an employee.
    CreateEmployee(Employee),
}

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Effects queued by `update`, not yet dispatched.
    pending: Vec<Effect>,
    /// A create request is in flight.
    saving: bool,
    /// First visible table row, kept between renders.
    table_offset: usize,
    /// Table regions from the last render, for click hit-testing.
    table_layout: TableLayout,
    /// Form regions from the last render, for click hit-testing.
    form_layout: FormLayout,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates the application and queues the initial list fetch.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_tui::App;
    /// use roster_tui::app::Effect;
    ///
    /// let mut app = App::new();
    /// let effects = app.take_effects();
    /// assert!(matches!(effects.as_slice(), [Effect::FetchEmployees(_)]));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut app = Self {
            state: AppState::new(),
            should_quit: false,
            pending: Vec::new(),
            saving: false,
            table_offset: 0,
            table_layout: TableLayout::default(),
            form_layout: FormLayout::default(),
        };
        if let Some(ticket) = app.state.store.fetch() {
            app.pending.push(Effect::FetchEmployees(ticket));
        }
        app
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns whether the application has been asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Removes and returns the queued effects.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.pending)
    }

    /// Updates the application state based on a message.
    ///
    /// Completions are always applied. When the help overlay is visible,
    /// other messages dismiss it instead of their normal action; only
    /// `Quit` and `ToggleHelp` work normally.
    pub fn update(&mut self, msg: Message) {
        if msg.is_terminating() {
            self.should_quit = true;
            return;
        }

        if self.state.help_visible && !msg.is_completion() {
            if matches!(msg, Message::ToggleHelp | Message::Escape) {
                self.state.toggle_help();
            } else {
                let _ = self.state.dismiss_help();
            }
            return;
        }

        match msg {
            Message::EmployeesLoaded { ticket, result } => {
                self.on_employees_loaded(FetchTicket::from_generation(ticket), result);
            }
            Message::EmployeeSaved { result } => {
                self.on_employee_saved(result);
            }
            Message::ToggleHelp => {
                self.state.toggle_help();
            }
            Message::Refresh => {
                if let Some(ticket) = self.state.store.fetch() {
                    self.pending.push(Effect::FetchEmployees(ticket));
                }
            }
            Message::AddNew => {
                self.start_add();
            }
            Message::ClickAt { column, row } => {
                self.handle_click(column, row);
            }
            Message::Save => {
                self.submit();
            }
            Message::Cancel => {
                self.state.form.cancel();
            }
            msg => match self.state.focus {
                Focus::Table => self.update_table(msg),
                Focus::Form => self.update_form(msg),
            },
        }
    }

    fn update_table(&mut self, msg: Message) {
        match msg {
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::Escape => self.state.select(None),
            Message::Select | Message::NextField | Message::PrevField => {
                self.state.focus = Focus::Form;
            }
            _ => {}
        }
    }

    fn update_form(&mut self, msg: Message) {
        match msg {
            Message::Escape => self.state.focus = Focus::Table,
            Message::NextField => self.state.form.next_field(),
            Message::PrevField => self.state.form.prev_field(),
            Message::CycleChoice { delta } => self.state.form.cycle_choice(delta),
            Message::Input { ch } => self.state.form.input_char(ch),
            Message::Backspace => self.state.form.backspace(),
            Message::Select => self.activate(self.state.form.focused()),
            _ => {}
        }
    }

    /// Performs the action of a form field: press a button, step a choice,
    /// or move on from a text input.
    fn activate(&mut self, field: FormField) {
        match field {
            FormField::Save => self.submit(),
            FormField::Cancel => self.state.form.cancel(),
            field if field.is_choice() => self.state.form.cycle_choice(1),
            _ => self.state.form.next_field(),
        }
    }

    /// Clears the selection and moves to the first form field.
    fn start_add(&mut self) {
        self.state.select(None);
        self.state.focus = Focus::Form;
        self.state.form.focus(FormField::FirstName);
    }

    /// Queues a create request for the current draft.
    ///
    /// Does nothing while an earlier create is still in flight.
    fn submit(&mut self) {
        if self.saving {
            debug!("save already in flight");
            return;
        }
        match self.state.form.to_employee() {
            Ok(employee) => {
                info!(employee_id = employee.employee_id, "submitting employee");
                self.state.notice = Some(Notice::info(format!("Saving {}…", employee.full_name())));
                self.saving = true;
                self.pending.push(Effect::CreateEmployee(employee));
            }
            Err(err) => {
                debug!(%err, "draft rejected");
                self.state.notice = Some(Notice::error(err.to_string()));
            }
        }
    }

    fn on_employees_loaded(&mut self, ticket: FetchTicket, result: Result<Vec<Employee>, String>) {
        if let Some(next) = self.state.store.complete(ticket, result) {
            self.pending.push(Effect::FetchEmployees(next));
        }
        self.state.sync_form();
    }

    fn on_employee_saved(&mut self, result: Result<Employee, String>) {
        self.saving = false;
        match result {
            Ok(employee) => {
                info!(employee_id = employee.employee_id, "employee saved");
                self.state.notice = Some(Notice::info(format!("Saved {}", employee.full_name())));
                if let Some(ticket) = self.state.store.invalidate() {
                    self.pending.push(Effect::FetchEmployees(ticket));
                }
            }
            Err(err) => {
                warn!(%err, "failed to save employee");
                self.state.notice = Some(Notice::error(format!("Save failed: {err}")));
            }
        }
    }

    /// Handles a mouse click at the given coordinates.
    ///
    /// Hit-testing uses the regions recorded by the last render.
    fn handle_click(&mut self, column: u16, row: u16) {
        if self.table_layout.is_add_button(column, row) {
            self.start_add();
            return;
        }

        if let Some(index) = self.table_layout.row_at(column, row) {
            self.state.select(Some(index));
            self.state.focus = Focus::Table;
            return;
        }

        if let Some(field) = self.form_layout.field_at(column, row) {
            self.state.focus = Focus::Form;
            self.state.form.focus(field);
            if field.is_button() || field.is_choice() {
                self.activate(field);
            }
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Shows a "terminal too small" message below the minimum dimensions.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.table_layout = TableLayout::default();
            self.form_layout = FormLayout::default();
            self.render_terminal_too_small(frame, area);
            return;
        }

        let [header_area, table_area, form_area, status_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        self.render_header(frame, header_area);

        let buf = frame.buffer_mut();
        self.table_layout = render_table(
            self.state.store.status(),
            self.state.selected,
            self.state.focus == Focus::Table,
            self.table_offset,
            table_area,
            buf,
        );
        self.table_offset = self.table_layout.offset;
        self.form_layout = render_form(
            &self.state.form,
            self.state.focus == Focus::Form,
            form_area,
            buf,
        );
        render_status_bar(
            self.state.focus,
            self.state.notice.as_ref(),
            status_area,
            buf,
        );

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            y: area.y + vertical_offset,
            height: area.height.saturating_sub(vertical_offset),
            ..area
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let mut title = vec![
            Span::styled(
                "roster",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Employee Directory", Style::default().fg(Color::White)),
        ];
        if self.state.store.is_fetching() {
            title.push(Span::styled(
                "  loading…",
                Style::default().fg(Color::DarkGray),
            ));
        } else if let Some(fetched_at) = self.state.store.fetched_at() {
            title.push(Span::styled(
                format!("  updated {}", fetched_at.with_timezone(&Local).format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(title)), title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Spawns a task for every queued effect.
    ///
    /// Each task reports back on `tx` with the matching completion message.
    fn dispatch_effects(&mut self, client: &EmployeeClient, tx: &mpsc::UnboundedSender<Message>) {
        for effect in self.take_effects() {
            let client = client.clone();
            let tx = tx.clone();
            match effect {
                Effect::FetchEmployees(ticket) => {
                    debug!(ticket = ticket.generation(), "fetching employees");
                    tokio::spawn(async move {
                        let result = client.list_employees().await.map_err(|e| e.to_string());
                        let _ = tx.send(Message::EmployeesLoaded {
                            ticket: ticket.generation(),
                            result,
                        });
                    });
                }
                Effect::CreateEmployee(employee) => {
                    tokio::spawn(async move {
                        let result = client
                            .create_employee(&employee)
                            .await
                            .map(|()| employee)
                            .map_err(|e| e.to_string());
                        let _ = tx.send(Message::EmployeeSaved { result });
                    });
                }
            }
        }
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It dispatches queued requests, renders, polls for input, and applies
    /// completed requests.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use roster_client::EmployeeClient;
    /// use roster_config::ApiConfig;
    /// use roster_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let client = EmployeeClient::new(&ApiConfig::default())?;
    ///     let mut session = terminal::TerminalSession::enter()?;
    ///     let mut app = App::new();
    ///     app.run(session.terminal_mut(), client).await?;
    ///     session.exit()?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(
        &mut self,
        terminal: &mut AppTerminal,
        client: EmployeeClient,
    ) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();

        loop {
            self.dispatch_effects(&client, &tx);

            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                if let Some(msg) = event_to_message(&event, self.state.focus) {
                    self.update(msg);
                }
            }

            while let Ok(msg) = rx.try_recv() {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}
