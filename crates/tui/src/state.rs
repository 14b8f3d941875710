//! Application state management.
//!
//! This module defines the core state of the TUI: the employee store, the
//! table selection, the form, and focus management. The form seed is a pure
//! function of the store and the selection; [`AppState::sync_form`] keeps
//! the form in step with it.

use roster_client::EmployeeStore;
use roster_protocol::Employee;

use crate::form_state::{EmployeeDraft, FormState};

/// The current focus area in the UI.
///
/// Determines which UI component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the employee table.
    #[default]
    Table,
    /// Focus is on the employee form.
    Form,
}

/// Severity of a status bar notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Confirmation of a completed action.
    Info,
    /// A failed action.
    Error,
}

/// A one-line message shown in the status bar until the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub kind: NoticeKind,
    /// Text to display.
    pub text: String,
}

impl Notice {
    /// Creates an informational notice.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// The application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// The fetched employee list.
    pub store: EmployeeStore,
    /// Index of the selected row; `None` means add-new mode.
    pub selected: Option<usize>,
    /// The employee form.
    pub form: FormState,
    /// Current focus area.
    pub focus: Focus,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The latest status bar notice.
    pub notice: Option<Notice>,
}

impl AppState {
    /// Creates a state with an empty store, no selection, and a blank form.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_tui::{AppState, Focus};
    ///
    /// let state = AppState::new();
    /// assert_eq!(state.selected, None);
    /// assert_eq!(state.focus, Focus::Table);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }

    /// Selects a row (or add-new mode with `None`) and reseeds the form.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
        self.sync_form();
    }

    /// Moves the selection up, wrapping to the last row.
    pub fn navigate_up(&mut self) {
        let len = self.store.len();
        let next = match self.selected {
            _ if len == 0 => None,
            Some(idx) if idx > 0 && idx < len => Some(idx - 1),
            Some(_) => Some(len - 1),
            None => Some(0),
        };
        self.select(next);
    }

    /// Moves the selection down, wrapping to the first row.
    pub fn navigate_down(&mut self) {
        let len = self.store.len();
        let next = match self.selected {
            _ if len == 0 => None,
            Some(idx) if idx + 1 < len => Some(idx + 1),
            Some(_) | None => Some(0),
        };
        self.select(next);
    }

    /// Returns the selected employee, if the selection points at a loaded row.
    #[must_use]
    pub fn selected_employee(&self) -> Option<&Employee> {
        self.store.get(self.selected?)
    }

    /// Returns the draft the form should currently be seeded with.
    ///
    /// This is the selected record when the selection is valid, otherwise
    /// the blank add-new template.
    #[must_use]
    pub fn form_seed(&self) -> EmployeeDraft {
        self.selected_employee()
            .map_or_else(EmployeeDraft::blank, EmployeeDraft::from_employee)
    }

    /// Resets the form when its seed no longer matches the derived seed.
    ///
    /// Returns `true` if the form was reset.
    pub fn sync_form(&mut self) -> bool {
        let seed = self.form_seed();
        if self.form.original() == &seed {
            return false;
        }
        self.form.reset(seed);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_state::FormField;
    use roster_protocol::{Gender, ProfileColor, Salutation};

    fn employee(id: u64, first_name: &str) -> Employee {
        Employee {
            first_name: first_name.to_string(),
            last_name: "Example".to_string(),
            employee_id: id,
            gross_salary: 50_000,
            salutation: Salutation::Ms,
            gender: Gender::F,
            color: ProfileColor::Blue,
        }
    }

    fn loaded(employees: Vec<Employee>) -> AppState {
        let mut state = AppState::new();
        let ticket = state.store.fetch().unwrap();
        state.store.complete(ticket, Ok(employees));
        state.sync_form();
        state
    }

    #[test]
    fn new_state_has_correct_defaults() {
        let state = AppState::new();
        assert_eq!(state.focus, Focus::Table);
        assert_eq!(state.selected, None);
        assert!(!state.help_visible);
        assert!(state.notice.is_none());
        assert_eq!(state.form.draft(), &EmployeeDraft::blank());
    }

    #[test]
    fn navigate_in_empty_table() {
        let mut state = loaded(vec![]);
        state.navigate_down();
        assert_eq!(state.selected, None);
        state.navigate_up();
        assert_eq!(state.selected, None);
    }

    #[test]
    fn navigate_wraps_around() {
        let mut state = loaded(vec![employee(1, "Ann"), employee(2, "Bea"), employee(3, "Cy")]);

        state.navigate_down();
        assert_eq!(state.selected, Some(0));
        state.navigate_down();
        state.navigate_down();
        assert_eq!(state.selected, Some(2));
        state.navigate_down();
        assert_eq!(state.selected, Some(0));

        state.navigate_up();
        assert_eq!(state.selected, Some(2));
    }

    #[test]
    fn selecting_a_row_seeds_the_form() {
        let mut state = loaded(vec![employee(1, "Ann"), employee(2, "Bea")]);
        state.select(Some(1));
        assert_eq!(state.form.draft().first_name, "Bea");
        assert_eq!(state.form.draft().employee_id, "2");
    }

    #[test]
    fn add_new_uses_blank_template() {
        let mut state = loaded(vec![employee(1, "Ann")]);
        state.select(Some(0));
        state.select(None);
        assert_eq!(state.form.draft(), &EmployeeDraft::blank());
    }

    #[test]
    fn out_of_range_selection_uses_blank_template() {
        let mut state = loaded(vec![employee(1, "Ann")]);
        state.select(Some(5));
        assert!(state.selected_employee().is_none());
        assert_eq!(state.form_seed(), EmployeeDraft::blank());
    }

    #[test]
    fn sync_keeps_edits_while_seed_is_unchanged() {
        let mut state = loaded(vec![employee(1, "Ann")]);
        state.select(Some(0));
        state.form.set_text(FormField::FirstName, "Anna");

        assert!(!state.sync_form());
        assert_eq!(state.form.draft().first_name, "Anna");
    }

    #[test]
    fn sync_resets_when_refetched_record_changes() {
        let mut state = loaded(vec![employee(1, "Ann")]);
        state.select(Some(0));
        state.form.set_text(FormField::FirstName, "Anna");

        let ticket = state.store.invalidate().unwrap();
        state.store.complete(ticket, Ok(vec![employee(1, "Annie")]));

        assert!(state.sync_form());
        assert_eq!(state.form.draft().first_name, "Annie");
    }

    #[test]
    fn dismiss_help_when_visible() {
        let mut state = AppState::new();
        state.toggle_help();
        assert!(state.dismiss_help());
        assert!(!state.help_visible);
        assert!(!state.dismiss_help());
    }
}
