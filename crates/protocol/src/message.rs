//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the input handler, background network tasks, and the application state.

use serde::{Deserialize, Serialize};

use crate::employee::Employee;

/// Messages that represent user actions or completed background work.
///
/// Input messages are produced by the event handler; completion messages
/// are sent by the tasks that talk to the employee endpoint.
///
/// # Examples
///
/// ```
/// use roster_protocol::Message;
///
/// let msg = Message::EmployeeSaved { result: Err("timed out".to_string()) };
/// assert!(msg.is_completion());
/// assert!(!Message::NavigateDown.is_completion());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move the table selection up.
    NavigateUp,
    /// Move the table selection down.
    NavigateDown,
    /// Activate the focused item (row, button, or field).
    Select,
    /// Escape: leave the form or clear the selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Refetch the employee list.
    Refresh,
    /// Toggle help overlay.
    ToggleHelp,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },
    /// Switch to add-new mode (no selection).
    AddNew,

    // --- Form messages ---
    /// Focus the next form field.
    NextField,
    /// Focus the previous form field.
    PrevField,
    /// Cycle the focused choice field.
    CycleChoice {
        /// Direction to cycle (positive = next, negative = previous).
        delta: i32,
    },
    /// Input a character into the focused text field.
    Input {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last character of the focused text field.
    Backspace,
    /// Submit the draft.
    Save,
    /// Discard edits and restore the draft from its seed.
    Cancel,

    // --- Completions ---
    /// A list fetch finished.
    EmployeesLoaded {
        /// The store ticket the fetch was started with.
        ticket: u64,
        /// The fetched employees, or a description of the failure.
        result: Result<Vec<Employee>, String>,
    },
    /// A create request finished.
    EmployeeSaved {
        /// The submitted employee, or a description of the failure.
        result: Result<Employee, String>,
    },
}

impl Message {
    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message reports finished background work.
    #[must_use]
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            Self::EmployeesLoaded { .. } | Self::EmployeeSaved { .. }
        )
    }
}
