//! Widget components for the roster TUI.
//!
//! Each widget is a function that renders state into a buffer. The table
//! and the form also return the screen regions they drew, which the app
//! keeps for mouse hit-testing.
//!
//! # Modules
//!
//! - [`table`]: The employee table with its add-new control
//! - [`form`]: The employee form with its Cancel and Save buttons
//! - [`status_bar`]: The footer with notices and keybinding hints
//! - [`help`]: The keybinding overlay
//!
//! # Row Colors
//!
//! Rows carry class strings resolved by [`crate::theme`]:
//!
//! | Row | Classes |
//! |-----|---------|
//! | Even, unselected | `bg-gray-100 cursor-pointer` |
//! | Odd, unselected | `bg-white cursor-pointer` |
//! | Selected `GREEN` / `BLUE` / `RED` | `bg-green-400` / `bg-blue-400` / `bg-red-400` |
//! | Selected `DEFAULT` | none |
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use roster_client::ListStatus;
//! use roster_protocol::{Employee, Gender, ProfileColor, Salutation};
//! use roster_tui::widgets;
//!
//! let employees = vec![Employee {
//!     first_name: "Ada".to_string(),
//!     last_name: "Lovelace".to_string(),
//!     employee_id: 1,
//!     gross_salary: 90_000,
//!     salutation: Salutation::Dr,
//!     gender: Gender::F,
//!     color: ProfileColor::Blue,
//! }];
//!
//! let area = Rect::new(0, 0, 80, 12);
//! let mut buf = Buffer::empty(area);
//!
//! let layout = widgets::render_table(ListStatus::Ready(&employees), Some(0), true, 0, area, &mut buf);
//! assert_eq!(layout.row_at(layout.body.x, layout.body.y), Some(0));
//! ```

pub mod form;
pub mod help;
pub mod status_bar;
pub mod table;

// Re-export primary rendering functions for convenience
pub use form::{FormLayout, render_form};
pub use help::render_help_overlay;
pub use status_bar::render_status_bar;
pub use table::{TableLayout, render_table};
