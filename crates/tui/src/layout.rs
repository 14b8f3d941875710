//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components.

/// Height of the header bar in rows.
///
/// The header displays the application title and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Height of the employee form, borders included.
///
/// One button row, one spacer row, and five field rows.
pub const FORM_HEIGHT: u16 = 9;

/// Minimum terminal height for useful rendering.
///
/// Leaves the table room for its header row and a handful of employees
/// next to the header, form and status bar.
pub const MIN_HEIGHT: u16 = 24;

/// Minimum terminal width for useful rendering.
///
/// The form lays its fields out in two columns of labels and values.
pub const MIN_WIDTH: u16 = 60;
