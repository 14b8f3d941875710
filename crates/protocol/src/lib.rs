//! Shared protocol types for the roster application.
//!
//! This crate defines the core types used across all roster components:
//! the employee record, its enumerations, the input masks and color
//! mappings, and the UI message type.
//!
//! # Overview
//!
//! - [`employee`]: The `Employee` record, `Salutation`, `Gender`, `ProfileColor`
//! - [`format`]: Input masks and enumeration/color display mappings
//! - [`message`]: TUI event and completion messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use roster_protocol::format::{to_alphabetic, to_grouped_numeric};
//! use roster_protocol::{Gender, Salutation};
//!
//! assert_eq!(to_alphabetic("J0hn"), "John");
//! assert_eq!(to_grouped_numeric("85000"), "85 000");
//! assert_eq!(Salutation::Ms.implied_gender(), Some(Gender::F));
//! ```

pub mod employee;
pub mod error;
pub mod format;
pub mod message;

// Re-export primary types at crate root for convenience
pub use employee::{Employee, Gender, ProfileColor, Salutation};
pub use error::{ProtocolError, Result};
pub use message::Message;
