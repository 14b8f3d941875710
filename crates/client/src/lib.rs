//! HTTP client for the employee collection endpoint.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - [`EmployeeClient`]: lists employees (`GET`) and creates them (`POST`)
//! - [`decode_listing`]: the pure decoder for the listing envelope
//! - [`EmployeeStore`], [`FetchTicket`] and [`ListStatus`]: the owned list
//!   store that keeps at most one list fetch in flight
//! - [`Error`]: Error types for endpoint operations
//!
//! # Wire Format
//!
//! The listing response wraps the records in a HAL-style envelope keyed by
//! the collection name:
//!
//! ```json
//! { "_embedded": { "users": [ { "firstName": "Ada", ... } ] } }
//! ```
//!
//! Created records are posted as a single bare employee object.
//!
//! # Examples
//!
//! ```no_run
//! use roster_client::{EmployeeClient, EmployeeStore};
//! use roster_config::ApiConfig;
//!
//! # async fn example() -> roster_client::Result<()> {
//! let client = EmployeeClient::new(&ApiConfig::default())?;
//! let mut store = EmployeeStore::new();
//!
//! if let Some(ticket) = store.fetch() {
//!     let result = client.list_employees().await.map_err(|e| e.to_string());
//!     store.complete(ticket, result);
//! }
//! println!("{} employees", store.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod store;

pub use client::{EmployeeClient, decode_listing};
pub use error::{Error, Result};
pub use store::{EmployeeStore, FetchTicket, ListStatus};
