//! In-memory store for the fetched employee list.
//!
//! The store owns the most recent listing together with its load state and
//! hands out [`FetchTicket`]s so that at most one list fetch is in flight.
//! Results for tickets that are no longer current are ignored.
//!
//! # Examples
//!
//! ```
//! use roster_client::{EmployeeStore, ListStatus};
//!
//! let mut store = EmployeeStore::new();
//! let ticket = store.fetch().unwrap();
//! assert!(matches!(store.status(), ListStatus::Loading));
//!
//! // A second fetch while the first is in flight is merged into it.
//! assert!(store.fetch().is_none());
//!
//! store.complete(ticket, Ok(vec![]));
//! assert!(matches!(store.status(), ListStatus::Ready(list) if list.is_empty()));
//! ```

use chrono::{DateTime, Utc};
use roster_protocol::Employee;
use tracing::{debug, warn};

/// Identifies one list fetch issued by an [`EmployeeStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    /// Returns the fetch generation this ticket belongs to.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }

    /// Rebuilds a ticket from a generation reported back by a fetch task.
    #[must_use]
    pub const fn from_generation(generation: u64) -> Self {
        Self(generation)
    }
}

/// The displayable state of the employee list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus<'a> {
    /// No listing is available yet.
    Loading,
    /// The last fetch failed.
    Failed(&'a str),
    /// The listing, in server order.
    Ready(&'a [Employee]),
}

/// Owns the fetched employee list and its load state.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    employees: Option<Vec<Employee>>,
    error: Option<String>,
    fetched_at: Option<DateTime<Utc>>,
    next_generation: u64,
    in_flight: Option<u64>,
    refetch_requested: bool,
}

impl EmployeeStore {
    /// Creates an empty store with no fetch in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch unless one is already in flight.
    pub fn fetch(&mut self) -> Option<FetchTicket> {
        if self.in_flight.is_some() {
            debug!("list fetch already in flight");
            return None;
        }
        Some(self.issue())
    }

    /// Marks the listing as outdated.
    ///
    /// Starts a fetch when idle. Otherwise a follow-up fetch is issued once the
    /// in-flight one completes, since its response may predate the change.
    pub fn invalidate(&mut self) -> Option<FetchTicket> {
        if self.in_flight.is_some() {
            debug!("refetch queued behind in-flight fetch");
            self.refetch_requested = true;
            return None;
        }
        Some(self.issue())
    }

    /// Applies the result of a fetch.
    ///
    /// Results for anything but the in-flight ticket are dropped. Returns the
    /// follow-up ticket when a refetch was requested in the meantime.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Employee>, String>,
    ) -> Option<FetchTicket> {
        if self.in_flight != Some(ticket.0) {
            debug!(generation = ticket.0, "ignoring stale list result");
            return None;
        }
        self.in_flight = None;

        match result {
            Ok(employees) => {
                debug!(generation = ticket.0, count = employees.len(), "list loaded");
                self.employees = Some(employees);
                self.error = None;
                self.fetched_at = Some(Utc::now());
            }
            Err(message) => {
                warn!(generation = ticket.0, error = %message, "list fetch failed");
                self.employees = None;
                self.error = Some(message);
            }
        }

        if std::mem::take(&mut self.refetch_requested) {
            Some(self.issue())
        } else {
            None
        }
    }

    /// Returns the displayable state of the list.
    ///
    /// An error takes precedence; data is shown as soon as any fetch has
    /// succeeded, even while a refetch is running.
    #[must_use]
    pub fn status(&self) -> ListStatus<'_> {
        match (&self.error, &self.employees) {
            (Some(message), _) => ListStatus::Failed(message),
            (None, Some(employees)) => ListStatus::Ready(employees),
            (None, None) => ListStatus::Loading,
        }
    }

    /// Returns the employee at `index`, if the list is loaded and long enough.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Employee> {
        self.employees.as_ref()?.get(index)
    }

    /// Returns the number of loaded employees (zero when not loaded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.as_ref().map_or(0, Vec::len)
    }

    /// Returns whether no employees are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether a list fetch is in flight.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Returns when the current listing was fetched.
    #[must_use]
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    fn issue(&mut self) -> FetchTicket {
        self.next_generation += 1;
        self.in_flight = Some(self.next_generation);
        debug!(generation = self.next_generation, "issuing list fetch");
        FetchTicket(self.next_generation)
    }
}
