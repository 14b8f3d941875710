//! Employee endpoint client implementation.
//!
//! This module provides the [`EmployeeClient`] struct which lists and
//! creates employees over HTTP, plus the pure [`decode_listing`] decoder
//! for the listing envelope.

use std::collections::HashMap;

use roster_config::ApiConfig;
use roster_protocol::Employee;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};

/// Client for the employee collection endpoint.
///
/// Each call is a single request: there is no retry, no timeout beyond the
/// transport's own, and no cancellation.
///
/// # Examples
///
/// ```no_run
/// use roster_client::EmployeeClient;
/// use roster_config::ApiConfig;
///
/// # async fn example() -> roster_client::Result<()> {
/// let client = EmployeeClient::new(&ApiConfig::default())?;
/// for employee in client.list_employees().await? {
///     println!("{}", employee.full_name());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    /// The underlying reqwest client.
    http: reqwest::Client,
    /// `<base_url>/<collection>`, used for both listing and creating.
    collection_url: String,
    /// Key of the embedded list in the listing envelope.
    collection: String,
}

impl EmployeeClient {
    /// Creates a client for the configured collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the HTTP client cannot be initialized.
    #[instrument(skip(api), fields(url = %api.collection_url()))]
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!("created employee client");
        Ok(Self {
            http,
            collection_url: api.collection_url(),
            collection: api.collection.clone(),
        })
    }

    /// Returns the collection URL this client talks to.
    #[must_use]
    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    /// Fetches the full employee list, in the order the server delivers it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failure, [`Error::Status`] on a
    /// non-success status, and [`Error::Decode`] or
    /// [`Error::MissingCollection`] when the body is not a listing envelope.
    #[instrument(skip(self), fields(url = %self.collection_url))]
    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        let response = self.http.get(&self.collection_url).send().await?;
        let response = self.check_status(response)?;
        let body = response.text().await?;

        let employees = decode_listing(&body, &self.collection)?;
        debug!(count = employees.len(), "listed employees");
        Ok(employees)
    }

    /// Submits a new employee record.
    ///
    /// The response body is not read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failure and [`Error::Status`] on a
    /// non-success status.
    #[instrument(skip(self, employee), fields(url = %self.collection_url, employee_id = employee.employee_id))]
    pub async fn create_employee(&self, employee: &Employee) -> Result<()> {
        let response = self
            .http
            .post(&self.collection_url)
            .json(employee)
            .send()
            .await?;
        self.check_status(response)?;

        debug!("created employee");
        Ok(())
    }

    fn check_status(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            warn!(status = status.as_u16(), "request rejected");
            Err(Error::Status {
                status: status.as_u16(),
                url: self.collection_url.clone(),
            })
        }
    }
}

#[derive(Deserialize)]
struct Listing {
    #[serde(rename = "_embedded")]
    embedded: HashMap<String, serde_json::Value>,
}

/// Decodes a listing envelope of the form
/// `{"_embedded": {"<collection>": [Employee, ...]}}`.
///
/// Other keys of the envelope and of `_embedded` are ignored.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the body is not JSON, has no `_embedded`
/// object, or the embedded list holds something other than employees, and
/// [`Error::MissingCollection`] if the collection key is absent.
///
/// # Examples
///
/// ```
/// use roster_client::decode_listing;
///
/// let body = r#"{"_embedded": {"users": [{
///     "firstName": "Ada", "lastName": "Lovelace", "employeeId": 7,
///     "grossSalary": 120000, "salutation": "DR", "gender": "F", "color": "BLUE"
/// }]}}"#;
///
/// let employees = decode_listing(body, "users").unwrap();
/// assert_eq!(employees[0].full_name(), "Ada Lovelace");
///
/// assert!(decode_listing(body, "staff").is_err());
/// ```
pub fn decode_listing(body: &str, collection: &str) -> Result<Vec<Employee>> {
    let mut listing: Listing = serde_json::from_str(body)?;
    let list = listing
        .embedded
        .remove(collection)
        .ok_or_else(|| Error::MissingCollection {
            collection: collection.to_string(),
        })?;

    Ok(serde_json::from_value(list)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_protocol::{Gender, ProfileColor, Salutation};

    const LISTING: &str = r#"{
        "_embedded": {
            "users": [
                {"firstName": "Grace", "lastName": "Hopper", "employeeId": 1,
                 "grossSalary": 98000, "salutation": "MRS", "gender": "F", "color": "GREEN"},
                {"firstName": "Alan", "lastName": "Turing", "employeeId": 2,
                 "grossSalary": 87000, "salutation": "DR", "gender": "M", "color": "DEFAULT"}
            ]
        },
        "_links": {"self": {"href": "http://localhost:8080/users"}}
    }"#;

    #[test]
    fn decode_listing_preserves_order() {
        let employees = decode_listing(LISTING, "users").unwrap();
        let ids: Vec<u64> = employees.iter().map(|e| e.employee_id).collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(employees[0].salutation, Salutation::Mrs);
        assert_eq!(employees[1].gender, Gender::M);
        assert_eq!(employees[1].color, ProfileColor::Default);
    }

    #[test]
    fn decode_listing_accepts_floating_point_salaries() {
        let body = r#"{"_embedded": {"users": [
            {"firstName": "Grace", "lastName": "Hopper", "employeeId": 1,
             "grossSalary": 85000.0, "salutation": "MRS", "gender": "F", "color": "GREEN"},
            {"firstName": "Alan", "lastName": "Turing", "employeeId": 2,
             "grossSalary": 87000, "salutation": "DR", "gender": "M", "color": "DEFAULT"}
        ]}}"#;

        let employees = decode_listing(body, "users").unwrap();
        let salaries: Vec<u64> = employees.iter().map(|e| e.gross_salary).collect();
        assert_eq!(salaries, [85_000, 87_000]);
    }

    #[test]
    fn decode_listing_accepts_empty_list() {
        let employees = decode_listing(r#"{"_embedded": {"users": []}}"#, "users").unwrap();
        assert!(employees.is_empty());
    }

    #[test]
    fn decode_listing_requires_envelope() {
        let err = decode_listing("[]", "users").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));

        let err = decode_listing(r#"{"users": []}"#, "users").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn decode_listing_requires_collection_key() {
        let err = decode_listing(r#"{"_embedded": {"staff": []}}"#, "users").unwrap_err();
        assert!(matches!(err, Error::MissingCollection { collection } if collection == "users"));
    }

    #[test]
    fn decode_listing_rejects_malformed_records() {
        let body = r#"{"_embedded": {"users": [{"firstName": "Grace"}]}}"#;
        assert!(matches!(decode_listing(body, "users"), Err(Error::Decode(_))));
    }

    #[test]
    fn client_uses_collection_url() {
        let api = ApiConfig::new("http://127.0.0.1:9000/", "staff");
        let client = EmployeeClient::new(&api).unwrap();
        assert_eq!(client.collection_url(), "http://127.0.0.1:9000/staff");
    }
}
