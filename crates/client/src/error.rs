//! Error types for employee endpoint operations.

/// Errors that can occur while talking to the employee endpoint.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{url} responded with status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// The response body is not a valid listing envelope.
    #[error("invalid listing response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The listing envelope has no embedded list for the collection.
    #[error("listing response has no embedded {collection:?} list")]
    MissingCollection {
        /// The expected embedded key.
        collection: String,
    },
}

/// A specialized Result type for employee endpoint operations.
pub type Result<T> = std::result::Result<T, Error>;
