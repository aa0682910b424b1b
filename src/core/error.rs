use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FxError {
    /// An error occurred during an HTTP request (connection, TLS, timeout,
    /// or reading the body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, with the credential redacted.
        url: String,
    },

    /// The data received from the API was in an unexpected format or was
    /// missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The client was built without an API credential.
    #[error("api credential missing: set FxClientBuilder::api_key")]
    MissingCredential,
}

impl FxError {
    /// Whether this failure happened on the wire (connection, TLS, timeout,
    /// or a non-success status). Transport failures are candidates for a
    /// retry at a higher layer; data failures are not, since retrying does
    /// not change the response shape.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }

    /// Whether this failure is a data-shape mismatch in an otherwise
    /// successful response.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }
}
