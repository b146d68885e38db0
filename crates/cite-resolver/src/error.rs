//! Error types for the citation resolver.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! `ClientError` classifies what went wrong on the wire; `SourceError` is what the
//! source adapters and the orchestrator hand back to callers.

use std::fmt;
use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// XML parsing error
    #[error("Failed to parse XML response: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Well-formed payload without the element we need
    #[error("Response is missing the <{0}> element")]
    MissingElement(&'static str),
}

impl ClientError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Returns true if the request never completed within its deadline.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

/// The external source an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// DBLP publication search (JSON) and record lookup (XML).
    Dblp,
    /// arXiv article metadata (Atom XML).
    Arxiv,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dblp => f.write_str("DBLP"),
            Self::Arxiv => f.write_str("arXiv"),
        }
    }
}

/// Errors from the source adapters and the resolver.
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    /// Network failure, non-success status, or unparsable payload.
    #[error("{origin} unavailable: {reason}")]
    SourceUnavailable {
        /// Source that failed
        origin: Origin,
        /// Underlying client failure
        #[source]
        reason: ClientError,
    },

    /// The source answered, but with an empty result set.
    #[error("{origin} returned no candidates for {query:?}")]
    NoCandidates {
        /// Source that was asked
        origin: Origin,
        /// Query text
        query: String,
    },

    /// Input that cannot be turned into a lookup.
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    /// A URL from a site no adapter understands.
    #[error("Unsupported query source: {0}")]
    UnsupportedQuery(String),

    /// The caller cancelled resolution before it finished.
    #[error("Resolution cancelled")]
    Cancelled,
}

impl SourceError {
    /// Create a source unavailable error.
    #[must_use]
    pub fn unavailable(origin: Origin, reason: impl Into<ClientError>) -> Self {
        Self::SourceUnavailable { origin, reason: reason.into() }
    }

    /// Create a no candidates error.
    #[must_use]
    pub fn no_candidates(origin: Origin, query: impl Into<String>) -> Self {
        Self::NoCandidates { origin, query: query.into() }
    }

    /// Returns true if the source could not be asked at all.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }

    /// Returns true if the caller cancelled resolution.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for source adapter and resolver operations.
pub type SourceResult<T> = Result<T, SourceError>;
